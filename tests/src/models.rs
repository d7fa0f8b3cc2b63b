//! Mapped types shared by the integration tests.
#![allow(non_snake_case)]

use rowmap::Model;

#[derive(Debug, Clone, PartialEq, Model)]
#[table = "People"]
pub struct Person {
    pub Id: i64,
    pub Name: String,
}

#[derive(Debug, Clone, PartialEq, Model)]
#[table = "Orders"]
pub struct Order {
    pub Id: i64,
    pub Customer: String,
}

#[derive(Debug, Clone, PartialEq, Model)]
#[table = "OrderLines"]
pub struct OrderLine {
    pub Id: i64,
    pub OrderId: i64,
    pub Sku: String,
    pub Quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Model)]
#[table = "Products"]
pub struct Product {
    #[key]
    pub ProductId: i64,
    pub Title: String,
}

#[derive(Debug, Clone, PartialEq, Model)]
#[table = "Shipments"]
pub struct Shipment {
    pub Id: i64,
    pub Carrier: String,
}

/// A type with no key column, so joins must name its split column.
#[derive(Debug, Clone, PartialEq, Model)]
#[table = "AuditLog"]
pub struct AuditEntry {
    pub Message: String,
}
