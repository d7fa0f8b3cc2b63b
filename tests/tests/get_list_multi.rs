use pretty_assertions::assert_eq;
use rowmap::{Dialect, GetListExt, Params, Row};
use tests::{
    models::{AuditEntry, Order, OrderLine, Product, Shipment},
    MockConnection, MockTransaction,
};

use std::time::Duration;

const ORDER_LINES: &str = "SELECT o.Id, o.Customer, l.Id, l.OrderId, l.Sku, l.Quantity \
     FROM Orders o JOIN OrderLines l ON l.OrderId = o.Id";

fn order_line_row(order: i64, line: i64, sku: &str) -> Row {
    Row::new()
        .with("Id", order)
        .with("Customer", "acme")
        .with("Id", line)
        .with("OrderId", order)
        .with("Sku", sku)
        .with("Quantity", 2i64)
}

#[test]
fn split_defaults_to_key_of_secondary_type() {
    tests::init_tracing();
    let conn = MockConnection::new(Dialect::SqlServer);
    conn.respond_rows(vec![order_line_row(1, 10, "A"), order_line_row(1, 11, "B")]);

    let orders = conn
        .get_list_multi::<(Order, OrderLine)>(ORDER_LINES)
        .all()
        .unwrap();

    assert_eq!(
        orders,
        vec![
            Order {
                Id: 1,
                Customer: "acme".into()
            };
            2
        ]
    );

    let command = conn.last();
    assert_eq!(command.sql, ORDER_LINES);
    assert_eq!(command.split_on, Some(vec!["Id".to_string()]));
}

#[test]
fn projector_receives_every_type() {
    let conn = MockConnection::new(Dialect::Ansi);
    conn.respond_rows(vec![order_line_row(1, 10, "A"), order_line_row(2, 20, "B")]);

    let lines = conn
        .get_list_multi::<(Order, OrderLine)>(ORDER_LINES)
        .map(|(order, line)| (order.Id, line.Id, line.Sku))
        .unwrap();

    assert_eq!(lines, vec![(1, 10, "A".into()), (2, 20, "B".into())]);
}

#[test]
fn three_and_four_types_split_left_to_right() {
    let conn = MockConnection::new(Dialect::Ansi);

    let row = order_line_row(1, 10, "A")
        .with("ProductId", 100i64)
        .with("Title", "Anvil")
        .with("Id", 1000i64)
        .with("Carrier", "post");

    conn.respond_rows(vec![row.clone()]);
    conn.respond_rows(vec![row]);

    let triples = conn
        .get_list_multi::<(Order, OrderLine, Product)>("SELECT ...")
        .map(|(_, line, product)| (line.Sku, product.Title))
        .unwrap();
    assert_eq!(triples, vec![("A".to_string(), "Anvil".to_string())]);
    assert_eq!(
        conn.last().split_on,
        Some(vec!["Id".to_string(), "ProductId".to_string()])
    );

    let shipments = conn
        .get_list_multi::<(Order, OrderLine, Product, Shipment)>("SELECT ...")
        .map(|(order, _, _, shipment)| (order.Id, shipment))
        .unwrap();
    assert_eq!(
        shipments,
        vec![(
            1,
            Shipment {
                Id: 1000,
                Carrier: "post".into()
            }
        )]
    );
    assert_eq!(
        conn.last().split_on,
        Some(vec![
            "Id".to_string(),
            "ProductId".to_string(),
            "Id".to_string()
        ])
    );
}

#[test]
fn explicit_split_columns() {
    let conn = MockConnection::new(Dialect::Ansi);

    conn.get_list_multi::<(Order, OrderLine, Shipment)>("SELECT ...")
        .split_on("LineId, ShipmentId")
        .all()
        .unwrap();
    assert_eq!(
        conn.last().split_on,
        Some(vec!["LineId".to_string(), "ShipmentId".to_string()])
    );

    conn.get_list_multi::<(Order, OrderLine, Shipment)>("SELECT ...")
        .split_on("Id")
        .all()
        .unwrap();
    assert_eq!(
        conn.last().split_on,
        Some(vec!["Id".to_string(), "Id".to_string()])
    );
}

#[test]
fn keyless_secondary_type_requires_split_column() {
    let conn = MockConnection::new(Dialect::Ansi);

    let err = conn
        .get_list_multi::<(Order, AuditEntry)>("SELECT ...")
        .all()
        .unwrap_err();
    assert!(err
        .to_string()
        .starts_with("cannot infer the split column for `AuditEntry`"));
    assert!(conn.log().is_empty());

    conn.respond_rows(vec![Row::new()
        .with("Id", 1i64)
        .with("Customer", "acme")
        .with("Message", "created")]);

    let entries = conn
        .get_list_multi::<(Order, AuditEntry)>("SELECT ...")
        .split_on("Message")
        .map(|(_, entry)| entry.Message)
        .unwrap();
    assert_eq!(entries, vec!["created"]);
}

#[test]
fn mismatched_split_list_is_rejected() {
    let conn = MockConnection::new(Dialect::Ansi);

    let err = conn
        .get_list_multi::<(Order, OrderLine)>(ORDER_LINES)
        .split_on("Id,Sku,Quantity")
        .all()
        .unwrap_err();

    assert!(err.is_invalid_statement());
    assert!(conn.log().is_empty());
}

#[test]
fn statement_is_required() {
    let conn = MockConnection::new(Dialect::Ansi);

    let err = conn
        .get_list_multi::<(Order, OrderLine)>("  ")
        .all()
        .unwrap_err();

    assert!(err.is_invalid_statement());
    assert!(conn.log().is_empty());
}

#[test]
fn options_are_forwarded() {
    let conn = MockConnection::new(Dialect::Ansi);
    let tx = MockTransaction::new("reporting");
    let params = Params::new().bind("customer", "acme");

    conn.get_list_multi::<(Order, OrderLine)>(ORDER_LINES)
        .params(params.clone())
        .transaction(&tx)
        .timeout(Duration::from_millis(250))
        .all()
        .unwrap();

    let command = conn.last();
    assert_eq!(command.params, params);
    assert_eq!(command.transaction.as_deref(), Some("reporting"));
    assert_eq!(command.timeout, Some(Duration::from_millis(250)));
}

#[test]
fn missing_split_column_is_an_engine_error() {
    let conn = MockConnection::new(Dialect::Ansi);
    conn.respond_rows(vec![Row::new().with("Id", 1i64).with("Customer", "acme")]);

    let err = conn
        .get_list_multi::<(Order, OrderLine)>(ORDER_LINES)
        .all()
        .unwrap_err();

    assert!(err.is_driver());
    assert_eq!(err.to_string(), "engine error -2: split column `Id` not found");
}
