use super::{ColumnInfo, TypeInfoBuilder};
use crate::{Error, Result};

/// Table and column mapping of one Rust type.
///
/// Built once per type (by `#[derive(Model)]` or by hand through
/// [`TypeInfo::builder`]) and shared read-only afterwards through the
/// [`TypeInfoCache`](super::TypeInfoCache).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeInfo {
    /// Name of the Rust type
    pub type_name: String,

    /// Explicit table name. When `None`, the table is named after the type.
    pub table_name: Option<String>,

    /// Columns in declaration order, including ignored fields.
    pub columns: Vec<ColumnInfo>,
}

impl TypeInfo {
    pub fn builder(type_name: impl Into<String>) -> TypeInfoBuilder {
        TypeInfoBuilder::new(type_name)
    }

    /// Name of the table the type maps to.
    pub fn table(&self) -> &str {
        self.table_name.as_deref().unwrap_or(&self.type_name)
    }

    /// Columns read by a select, in declaration order.
    pub fn select_columns(&self) -> impl Iterator<Item = &ColumnInfo> + '_ {
        self.columns.iter().filter(|column| !column.ignored)
    }

    pub fn key_columns(&self) -> impl Iterator<Item = &ColumnInfo> + '_ {
        self.select_columns().filter(|column| column.key)
    }

    /// Columns written by an insert.
    pub fn insert_columns(&self) -> impl Iterator<Item = &ColumnInfo> + '_ {
        self.columns.iter().filter(|column| column.is_writable())
    }

    /// Columns assigned by an update: everything writable except the key.
    pub fn update_columns(&self) -> impl Iterator<Item = &ColumnInfo> + '_ {
        self.insert_columns().filter(|column| !column.key)
    }

    pub fn has_columns(&self) -> bool {
        self.select_columns().next().is_some()
    }

    /// Returns the key column of a type keyed by exactly one column.
    pub fn key_column(&self) -> Result<&ColumnInfo> {
        let mut keys = self.key_columns();

        match (keys.next(), keys.next()) {
            (Some(key), None) => Ok(key),
            (None, _) => Err(Error::mapping(&self.type_name, "no key column")),
            (Some(_), Some(_)) => Err(Error::mapping(
                &self.type_name,
                "composite key where a single key column is required",
            )),
        }
    }

    pub fn column_by_field(&self, field: &str) -> Option<&ColumnInfo> {
        self.columns.iter().find(|column| column.field == field)
    }
}
