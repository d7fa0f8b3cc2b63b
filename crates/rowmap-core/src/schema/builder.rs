use super::{ColumnInfo, TypeInfo};

/// Field name that marks the key column of a type with no explicit key.
const CONVENTIONAL_KEY: &str = "id";

/// Builds a [`TypeInfo`] by explicit registration.
#[derive(Debug)]
pub struct TypeInfoBuilder {
    info: TypeInfo,
}

impl TypeInfoBuilder {
    pub(super) fn new(type_name: impl Into<String>) -> TypeInfoBuilder {
        TypeInfoBuilder {
            info: TypeInfo {
                type_name: type_name.into(),
                table_name: None,
                columns: vec![],
            },
        }
    }

    /// Map the type to an explicitly named table.
    pub fn table(mut self, name: impl Into<String>) -> TypeInfoBuilder {
        self.info.table_name = Some(name.into());
        self
    }

    pub fn column(mut self, column: ColumnInfo) -> TypeInfoBuilder {
        self.info.columns.push(column);
        self
    }

    /// Finish the mapping.
    ///
    /// A type that marks no column as key is keyed by its `id` field (any
    /// case), when it has one.
    pub fn build(mut self) -> TypeInfo {
        let has_key = self
            .info
            .columns
            .iter()
            .any(|column| column.key && !column.ignored);

        if !has_key {
            if let Some(column) = self.info.columns.iter_mut().find(|column| {
                !column.ignored && column.field.eq_ignore_ascii_case(CONVENTIONAL_KEY)
            }) {
                column.key = true;
            }
        }

        self.info
    }
}
