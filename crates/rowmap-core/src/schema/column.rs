/// How one field of a mapped type is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    /// Name of the field on the Rust type. Statement placeholders use this
    /// name.
    pub field: String,

    /// Name of the column in the table.
    pub column: String,

    /// True if the column is part of the key.
    pub key: bool,

    /// True if the database generates the value (identity, sequence). Such
    /// columns are never written.
    pub auto: bool,

    /// True if the column is read-only (computed by the database).
    pub computed: bool,

    /// True if the field is not stored at all.
    pub ignored: bool,
}

impl ColumnInfo {
    /// A plain column whose name matches the field name.
    pub fn new(field: impl Into<String>) -> ColumnInfo {
        let field = field.into();
        ColumnInfo {
            column: field.clone(),
            field,
            key: false,
            auto: false,
            computed: false,
            ignored: false,
        }
    }

    /// Store the field under a different column name.
    pub fn column(mut self, column: impl Into<String>) -> ColumnInfo {
        self.column = column.into();
        self
    }

    pub fn key(mut self) -> ColumnInfo {
        self.key = true;
        self
    }

    pub fn auto(mut self) -> ColumnInfo {
        self.auto = true;
        self
    }

    pub fn computed(mut self) -> ColumnInfo {
        self.computed = true;
        self
    }

    pub fn ignored(mut self) -> ColumnInfo {
        self.ignored = true;
        self
    }

    /// True when the column name differs from the field name and a select
    /// must alias it back.
    pub fn is_renamed(&self) -> bool {
        self.column != self.field
    }

    pub fn is_writable(&self) -> bool {
        !(self.ignored || self.computed || self.auto)
    }
}
