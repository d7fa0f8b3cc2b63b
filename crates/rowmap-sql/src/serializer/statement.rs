use super::{
    And, Assign, Comma, Filter, Formatter, Ident, Placeholder, SelectColumn, Serializer,
    TableName, ToSql,
};

use rowmap_core::{ColumnInfo, Dialect, Error, Result, TypeInfo};

impl Serializer {
    /// `SELECT <columns> FROM <table>`, followed by the filter fragment.
    ///
    /// A fragment that starts with a clause keyword (`WHERE`, `ORDER BY`, ...)
    /// is appended as-is; any other non-blank fragment is appended after a
    /// `WHERE` keyword.
    pub fn get_list(&self, info: &TypeInfo, filter: Option<&str>) -> Result<String> {
        let filter = Filter::new(filter);
        let select = Select::new(info)?;

        Ok(self.render(|f| fmt!(f, select, filter)))
    }

    /// Select one row by key: `SELECT <columns> FROM <table> WHERE k=@k`.
    pub fn get(&self, info: &TypeInfo) -> Result<String> {
        let select = Select::new(info)?;
        let key = KeyPredicate::new(info)?;

        Ok(self.render(|f| fmt!(f, select, key)))
    }

    /// `SELECT COUNT(*) FROM <table>`, followed by the filter fragment.
    pub fn count(&self, info: &TypeInfo, filter: Option<&str>) -> Result<String> {
        let filter = Filter::new(filter);

        Ok(self.render(|f| {
            fmt!(f, "SELECT COUNT(*) FROM ", TableName(info.table()), filter)
        }))
    }

    /// One page of [`Serializer::get_list`]. Pages are numbered from 1.
    pub fn get_page(
        &self,
        info: &TypeInfo,
        filter: Option<&str>,
        page: u64,
        page_size: u64,
    ) -> Result<String> {
        if page == 0 {
            return Err(Error::invalid_statement("page numbers start at 1"));
        }

        if page_size == 0 {
            return Err(Error::invalid_statement("page size must be at least 1"));
        }

        let offset = (page - 1).checked_mul(page_size).ok_or_else(|| {
            Error::invalid_statement(format!("page {page} of size {page_size} is out of range"))
        })?;

        let filter = Filter::new(filter);
        let select = Select::new(info)?;

        // OFFSET / FETCH is only valid on an ordered query
        let default_order = match self.dialect {
            Dialect::SqlServer if !filter.is_some_and(Filter::has_order_by) => {
                Some(DefaultOrder(info))
            }
            _ => None,
        };

        Ok(self.render(|f| {
            fmt!(f, select, filter, default_order);

            match self.dialect {
                Dialect::Postgresql | Dialect::Mysql | Dialect::Sqlite => {
                    fmt!(f, " LIMIT ", page_size, " OFFSET ", offset)
                }
                Dialect::Ansi | Dialect::SqlServer => fmt!(
                    f,
                    " OFFSET ",
                    offset,
                    " ROWS FETCH NEXT ",
                    page_size,
                    " ROWS ONLY"
                ),
            }
        }))
    }

    /// `INSERT INTO <table> (<columns>) VALUES (@field, ...)`, skipping
    /// database generated and read-only columns.
    pub fn insert(&self, info: &TypeInfo) -> Result<String> {
        let columns: Vec<_> = info.insert_columns().collect();

        if columns.is_empty() {
            return Err(Error::mapping(&info.type_name, "no writable columns"));
        }

        Ok(self.render(|f| {
            fmt!(
                f,
                "INSERT INTO ",
                TableName(info.table()),
                " (",
                Comma(columns.iter().map(|column| Ident(&column.column))),
                ") VALUES (",
                Comma(columns.iter().map(|column| Placeholder(&column.field))),
                ")"
            )
        }))
    }

    /// `UPDATE <table> SET c=@f, ... WHERE k=@k`.
    pub fn update(&self, info: &TypeInfo) -> Result<String> {
        let key = KeyPredicate::new(info)?;
        let columns: Vec<_> = info.update_columns().collect();

        if columns.is_empty() {
            return Err(Error::mapping(&info.type_name, "no updatable columns"));
        }

        Ok(self.render(|f| {
            fmt!(
                f,
                "UPDATE ",
                TableName(info.table()),
                " SET ",
                Comma(columns.iter().copied().map(Assign)),
                key
            )
        }))
    }

    /// `DELETE FROM <table> WHERE k=@k`.
    pub fn delete(&self, info: &TypeInfo) -> Result<String> {
        let key = KeyPredicate::new(info)?;

        Ok(self.render(|f| fmt!(f, "DELETE FROM ", TableName(info.table()), key)))
    }

    /// `DELETE FROM <table>`, followed by the filter fragment.
    pub fn delete_list(&self, info: &TypeInfo, filter: Option<&str>) -> Result<String> {
        let filter = Filter::new(filter);

        Ok(self.render(|f| fmt!(f, "DELETE FROM ", TableName(info.table()), filter)))
    }
}

/// `SELECT <columns> FROM <table>`
struct Select<'a> {
    info: &'a TypeInfo,
    columns: Vec<&'a ColumnInfo>,
}

impl<'a> Select<'a> {
    fn new(info: &'a TypeInfo) -> Result<Select<'a>> {
        let columns: Vec<_> = info.select_columns().collect();

        if columns.is_empty() {
            return Err(Error::mapping(&info.type_name, "no mapped columns"));
        }

        Ok(Select { info, columns })
    }
}

impl ToSql for Select<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(
            f,
            "SELECT ",
            Comma(self.columns.into_iter().map(SelectColumn)),
            " FROM ",
            TableName(self.info.table())
        );
    }
}

/// ` WHERE k1=@k1 AND k2=@k2`
struct KeyPredicate<'a> {
    keys: Vec<&'a ColumnInfo>,
}

impl<'a> KeyPredicate<'a> {
    fn new(info: &'a TypeInfo) -> Result<KeyPredicate<'a>> {
        let keys: Vec<_> = info.key_columns().collect();

        if keys.is_empty() {
            return Err(Error::mapping(&info.type_name, "no key column"));
        }

        Ok(KeyPredicate { keys })
    }
}

impl ToSql for KeyPredicate<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, " WHERE ", And(self.keys.into_iter().map(Assign)));
    }
}

/// ` ORDER BY <key columns>`, or an explicit no-op ordering for keyless
/// types.
struct DefaultOrder<'a>(&'a TypeInfo);

impl ToSql for DefaultOrder<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let keys: Vec<_> = self.0.key_columns().collect();

        if keys.is_empty() {
            fmt!(f, " ORDER BY (SELECT NULL)");
        } else {
            fmt!(
                f,
                " ORDER BY ",
                Comma(keys.into_iter().map(|column| Ident(&column.column)))
            );
        }
    }
}
