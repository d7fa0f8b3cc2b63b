use super::{Formatter, Ident, Period, ToSql};

/// A possibly schema-qualified table name. Each dotted part is quoted on its
/// own: `dbo.People` becomes `[dbo].[People]`.
pub(super) struct TableName<'a>(pub(super) &'a str);

impl ToSql for TableName<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, Period(self.0.split('.').map(Ident)));
    }
}
