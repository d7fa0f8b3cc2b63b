use super::{Formatter, Ident, Placeholder, ToSql};

use rowmap_core::ColumnInfo;

/// A column in a select list, aliased back to its field name when the two
/// differ.
pub(super) struct SelectColumn<'a>(pub(super) &'a ColumnInfo);

/// `column=@field`, used by SET lists and key predicates.
pub(super) struct Assign<'a>(pub(super) &'a ColumnInfo);

impl ToSql for SelectColumn<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let column = self.0;

        if column.is_renamed() {
            fmt!(f, Ident(&column.column), " AS ", Ident(&column.field));
        } else {
            fmt!(f, Ident(&column.column));
        }
    }
}

impl ToSql for Assign<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, Ident(&self.0.column), "=", Placeholder(&self.0.field));
    }
}
