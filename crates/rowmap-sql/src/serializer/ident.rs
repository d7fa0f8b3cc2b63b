use super::{Formatter, ToSql};

use rowmap_core::Dialect;

/// A single identifier, quoted for the target dialect.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let name = self.0.as_ref();

        let (open, close) = match f.serializer.dialect {
            Dialect::Ansi => {
                f.dst.push_str(name);
                return;
            }
            Dialect::SqlServer => ('[', ']'),
            Dialect::Postgresql | Dialect::Sqlite => ('"', '"'),
            Dialect::Mysql => ('`', '`'),
        };

        f.dst.push(open);
        for ch in name.chars() {
            // A closing quote inside the name is escaped by doubling it
            if ch == close {
                f.dst.push(close);
            }
            f.dst.push(ch);
        }
        f.dst.push(close);
    }
}
