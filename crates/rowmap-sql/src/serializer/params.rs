use super::{Formatter, ToSql};

/// Named parameter reference. Every supported dialect accepts the `@name`
/// form; the engine binds it from the command's parameters.
pub(super) struct Placeholder<'a>(pub(super) &'a str);

impl ToSql for Placeholder<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push('@');
        f.dst.push_str(self.0);
    }
}
