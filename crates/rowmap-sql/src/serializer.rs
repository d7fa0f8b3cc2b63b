#[macro_use]
mod fmt;
use fmt::ToSql;

mod column;
use column::{Assign, SelectColumn};

mod delim;
use delim::{And, Comma, Period};

mod filter;
use filter::Filter;

mod flavor;

mod ident;
use ident::Ident;

mod name;
use name::TableName;

mod params;
use params::Placeholder;

// Statement renderers
mod statement;

use rowmap_core::Dialect;

/// Renders SQL text for mapped types.
///
/// One serializer exists per dialect; all renderers are pure functions of
/// the type metadata and their arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Serializer {
    /// The dialect decides identifier quoting and paging syntax.
    dialect: Dialect,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl Serializer {
    fn render(&self, write: impl FnOnce(&mut Formatter<'_>)) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        write(&mut fmt);
        ret
    }
}
