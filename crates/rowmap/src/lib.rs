pub mod crud;
pub use crud::{ModelExt, Scope};

pub mod cursor;
pub use cursor::{Cursor, FromCursor};

pub mod get_list;
pub use get_list::{GetList, GetListExt, GetListMulti, MultiMap};

mod model;
pub use model::Model;

mod split;
pub use split::resolve_split_on;

mod statement;

pub use rowmap_core::{
    async_trait,
    driver::{self, AsyncConnection, Command, Connection, Dialect, Session},
    schema::{self, ColumnInfo, TypeInfo, TypeInfoCache},
    stmt::{self, Params, Primitive, Row, RowStream, Value},
    Error, Result,
};
pub use rowmap_core::{bail, err};
pub use rowmap_macros::Model;
pub use rowmap_sql::Serializer;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{
        model::load_field,
        stmt::{Params, Primitive, Row},
        ColumnInfo, Error, Model, Result, TypeInfo,
    };
}
