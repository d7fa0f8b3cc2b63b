pub mod driver;
pub use driver::{AsyncConnection, Connection, Dialect, Session};

mod error;
pub use error::Error;

pub mod schema;
pub use schema::{ColumnInfo, TypeInfo, TypeInfoCache};

pub mod stmt;

/// A Result type alias that uses rowmap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
