mod command;
pub use command::Command;

mod dialect;
pub use dialect::Dialect;

use crate::{
    async_trait,
    stmt::{Row, RowStream},
    Result,
};

/// What every connection declares, sync or async.
pub trait Session {
    /// Transaction handle accepted by the engine. rowmap passes it through
    /// without looking at it.
    type Transaction: ?Sized + Sync;

    /// SQL dialect spoken by the connection. Selects the statement renderer.
    fn dialect(&self) -> Dialect;
}

/// Blocking execution engine.
///
/// Implementations own parameter binding, row materialization and the
/// splitting of joined rows. Errors they raise should be built with
/// [`Error::driver`](crate::Error::driver) and reach the caller unchanged.
pub trait Connection: Session {
    /// Run a statement that returns rows.
    fn query(&self, command: Command<'_, Self::Transaction>) -> Result<Vec<Row>>;

    /// Run a statement whose rows hold several mapped types side by side.
    ///
    /// Every returned entry is one result row, already split into
    /// `split_on.len() + 1` segments: the first segment starts at the first
    /// column, segment `i + 1` at the column named `split_on[i]`.
    fn query_multi(
        &self,
        command: Command<'_, Self::Transaction>,
        split_on: &[String],
    ) -> Result<Vec<Vec<Row>>>;

    /// Run a statement that returns no rows. Returns the number of rows
    /// affected.
    fn execute(&self, command: Command<'_, Self::Transaction>) -> Result<u64>;
}

/// Asynchronous execution engine. Mirrors [`Connection`].
#[async_trait]
pub trait AsyncConnection: Session + Send + Sync {
    async fn query(&self, command: Command<'_, Self::Transaction>) -> Result<RowStream>;

    async fn query_multi(
        &self,
        command: Command<'_, Self::Transaction>,
        split_on: &[String],
    ) -> Result<Vec<Vec<Row>>>;

    async fn execute(&self, command: Command<'_, Self::Transaction>) -> Result<u64>;
}
