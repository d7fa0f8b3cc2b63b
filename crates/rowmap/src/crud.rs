use crate::{statement, Model};

use rowmap_core::{
    async_trait, bail,
    driver::{AsyncConnection, Command, Connection, Dialect, Session},
    stmt::{Params, Primitive, Row, RowStream, Value},
    Result,
};
use rowmap_sql::Serializer;

use std::{future::Future, time::Duration};

/// Single-entity and table-wide statements for mapped types, available on
/// every connection.
///
/// Every operation has a blocking form, usable when the connection
/// implements [`Connection`], and an `_async` form for [`AsyncConnection`].
pub trait ModelExt: Session {
    /// Run every statement issued through the returned scope inside
    /// `transaction`.
    fn in_transaction<'a>(&'a self, transaction: &'a Self::Transaction) -> Scope<'a, Self> {
        Scope::new(self).transaction(transaction)
    }

    /// Run every statement issued through the returned scope with a
    /// timeout.
    fn with_timeout(&self, timeout: Duration) -> Scope<'_, Self> {
        Scope::new(self).timeout(timeout)
    }

    /// Load the entity with the given key. `T` must be keyed by a single
    /// column.
    fn get<T: Model>(&self, key: impl Into<Value>) -> Result<Option<T>>
    where
        Self: Connection,
    {
        let (sql, params) = get_statement::<T>(self.dialect(), key.into())?;
        statement::log_dispatch("get", &sql, &params);

        let rows = Connection::query(self, Command::new(&sql, &params))?;
        rows.into_iter().next().map(T::load).transpose()
    }

    fn get_async<T: Model>(
        &self,
        key: impl Into<Value>,
    ) -> impl Future<Output = Result<Option<T>>> + Send
    where
        Self: AsyncConnection,
    {
        let prepared = get_statement::<T>(self.dialect(), key.into());

        async move {
            let (sql, params) = prepared?;
            statement::log_dispatch("get", &sql, &params);

            let mut rows = AsyncConnection::query(self, Command::new(&sql, &params)).await?;
            rows.next().await.transpose()?.map(T::load).transpose()
        }
    }

    /// Insert the entity. Returns `true` if the engine reported an affected
    /// row.
    fn insert<T: Model>(&self, entity: &T) -> Result<bool>
    where
        Self: Connection,
    {
        let (sql, params) = entity_statement(self.dialect(), "insert", entity, Serializer::insert)?;
        Ok(execute(self, &sql, &params)? > 0)
    }

    fn insert_async<T: Model>(&self, entity: &T) -> impl Future<Output = Result<bool>> + Send
    where
        Self: AsyncConnection,
    {
        let prepared = entity_statement(self.dialect(), "insert", entity, Serializer::insert);

        async move {
            let (sql, params) = prepared?;
            Ok(execute_async(self, &sql, &params).await? > 0)
        }
    }

    /// Update every writable, non-key column of the entity, matched by key.
    fn update<T: Model>(&self, entity: &T) -> Result<bool>
    where
        Self: Connection,
    {
        let (sql, params) = entity_statement(self.dialect(), "update", entity, Serializer::update)?;
        Ok(execute(self, &sql, &params)? > 0)
    }

    fn update_async<T: Model>(&self, entity: &T) -> impl Future<Output = Result<bool>> + Send
    where
        Self: AsyncConnection,
    {
        let prepared = entity_statement(self.dialect(), "update", entity, Serializer::update);

        async move {
            let (sql, params) = prepared?;
            Ok(execute_async(self, &sql, &params).await? > 0)
        }
    }

    /// Delete the entity, matched by key.
    fn delete<T: Model>(&self, entity: &T) -> Result<bool>
    where
        Self: Connection,
    {
        let (sql, params) = entity_statement(self.dialect(), "delete", entity, Serializer::delete)?;
        Ok(execute(self, &sql, &params)? > 0)
    }

    fn delete_async<T: Model>(&self, entity: &T) -> impl Future<Output = Result<bool>> + Send
    where
        Self: AsyncConnection,
    {
        let prepared = entity_statement(self.dialect(), "delete", entity, Serializer::delete);

        async move {
            let (sql, params) = prepared?;
            Ok(execute_async(self, &sql, &params).await? > 0)
        }
    }

    /// Delete every row matching the filter; all rows without one. Returns
    /// the number of rows deleted.
    fn delete_list<T: Model>(&self, filter: Option<&str>, params: &Params) -> Result<u64>
    where
        Self: Connection,
    {
        let sql = statement::render::<T>(self.dialect(), "delete_list", |serializer, info| {
            serializer.delete_list(info, filter)
        })?;
        execute(self, &sql, params)
    }

    fn delete_list_async<T: Model>(
        &self,
        filter: Option<&str>,
        params: &Params,
    ) -> impl Future<Output = Result<u64>> + Send
    where
        Self: AsyncConnection,
    {
        let sql = statement::render::<T>(self.dialect(), "delete_list", |serializer, info| {
            serializer.delete_list(info, filter)
        });

        async move { execute_async(self, &sql?, params).await }
    }

    /// Count the rows matching the filter.
    fn count<T: Model>(&self, filter: Option<&str>, params: &Params) -> Result<i64>
    where
        Self: Connection,
    {
        let sql = statement::render::<T>(self.dialect(), "count", |serializer, info| {
            serializer.count(info, filter)
        })?;
        statement::log_dispatch("count", &sql, params);

        let rows = Connection::query(self, Command::new(&sql, params))?;
        load_count(rows.into_iter().next())
    }

    fn count_async<T: Model>(
        &self,
        filter: Option<&str>,
        params: &Params,
    ) -> impl Future<Output = Result<i64>> + Send
    where
        Self: AsyncConnection,
    {
        let sql = statement::render::<T>(self.dialect(), "count", |serializer, info| {
            serializer.count(info, filter)
        });

        async move {
            let sql = sql?;
            statement::log_dispatch("count", &sql, params);

            let mut rows = AsyncConnection::query(self, Command::new(&sql, params)).await?;
            load_count(rows.next().await.transpose()?)
        }
    }

    /// Load one page of the rows matching the filter. Pages are numbered
    /// from 1.
    fn get_page<T: Model>(
        &self,
        filter: Option<&str>,
        params: &Params,
        page: u64,
        page_size: u64,
    ) -> Result<Vec<T>>
    where
        Self: Connection,
    {
        let sql = statement::render::<T>(self.dialect(), "get_page", |serializer, info| {
            serializer.get_page(info, filter, page, page_size)
        })?;
        statement::log_dispatch("get_page", &sql, params);

        Connection::query(self, Command::new(&sql, params))?
            .into_iter()
            .map(T::load)
            .collect()
    }

    fn get_page_async<T: Model>(
        &self,
        filter: Option<&str>,
        params: &Params,
        page: u64,
        page_size: u64,
    ) -> impl Future<Output = Result<Vec<T>>> + Send
    where
        Self: AsyncConnection,
    {
        let sql = statement::render::<T>(self.dialect(), "get_page", |serializer, info| {
            serializer.get_page(info, filter, page, page_size)
        });

        async move {
            let sql = sql?;
            statement::log_dispatch("get_page", &sql, params);

            let mut rows = AsyncConnection::query(self, Command::new(&sql, params)).await?;
            let mut ret = Vec::with_capacity(rows.min_len());

            while let Some(row) = rows.next().await {
                ret.push(T::load(row?)?);
            }

            Ok(ret)
        }
    }
}

impl<C: Session + ?Sized> ModelExt for C {}

fn get_statement<T: Model>(dialect: Dialect, key: Value) -> Result<(String, Params)> {
    let sql = statement::render::<T>(dialect, "get", Serializer::get)?;

    let info = T::type_info();
    let params = Params::new().bind(&info.key_column()?.field, key);

    Ok((sql, params))
}

fn entity_statement<T: Model>(
    dialect: Dialect,
    op: &'static str,
    entity: &T,
    render: impl FnOnce(&Serializer, &rowmap_core::TypeInfo) -> Result<String>,
) -> Result<(String, Params)> {
    let sql = statement::render::<T>(dialect, op, render)?;
    Ok((sql, entity.to_params()))
}

fn execute<C: Connection + ?Sized>(conn: &C, sql: &str, params: &Params) -> Result<u64> {
    statement::log_dispatch("execute", sql, params);
    Connection::execute(conn, Command::new(sql, params))
}

async fn execute_async<C: AsyncConnection + ?Sized>(
    conn: &C,
    sql: &str,
    params: &Params,
) -> Result<u64> {
    statement::log_dispatch("execute", sql, params);
    AsyncConnection::execute(conn, Command::new(sql, params)).await
}

fn load_count(row: Option<Row>) -> Result<i64> {
    let Some(row) = row else {
        bail!("count statement returned no rows");
    };

    match row.into_columns().into_iter().next() {
        Some((_, value)) => i64::load(value),
        None => bail!("count statement returned an empty row"),
    }
}

/// A connection with a transaction and timeout applied to every statement
/// issued through it.
///
/// Per-call settings on a request builder take precedence.
pub struct Scope<'a, C: Session + ?Sized> {
    conn: &'a C,
    transaction: Option<&'a C::Transaction>,
    timeout: Option<Duration>,
}

impl<'a, C: Session + ?Sized> Scope<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Scope {
            conn,
            transaction: None,
            timeout: None,
        }
    }

    pub fn transaction(mut self, transaction: &'a C::Transaction) -> Self {
        self.transaction = Some(transaction);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn scoped<'b>(&'b self, command: Command<'b, C::Transaction>) -> Command<'b, C::Transaction> {
        Command {
            transaction: command.transaction.or(self.transaction),
            timeout: command.timeout.or(self.timeout),
            ..command
        }
    }
}

impl<C: Session + ?Sized> Session for Scope<'_, C> {
    type Transaction = C::Transaction;

    fn dialect(&self) -> Dialect {
        self.conn.dialect()
    }
}

impl<C: Connection + ?Sized> Connection for Scope<'_, C> {
    fn query(&self, command: Command<'_, Self::Transaction>) -> Result<Vec<Row>> {
        Connection::query(self.conn, self.scoped(command))
    }

    fn query_multi(
        &self,
        command: Command<'_, Self::Transaction>,
        split_on: &[String],
    ) -> Result<Vec<Vec<Row>>> {
        Connection::query_multi(self.conn, self.scoped(command), split_on)
    }

    fn execute(&self, command: Command<'_, Self::Transaction>) -> Result<u64> {
        Connection::execute(self.conn, self.scoped(command))
    }
}

#[async_trait]
impl<'a, C: AsyncConnection + ?Sized> AsyncConnection for Scope<'a, C> {
    async fn query(&self, command: Command<'_, Self::Transaction>) -> Result<RowStream> {
        AsyncConnection::query(self.conn, self.scoped(command)).await
    }

    async fn query_multi(
        &self,
        command: Command<'_, Self::Transaction>,
        split_on: &[String],
    ) -> Result<Vec<Vec<Row>>> {
        AsyncConnection::query_multi(self.conn, self.scoped(command), split_on).await
    }

    async fn execute(&self, command: Command<'_, Self::Transaction>) -> Result<u64> {
        AsyncConnection::execute(self.conn, self.scoped(command)).await
    }
}
