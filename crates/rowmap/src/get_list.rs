use crate::{resolve_split_on, statement, Cursor, Model};

use rowmap_core::{
    bail,
    driver::{AsyncConnection, Command, Connection, Session},
    stmt::{Params, Row},
    Error, Result, TypeInfo,
};

use std::{marker::PhantomData, sync::Arc, time::Duration};

/// Entry points for list queries, available on every connection.
pub trait GetListExt: Session {
    /// Select every row of `T`'s table, optionally narrowed by a filter.
    fn get_list<T: Model>(&self) -> GetList<'_, Self, T> {
        GetList::new(self)
    }

    /// Run a caller-written joined statement and map each row onto the
    /// types of `R`, split left to right.
    fn get_list_multi<R: MultiMap>(&self, sql: impl Into<String>) -> GetListMulti<'_, Self, R> {
        GetListMulti::new(self, sql.into())
    }
}

impl<C: Session + ?Sized> GetListExt for C {}

/// A list query over one mapped type.
///
/// The statement is rendered from `T`'s mapping when the query runs:
///
/// * no filter: `SELECT <columns> FROM <table>`
/// * a fragment starting with a clause keyword (`WHERE`, `ORDER BY`, ...):
///   appended as-is
/// * any other fragment: appended after `WHERE`
#[must_use = "queries do nothing until run"]
pub struct GetList<'a, C: Session + ?Sized, T> {
    conn: &'a C,
    filter: Option<String>,
    params: Params,
    transaction: Option<&'a C::Transaction>,
    timeout: Option<Duration>,
    _p: PhantomData<fn() -> T>,
}

impl<'a, C: Session + ?Sized, T: Model> GetList<'a, C, T> {
    fn new(conn: &'a C) -> Self {
        GetList {
            conn,
            filter: None,
            params: Params::new(),
            transaction: None,
            timeout: None,
            _p: PhantomData,
        }
    }

    /// Narrow the query with a trusted SQL fragment.
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Parameters referenced by the filter. Passed to the engine unchanged.
    pub fn params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    pub fn transaction(mut self, transaction: &'a C::Transaction) -> Self {
        self.transaction = Some(transaction);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn render(&self) -> Result<String> {
        statement::render::<T>(self.conn.dialect(), "get_list", |serializer, info| {
            serializer.get_list(info, self.filter.as_deref())
        })
    }

    fn command<'b>(&'b self, sql: &'b str) -> Command<'b, C::Transaction> {
        statement::log_dispatch("get_list", sql, &self.params);

        Command::new(sql, &self.params)
            .transaction(self.transaction)
            .timeout(self.timeout)
    }
}

impl<C: Connection + ?Sized, T: Model> GetList<'_, C, T> {
    pub fn all(self) -> Result<Vec<T>> {
        self.map(|item| item)
    }

    /// Run the query and apply `f` to every loaded value.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Result<Vec<U>> {
        let sql = self.render()?;
        let rows = Connection::query(self.conn, self.command(&sql))?;

        rows.into_iter()
            .map(|row| T::load(row).map(&mut f))
            .collect()
    }
}

impl<C: AsyncConnection + ?Sized, T: Model> GetList<'_, C, T> {
    pub async fn all_async(self) -> Result<Vec<T>> {
        self.cursor().await?.collect().await
    }

    pub async fn map_async<U>(self, mut f: impl FnMut(T) -> U) -> Result<Vec<U>> {
        let mut cursor = self.cursor().await?;
        let mut ret = Vec::new();

        while let Some(item) = cursor.next().await {
            ret.push(f(item?));
        }

        Ok(ret)
    }

    /// Run the query, loading rows lazily as the engine yields them.
    pub async fn cursor(self) -> Result<Cursor<T>> {
        let sql = self.render()?;
        let rows = AsyncConnection::query(self.conn, self.command(&sql)).await?;

        Ok(Cursor::new(rows))
    }
}

/// A tuple of 2 to 4 mapped types filled from one joined row.
pub trait MultiMap: Sized + Send + 'static {
    /// The leftmost type, returned by [`GetListMulti::all`].
    type First: Model;

    /// Mappings of every type after the first, left to right.
    fn secondary_types() -> Vec<Arc<TypeInfo>>;

    /// Load the tuple from a row the engine already split into one segment
    /// per type.
    fn load(segments: Vec<Row>) -> Result<Self>;

    fn into_first(self) -> Self::First;
}

fn load_segment<M: Model>(segments: &mut impl Iterator<Item = Row>) -> Result<M> {
    match segments.next() {
        Some(row) => M::load(row),
        None => bail!("joined row ended before `{}`", M::type_info().type_name),
    }
}

macro_rules! impl_multi_map {
    ( $len:literal; $first:ident $(, $rest:ident)+ ) => {
        impl<$first: Model, $($rest: Model),+> MultiMap for ($first, $($rest),+) {
            type First = $first;

            fn secondary_types() -> Vec<Arc<TypeInfo>> {
                vec![$($rest::type_info()),+]
            }

            fn load(segments: Vec<Row>) -> Result<Self> {
                if segments.len() != $len {
                    bail!(
                        "expected a row split into {} segments; engine returned {}",
                        $len,
                        segments.len()
                    );
                }

                let mut segments = segments.into_iter();

                Ok((
                    load_segment::<$first>(&mut segments)?,
                    $( load_segment::<$rest>(&mut segments)?, )+
                ))
            }

            fn into_first(self) -> $first {
                self.0
            }
        }
    };
}

impl_multi_map!(2; T1, T2);
impl_multi_map!(3; T1, T2, T3);
impl_multi_map!(4; T1, T2, T3, T4);

/// A list query over 2 to 4 mapped types joined in one statement.
///
/// The statement is written by the caller and sent verbatim. The engine
/// splits every result row at the split columns; see
/// [`resolve_split_on`](crate::resolve_split_on) for how they are chosen.
#[must_use = "queries do nothing until run"]
pub struct GetListMulti<'a, C: Session + ?Sized, R> {
    conn: &'a C,
    sql: String,
    params: Params,
    split_on: Option<String>,
    transaction: Option<&'a C::Transaction>,
    timeout: Option<Duration>,
    _p: PhantomData<fn() -> R>,
}

impl<'a, C: Session + ?Sized, R: MultiMap> GetListMulti<'a, C, R> {
    fn new(conn: &'a C, sql: String) -> Self {
        GetListMulti {
            conn,
            sql,
            params: Params::new(),
            split_on: None,
            transaction: None,
            timeout: None,
            _p: PhantomData,
        }
    }

    pub fn params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Columns the engine splits each row at, comma separated.
    pub fn split_on(mut self, split_on: impl Into<String>) -> Self {
        self.split_on = Some(split_on.into());
        self
    }

    pub fn transaction(mut self, transaction: &'a C::Transaction) -> Self {
        self.transaction = Some(transaction);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn split_columns(&self) -> Result<Vec<String>> {
        if self.sql.trim().is_empty() {
            return Err(Error::invalid_statement(
                "a query over several types needs a caller-written statement",
            ));
        }

        let split_on = resolve_split_on(self.split_on.as_deref(), &R::secondary_types())?;

        tracing::debug!(
            dialect = %self.conn.dialect(),
            sql = %self.sql,
            split_on = ?split_on,
            "prepared joined statement"
        );
        Ok(split_on)
    }

    fn command(&self) -> Command<'_, C::Transaction> {
        statement::log_dispatch("get_list_multi", &self.sql, &self.params);

        Command::new(&self.sql, &self.params)
            .transaction(self.transaction)
            .timeout(self.timeout)
    }
}

impl<C: Connection + ?Sized, R: MultiMap> GetListMulti<'_, C, R> {
    /// Run the query, returning the leftmost value of every row.
    pub fn all(self) -> Result<Vec<R::First>> {
        self.map(R::into_first)
    }

    /// Run the query and apply `f` to every loaded tuple.
    pub fn map<U>(self, mut f: impl FnMut(R) -> U) -> Result<Vec<U>> {
        let split_on = self.split_columns()?;
        let rows = Connection::query_multi(self.conn, self.command(), &split_on)?;

        rows.into_iter()
            .map(|segments| R::load(segments).map(&mut f))
            .collect()
    }
}

impl<C: AsyncConnection + ?Sized, R: MultiMap> GetListMulti<'_, C, R> {
    pub async fn all_async(self) -> Result<Vec<R::First>> {
        self.map_async(R::into_first).await
    }

    pub async fn map_async<U>(self, mut f: impl FnMut(R) -> U) -> Result<Vec<U>> {
        let split_on = self.split_columns()?;
        let rows = AsyncConnection::query_multi(self.conn, self.command(), &split_on).await?;

        rows.into_iter()
            .map(|segments| R::load(segments).map(&mut f))
            .collect()
    }
}
