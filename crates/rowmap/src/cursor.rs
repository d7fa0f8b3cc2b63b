use crate::{Model, Result};

use rowmap_core::stmt::RowStream;

use std::marker::PhantomData;

/// Lazily materialized results of an asynchronous query.
///
/// Rows are loaded one at a time as the engine produces them.
pub struct Cursor<M> {
    rows: RowStream,
    _p: PhantomData<M>,
}

pub trait FromCursor<A>: Extend<A> + Default {}

impl<A, T: Extend<A> + Default> FromCursor<A> for T {}

impl<M: Model> Cursor<M> {
    pub(crate) fn new(rows: RowStream) -> Self {
        Self {
            rows,
            _p: PhantomData,
        }
    }

    pub async fn next(&mut self) -> Option<Result<M>> {
        Some(self.rows.next().await?.and_then(M::load))
    }

    /// Collect all values
    pub async fn collect<B>(mut self) -> Result<B>
    where
        B: FromCursor<M>,
    {
        let mut ret = B::default();

        while let Some(res) = self.next().await {
            ret.extend(Some(res?));
        }

        Ok(ret)
    }
}
