use rowmap_core::{
    err,
    stmt::{Params, Primitive, Row},
    Result, TypeInfo, TypeInfoCache,
};

use std::{any::TypeId, sync::Arc};

/// A Rust type mapped to a table.
///
/// Usually implemented with `#[derive(Model)]`.
pub trait Model: Sized + Send + 'static {
    /// Describe the type's table and columns.
    ///
    /// Runs at most once per type and process; use [`Model::type_info`] to
    /// get the cached result.
    fn describe() -> TypeInfo;

    /// The type's mapping, resolved through the process-wide cache.
    fn type_info() -> Arc<TypeInfo> {
        TypeInfoCache::global().resolve(TypeId::of::<Self>(), Self::describe)
    }

    /// Materialize a value from one row (or one split segment of a row).
    fn load(row: Row) -> Result<Self>;

    /// Parameters named after the mapped fields, used by the key based
    /// statements.
    fn to_params(&self) -> Params;
}

/// Load one field, reading the column under the field name first and the
/// column name second.
pub fn load_field<T: Primitive>(
    row: &mut Row,
    type_name: &str,
    field: &str,
    column: &str,
) -> Result<T> {
    T::load(row.take_any(&[field, column]))
        .map_err(|e| e.context(err!("failed to load field `{field}` of `{type_name}`")))
}
