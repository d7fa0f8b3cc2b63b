use crate::Model;

use rowmap_core::{stmt::Params, Dialect, Result, TypeInfo};
use rowmap_sql::Serializer;

/// Render a statement for `T` with the connection's dialect.
pub(crate) fn render<T: Model>(
    dialect: Dialect,
    op: &'static str,
    render: impl FnOnce(&Serializer, &TypeInfo) -> Result<String>,
) -> Result<String> {
    let info = T::type_info();
    let sql = render(&Serializer::new(dialect), &*info)?;

    tracing::debug!(op, ty = %info.type_name, %dialect, %sql, "rendered statement");
    Ok(sql)
}

pub(crate) fn log_dispatch(op: &'static str, sql: &str, params: &Params) {
    tracing::trace!(op, sql, params = params.len(), "dispatching to engine");
}
