use rowmap_core::{err, Error, Result, TypeInfo};

use std::sync::Arc;

/// Decide where the engine splits each joined row between mapped types.
///
/// `secondary` lists the metadata of every type after the first, left to
/// right; the result holds one column name per entry.
///
/// An explicit value is a comma separated list of column names. A single
/// name applies to every secondary type, otherwise there must be exactly one
/// name per secondary type. Without an explicit value, each secondary type
/// splits at its key column.
pub fn resolve_split_on(explicit: Option<&str>, secondary: &[Arc<TypeInfo>]) -> Result<Vec<String>> {
    let explicit = explicit.map(str::trim).filter(|names| !names.is_empty());

    let Some(explicit) = explicit else {
        return secondary
            .iter()
            .map(|info| {
                info.key_column()
                    .map(|key| key.column.clone())
                    .map_err(|e| {
                        e.context(err!(
                            "cannot infer the split column for `{}`; pass it explicitly",
                            info.type_name
                        ))
                    })
            })
            .collect();
    };

    let names = explicit
        .split(',')
        .map(|name| {
            let name = name.trim();

            if name.is_empty() {
                Err(Error::invalid_statement(format!(
                    "empty column name in split list `{explicit}`"
                )))
            } else {
                Ok(name.to_string())
            }
        })
        .collect::<Result<Vec<_>>>()?;

    match names.len() {
        1 => Ok(vec![names[0].clone(); secondary.len()]),
        n if n == secondary.len() => Ok(names),
        n => Err(Error::invalid_statement(format!(
            "split list `{explicit}` names {n} columns for {} joined types",
            secondary.len()
        ))),
    }
}
