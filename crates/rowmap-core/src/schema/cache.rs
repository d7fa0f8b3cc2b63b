use super::TypeInfo;

use std::{
    any::TypeId,
    collections::HashMap,
    sync::{Arc, Mutex, OnceLock},
};

/// Memoized [`TypeInfo`] per Rust type.
///
/// Entries are computed on first request and never evicted. Each type owns a
/// `OnceLock` cell: concurrent first requests for the same type run the
/// description exactly once, the other callers block on the cell and all of
/// them receive the same `Arc`. The map lock is only held while looking up
/// or creating a cell, never while describing a type.
#[derive(Debug, Default)]
pub struct TypeInfoCache {
    entries: Mutex<HashMap<TypeId, Arc<OnceLock<Arc<TypeInfo>>>>>,
}

impl TypeInfoCache {
    pub fn new() -> TypeInfoCache {
        TypeInfoCache::default()
    }

    /// The process-wide cache used by the `Model` API. Populated lazily,
    /// lives until the process exits.
    pub fn global() -> &'static TypeInfoCache {
        static GLOBAL: OnceLock<TypeInfoCache> = OnceLock::new();
        GLOBAL.get_or_init(TypeInfoCache::new)
    }

    /// Returns the metadata for `type_id`, computing it with `describe` if
    /// this is the first request.
    pub fn resolve(&self, type_id: TypeId, describe: impl FnOnce() -> TypeInfo) -> Arc<TypeInfo> {
        let cell = self.cell(type_id);

        cell.get_or_init(|| {
            let info = describe();
            tracing::trace!(
                type_name = %info.type_name,
                table = %info.table(),
                columns = info.columns.len(),
                "resolved type metadata"
            );
            Arc::new(info)
        })
        .clone()
    }

    /// Install metadata for `type_id` explicitly. If the type was already
    /// resolved or registered, the existing entry is kept and returned.
    pub fn register(&self, type_id: TypeId, info: TypeInfo) -> Arc<TypeInfo> {
        self.resolve(type_id, move || info)
    }

    /// Returns the metadata if it was already resolved.
    pub fn get(&self, type_id: TypeId) -> Option<Arc<TypeInfo>> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.get(&type_id)?.get().cloned()
    }

    pub fn len(&self) -> usize {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.values().filter(|cell| cell.get().is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn cell(&self, type_id: TypeId) -> Arc<OnceLock<Arc<TypeInfo>>> {
        // A panic while holding the lock cannot leave the map half-updated.
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.entry(type_id).or_default().clone()
    }
}
