//! Reference-counted symbol map handle
//!
//! [`SharedSymbolMap`] lets several consumers hold one configured map.
//! Each handle counts as one reference; the map is destroyed when the last
//! handle is released or dropped.

use crate::catalog::{Catalog, Symbol};
use crate::map::SymbolMap;
use crate::tags::SymbolTags;
use parking_lot::{RwLock, RwLockWriteGuard};
use std::sync::Arc;

/// Shared-ownership handle to a [`SymbolMap`]
///
/// Reads take a recursive read lock and only take the write lock when the
/// table is stale, so queries may nest inside [`with_symbols`](Self::with_symbols).
/// Concurrent mutation is serialized by the lock but the intended use is
/// configure-once, query-many.
#[derive(Debug, Clone)]
pub struct SharedSymbolMap {
    inner: Arc<RwLock<SymbolMap>>,
}

impl SharedSymbolMap {
    /// New empty map over the built-in catalog, with one reference
    #[must_use]
    pub fn new() -> Self {
        Self::from_map(SymbolMap::new())
    }

    /// New empty map over a custom catalog, with one reference
    #[must_use]
    pub fn with_catalog(catalog: Arc<Catalog>) -> Self {
        Self::from_map(SymbolMap::with_catalog(catalog))
    }

    /// Wrap an existing map
    #[must_use]
    pub fn from_map(map: SymbolMap) -> Self {
        Self {
            inner: Arc::new(RwLock::new(map)),
        }
    }

    /// Take another reference to the same map
    #[inline]
    #[must_use]
    pub fn retain(&self) -> Self {
        self.clone()
    }

    /// Give up this reference; destroys the map if it was the last
    ///
    /// Returns `true` if the map was destroyed.
    pub fn release(self) -> bool {
        Arc::into_inner(self.inner).is_some()
    }

    /// Number of live handles
    #[inline]
    #[must_use]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// True if both handles refer to the same map
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Independent map with a copy of this selection and one reference
    #[must_use]
    pub fn copy_contents(&self) -> Self {
        Self::from_map(self.inner.read_recursive().copy_contents())
    }

    /// See [`SymbolMap::add_by_tags`]
    pub fn add_by_tags(&self, tags: SymbolTags) {
        self.inner.write().add_by_tags(tags);
    }

    /// See [`SymbolMap::remove_by_tags`]
    pub fn remove_by_tags(&self, tags: SymbolTags) {
        self.inner.write().remove_by_tags(tags);
    }

    /// See [`SymbolMap::prepare`]
    pub fn prepare(&self) {
        if self.inner.read_recursive().is_stale() {
            self.inner.write().prepare();
        }
    }

    /// See [`SymbolMap::has_symbol`]
    #[must_use]
    pub fn has_symbol(&self, code_point: char) -> bool {
        self.find_symbol(code_point).is_some()
    }

    /// See [`SymbolMap::find_symbol`]
    #[must_use]
    pub fn find_symbol(&self, code_point: char) -> Option<Symbol> {
        if let Ok(found) = self.inner.read_recursive().try_find_symbol(code_point) {
            return found;
        }
        self.inner.write().find_symbol(code_point)
    }

    /// Run `f` over the fresh, sorted symbol table
    ///
    /// `f` runs under a read lock; it may query this map through any handle
    /// but must not mutate it.
    pub fn with_symbols<R>(&self, f: impl FnOnce(&[Symbol]) -> R) -> R {
        {
            let map = self.inner.read_recursive();
            if let Ok(symbols) = map.try_symbols() {
                return f(symbols);
            }
        }

        let mut map = self.inner.write();
        map.prepare();
        let map = RwLockWriteGuard::downgrade(map);
        f(map.prepared_symbols())
    }

    /// Owned copy of the fresh, sorted symbol table
    #[must_use]
    pub fn symbols(&self) -> Vec<Symbol> {
        self.with_symbols(<[Symbol]>::to_vec)
    }

    /// Number of selected symbols
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read_recursive().len()
    }

    /// True if no symbol is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read_recursive().is_empty()
    }

    /// Apply `f` to the map under the write lock
    ///
    /// Not reentrant: `f` must not touch this map through another handle.
    pub fn update<R>(&self, f: impl FnOnce(&mut SymbolMap) -> R) -> R {
        f(&mut self.inner.write())
    }
}

impl Default for SharedSymbolMap {
    fn default() -> Self {
        Self::new()
    }
}

impl From<SymbolMap> for SharedSymbolMap {
    fn from(map: SymbolMap) -> Self {
        Self::from_map(map)
    }
}
