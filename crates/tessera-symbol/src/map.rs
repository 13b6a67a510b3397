//! SymbolMap - tag-selected glyph table
//!
//! Provides [`SymbolMap`], a selection over a [`Catalog`] that callers edit
//! by tag and query by code point. Edits only touch the set of selected
//! catalog indices; the sorted lookup table is rebuilt lazily on the next
//! read.

use crate::catalog::{Catalog, Symbol};
use crate::error::SymbolMapError;
use crate::tags::SymbolTags;
use std::collections::HashSet;
use std::sync::Arc;

/// Whether the materialized table matches the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildState {
    /// Table reflects the current selection
    #[default]
    Fresh,

    /// Selection changed since the last rebuild
    Stale,
}

/// Mutable selection of catalog symbols with a lazily built lookup table
///
/// # Example
/// ```
/// use tessera_symbol::{SymbolMap, SymbolTags};
///
/// let mut map = SymbolMap::new();
/// map.add_by_tags(SymbolTags::BLOCK);
/// map.remove_by_tags(SymbolTags::QUAD);
///
/// assert!(map.has_symbol('█'));
/// assert!(!map.has_symbol('▚'));
/// assert!(!map.has_symbol('a'));
/// ```
#[derive(Debug)]
pub struct SymbolMap {
    /// Source of symbol records
    catalog: Arc<Catalog>,

    /// Selected catalog indices; `None` until the first tag edit
    desired: Option<HashSet<usize>>,

    /// Selected symbols sorted by code point
    symbols: Vec<Symbol>,

    state: BuildState,
}

impl SymbolMap {
    /// Create empty map over the built-in catalog
    ///
    /// Initializes the built-in catalog if this is its first use.
    #[must_use]
    pub fn new() -> Self {
        Self::with_catalog(Catalog::builtin())
    }

    /// Create empty map over a custom catalog
    #[must_use]
    pub fn with_catalog(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            desired: None,
            symbols: Vec::new(),
            state: BuildState::Fresh,
        }
    }

    /// Catalog this map selects from
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Independent copy of the selection
    ///
    /// The materialized table is not copied; the result is stale and
    /// rebuilds on first read.
    #[must_use]
    pub fn copy_contents(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            desired: self.desired.clone(),
            symbols: Vec::new(),
            state: BuildState::Stale,
        }
    }

    /// Select every catalog symbol whose tags overlap `tags`
    pub fn add_by_tags(&mut self, tags: SymbolTags) {
        let desired = self.desired.get_or_insert_with(HashSet::new);
        desired.extend(self.catalog.indices_matching(tags));
        self.state = BuildState::Stale;

        tracing::trace!("Added symbols by tags {}: {} selected", tags, desired.len());
    }

    /// Deselect every catalog symbol whose tags overlap `tags`
    pub fn remove_by_tags(&mut self, tags: SymbolTags) {
        let desired = self.desired.get_or_insert_with(HashSet::new);
        for index in self.catalog.indices_matching(tags) {
            desired.remove(&index);
        }
        self.state = BuildState::Stale;

        tracing::trace!("Removed symbols by tags {}: {} selected", tags, desired.len());
    }

    /// Rebuild the lookup table if the selection changed
    pub fn prepare(&mut self) {
        if self.state == BuildState::Stale {
            self.rebuild();
        }
    }

    fn rebuild(&mut self) {
        let catalog = &self.catalog;
        let mut symbols: Vec<Symbol> = self
            .desired
            .iter()
            .flatten()
            .filter_map(|&index| {
                debug_assert!(index < catalog.len(), "selected index {index} out of range");
                catalog.get(index).copied()
            })
            .collect();

        // code points are unique per catalog, so an unstable sort is total
        symbols.sort_unstable_by_key(|sym| sym.code_point);

        self.symbols = symbols;
        self.state = BuildState::Fresh;

        tracing::debug!("Rebuilt symbol map: {} symbols", self.symbols.len());
    }

    /// Current build state
    #[inline]
    #[must_use]
    pub fn state(&self) -> BuildState {
        self.state
    }

    /// True if the next read will rebuild
    #[inline]
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.state == BuildState::Stale
    }

    /// True once any tag edit has been made, even if nothing is selected
    #[inline]
    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.desired.is_some()
    }

    /// Number of selected symbols
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.desired.as_ref().map_or(0, HashSet::len)
    }

    /// True if no symbol is selected
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Selected catalog indices in ascending order
    #[must_use]
    pub fn desired_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.desired.iter().flatten().copied().collect();
        indices.sort_unstable();
        indices
    }

    /// Selected symbols, sorted ascending by code point
    ///
    /// Rebuilds first if stale.
    pub fn symbols(&mut self) -> &[Symbol] {
        self.prepare();
        &self.symbols
    }

    /// Selected symbols without rebuilding
    ///
    /// # Errors
    /// Returns [`SymbolMapError::NotPrepared`] if the table is stale
    pub fn try_symbols(&self) -> Result<&[Symbol], SymbolMapError> {
        match self.state {
            BuildState::Fresh => Ok(&self.symbols),
            BuildState::Stale => Err(SymbolMapError::NotPrepared),
        }
    }

    /// Table as last built; callers must have prepared the map
    pub(crate) fn prepared_symbols(&self) -> &[Symbol] {
        debug_assert_eq!(self.state, BuildState::Fresh);
        &self.symbols
    }

    /// Check whether a code point is selected
    ///
    /// Rebuilds first if stale.
    pub fn has_symbol(&mut self, code_point: char) -> bool {
        self.find_symbol(code_point).is_some()
    }

    /// Look up the selected symbol for a code point
    ///
    /// Rebuilds first if stale.
    pub fn find_symbol(&mut self, code_point: char) -> Option<Symbol> {
        self.prepare();
        self.lookup(code_point)
    }

    /// Check whether a code point is selected without rebuilding
    ///
    /// # Errors
    /// Returns [`SymbolMapError::NotPrepared`] if the selection changed
    /// since the last rebuild
    pub fn try_has_symbol(&self, code_point: char) -> Result<bool, SymbolMapError> {
        self.try_find_symbol(code_point).map(|found| found.is_some())
    }

    /// Look up a code point without rebuilding
    ///
    /// # Errors
    /// Returns [`SymbolMapError::NotPrepared`] if the table is stale
    pub fn try_find_symbol(&self, code_point: char) -> Result<Option<Symbol>, SymbolMapError> {
        match self.state {
            BuildState::Fresh => Ok(self.lookup(code_point)),
            BuildState::Stale => Err(SymbolMapError::NotPrepared),
        }
    }

    /// Binary search; requires a fresh table
    fn lookup(&self, code_point: char) -> Option<Symbol> {
        debug_assert_eq!(self.state, BuildState::Fresh);
        self.symbols
            .binary_search_by_key(&code_point, |sym| sym.code_point)
            .ok()
            .map(|pos| self.symbols[pos])
    }
}

impl Default for SymbolMap {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SymbolMap {
    /// Same as [`SymbolMap::copy_contents`]
    fn clone(&self) -> Self {
        self.copy_contents()
    }
}
