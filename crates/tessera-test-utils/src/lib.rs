//! Testing utilities for Tessera workspace
//!
//! Shared fixtures and assertions for symbol map tests.

#![allow(missing_docs)]

use std::sync::Arc;
use tessera_symbol::{Catalog, Symbol, SymbolMap, SymbolTags};

/// Three-symbol catalog declared out of code point order
pub fn scenario_catalog() -> Arc<Catalog> {
    Arc::new(
        Catalog::from_symbols(vec![
            Symbol::new('#', 40, SymbolTags::BLOCK),
            Symbol::new('.', 4, SymbolTags::ASCII),
            Symbol::new('@', 44, SymbolTags::ASCII),
        ])
        .unwrap(),
    )
}

pub fn scenario_map() -> SymbolMap {
    SymbolMap::with_catalog(scenario_catalog())
}

/// Code points of the map's fresh table, in table order
pub fn code_points(map: &mut SymbolMap) -> Vec<char> {
    map.symbols().iter().map(|sym| sym.code_point).collect()
}

pub fn assert_strictly_ascending(symbols: &[Symbol]) {
    for pair in symbols.windows(2) {
        assert!(
            pair[0].code_point < pair[1].code_point,
            "table out of order: U+{:04X} before U+{:04X}",
            u32::from(pair[0].code_point),
            u32::from(pair[1].code_point)
        );
    }
}

/// Single-bit tags, for building masks in property tests
pub fn single_tags() -> Vec<SymbolTags> {
    (0..u32::BITS)
        .map(|bit| SymbolTags::from_bits_retain(1 << bit))
        .filter(|tags| !tags.names().is_empty())
        .collect()
}

/// Install a tracing subscriber honoring `RUST_LOG`; safe to call repeatedly
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
