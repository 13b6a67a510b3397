//! Tessera Symbol Maps
//!
//! Tag-selected glyph tables for image-to-character-art rendering.
//!
//! # Overview
//!
//! The symbol system provides:
//! - **Catalog**: the immutable, process-wide table of known glyphs
//! - **SymbolMap**: a selection edited by tag, queried by code point
//! - **SharedSymbolMap**: reference-counted handle for shared configuration
//! - **Selectors / SymbolMapConfig**: textual and TOML selection formats
//!
//! # Example
//!
//! ```rust
//! use tessera_symbol::{SymbolMap, SymbolTags};
//!
//! let mut map = SymbolMap::new();
//! map.add_by_tags(SymbolTags::ASCII);
//! map.remove_by_tags(SymbolTags::ALPHA);
//!
//! assert!(map.has_symbol('#'));
//! assert!(!map.has_symbol('a'));
//!
//! // Table is sorted by code point
//! let first = map.symbols()[0];
//! assert_eq!(first.code_point, ' ');
//! ```

#![warn(missing_docs)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod map;
pub mod selector;
pub mod shared;
pub mod tags;

// Re-exports
pub use catalog::{Catalog, Symbol, FULL_COVERAGE};
pub use config::SymbolMapConfig;
pub use error::{CatalogError, SelectorError, SymbolMapError};
pub use map::{BuildState, SymbolMap};
pub use selector::{SelectorOp, TagSelector};
pub use shared::SharedSymbolMap;
pub use tags::SymbolTags;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for symbol map operations
    pub use crate::{
        Catalog, SharedSymbolMap, Symbol, SymbolMap, SymbolMapConfig, SymbolMapError, SymbolTags,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
