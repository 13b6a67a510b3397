//! Error types for catalogs, selectors and symbol maps

/// Errors while building a custom catalog
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// NUL is reserved as the scan terminator
    #[error("catalog entry {index} uses the reserved code point U+0000")]
    ReservedCodePoint {
        /// Position of the offending entry
        index: usize,
    },

    /// Two entries share a code point
    #[error("code point U+{code_point:04X} declared at {first} and again at {second}")]
    DuplicateCodePoint {
        /// Repeated code point as a scalar value
        code_point: u32,
        /// Position of the first declaration
        first: usize,
        /// Position of the repeat
        second: usize,
    },

    /// Coverage above a full 8x8 cell
    #[error("catalog entry {index} has coverage {coverage}, maximum is 64")]
    CoverageOutOfRange {
        /// Position of the offending entry
        index: usize,
        /// Declared coverage
        coverage: u8,
    },
}

/// Errors while parsing a tag selector string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    /// Tag name not in the tag table
    #[error("unknown symbol tag: '{0}'")]
    UnknownTag(String),

    /// Operator with nothing after it, e.g. `block+`
    #[error("selector term at byte {offset} has no tag name")]
    EmptyTerm {
        /// Byte offset of the dangling operator
        offset: usize,
    },
}

/// Errors surfaced by [`SymbolMap`](crate::SymbolMap) and its configuration
#[derive(Debug, thiserror::Error)]
pub enum SymbolMapError {
    /// Read-only query issued while the table is stale
    #[error("symbol table is stale; prepare the map before a read-only query")]
    NotPrepared,

    /// Selector parse failure
    #[error(transparent)]
    Selector(#[from] SelectorError),

    /// Custom catalog rejected
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Configuration file could not be decoded
    #[error("invalid symbol map configuration: {0}")]
    Config(#[from] toml::de::Error),
}
