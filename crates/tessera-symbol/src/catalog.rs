//! Master symbol catalog
//!
//! Provides [`Symbol`], a glyph with its coverage and tags, and [`Catalog`],
//! the immutable, declaration-ordered table that symbol maps select from.
//!
//! The built-in catalog is process-wide and initialized exactly once, on
//! first use or through an explicit [`init`] call. Custom catalogs can be
//! built with [`Catalog::from_symbols`].

use crate::error::CatalogError;
use crate::tags::SymbolTags;
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::sync::Arc;

/// Pixels in a fully lit 8x8 cell
pub const FULL_COVERAGE: u8 = 64;

/// A renderable glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol {
    /// Unicode scalar value
    pub code_point: char,

    /// Lit pixels in an 8x8 cell, `0..=64`
    pub coverage: u8,

    /// Category tags
    pub tags: SymbolTags,
}

impl Symbol {
    /// Create new symbol record
    #[inline]
    #[must_use]
    pub const fn new(code_point: char, coverage: u8, tags: SymbolTags) -> Self {
        Self {
            code_point,
            coverage,
            tags,
        }
    }
}

/// Immutable, ordered master table of symbols
///
/// Order is declaration order, not code point order. Every code point
/// appears at most once and none is NUL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    symbols: Vec<Symbol>,
}

static BUILTIN: OnceCell<Arc<Catalog>> = OnceCell::new();

/// Initialize the built-in catalog
///
/// Idempotent and safe to call from any thread; every call after the first
/// returns the same table.
pub fn init() -> &'static Arc<Catalog> {
    BUILTIN.get_or_init(|| {
        let catalog = Catalog {
            symbols: builtin_symbols(),
        };
        debug_assert!(catalog.validate().is_ok(), "built-in catalog is malformed");
        tracing::debug!("Initialized built-in symbol catalog: {} symbols", catalog.len());
        Arc::new(catalog)
    })
}

/// True once [`init`] has run
#[inline]
#[must_use]
pub fn is_initialized() -> bool {
    BUILTIN.get().is_some()
}

impl Catalog {
    /// Shared handle to the built-in catalog, initializing it if needed
    #[inline]
    #[must_use]
    pub fn builtin() -> Arc<Self> {
        Arc::clone(init())
    }

    /// Build a custom catalog
    ///
    /// # Errors
    /// Returns error if an entry is NUL, has coverage above
    /// [`FULL_COVERAGE`], or repeats an earlier code point
    pub fn from_symbols(symbols: Vec<Symbol>) -> Result<Self, CatalogError> {
        let catalog = Self { symbols };
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen: HashMap<char, usize> = HashMap::with_capacity(self.symbols.len());

        for (index, sym) in self.symbols.iter().enumerate() {
            if sym.code_point == '\0' {
                return Err(CatalogError::ReservedCodePoint { index });
            }
            if sym.coverage > FULL_COVERAGE {
                return Err(CatalogError::CoverageOutOfRange {
                    index,
                    coverage: sym.coverage,
                });
            }
            if let Some(&first) = seen.get(&sym.code_point) {
                return Err(CatalogError::DuplicateCodePoint {
                    code_point: u32::from(sym.code_point),
                    first,
                    second: index,
                });
            }
            seen.insert(sym.code_point, index);
        }

        Ok(())
    }

    /// Number of symbols
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// True if the catalog has no symbols
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol at a catalog index
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Symbol> {
        self.symbols.get(index)
    }

    /// All symbols in declaration order
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Iterate over symbols in declaration order
    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.symbols.iter()
    }

    /// Indices of every symbol whose tags overlap `mask`
    pub fn indices_matching(&self, mask: SymbolTags) -> impl Iterator<Item = usize> + '_ {
        self.symbols
            .iter()
            .enumerate()
            .filter(move |(_, sym)| sym.tags.overlaps(mask))
            .map(|(index, _)| index)
    }

    /// Find a symbol and its index by code point (linear)
    #[must_use]
    pub fn find(&self, code_point: char) -> Option<(usize, &Symbol)> {
        self.symbols
            .iter()
            .enumerate()
            .find(|(_, sym)| sym.code_point == code_point)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}

/// Printable ASCII glyphs ordered from sparse to dense
const ASCII_RAMP: &str =
    ".'`^\",:;Il!i><~+_-=?][}{1)(|\\/7tfjrxnuvczsTLJYXUCeyVFQ0OZ23Pmwqpdbkg5hao4ESGHAK69RN*#MDW&8%B@$";

/// Densest ASCII glyph coverage
const ASCII_MAX_COVERAGE: usize = 40;

/// Coverage used for characters outside the ramp
const ASCII_DEFAULT_COVERAGE: u8 = 16;

fn ascii_coverage(c: char) -> u8 {
    let len = ASCII_RAMP.chars().count();
    ASCII_RAMP
        .chars()
        .position(|r| r == c)
        .and_then(|pos| u8::try_from((pos + 1) * ASCII_MAX_COVERAGE / len).ok())
        .unwrap_or(ASCII_DEFAULT_COVERAGE)
}

fn ascii_tags(c: char) -> SymbolTags {
    let mut tags = SymbolTags::ASCII | SymbolTags::NARROW;
    if c.is_ascii_alphabetic() {
        tags |= SymbolTags::ALPHA;
    }
    if c.is_ascii_digit() {
        tags |= SymbolTags::DIGIT;
    }
    if c == '/' || c == '\\' {
        tags |= SymbolTags::DIAGONAL;
    }
    tags
}

/// Unicode sextant bits: 0 top-left, 1 top-right, 2 middle-left,
/// 3 middle-right, 4 bottom-left, 5 bottom-right. Patterns 21 and 42 are
/// the half blocks and have no sextant code point.
fn sextant_symbols() -> impl Iterator<Item = Symbol> {
    (1u32..63)
        .filter(|&pattern| pattern != 21 && pattern != 42)
        .zip(0x1FB00u32..)
        .filter_map(|(pattern, cp)| {
            let coverage = u8::try_from(pattern.count_ones() * 64 / 6).ok()?;
            let c = char::from_u32(cp)?;
            Some(Symbol::new(
                c,
                coverage,
                SymbolTags::SEXTANT | SymbolTags::LEGACY | SymbolTags::NARROW,
            ))
        })
}

/// Braille dots are roughly 2x2 pixels in an 8x8 cell
fn braille_symbols() -> impl Iterator<Item = Symbol> {
    (0u32..256).filter_map(|dots| {
        let c = char::from_u32(0x2800 + dots)?;
        let coverage = u8::try_from(dots.count_ones() * 4).ok()?;
        let mut tags = SymbolTags::BRAILLE | SymbolTags::NARROW;
        if dots == 0 {
            tags |= SymbolTags::SPACE;
        }
        Some(Symbol::new(c, coverage, tags))
    })
}

fn builtin_symbols() -> Vec<Symbol> {
    use SymbolTags as T;

    let n = T::NARROW;
    let block = T::BLOCK | n;
    let quad = T::BLOCK | T::QUAD | n;
    let border = T::BORDER | n;

    let fixed: [(char, u8, SymbolTags); 75] = [
        (' ', 0, T::SPACE | T::ASCII | n),
        // Block elements
        ('▀', 32, block | T::HHALF),
        ('▄', 32, block | T::HHALF),
        ('▌', 32, block | T::VHALF),
        ('▐', 32, block | T::VHALF),
        ('█', 64, block | T::SOLID),
        ('▁', 8, block),
        ('▂', 16, block),
        ('▃', 24, block),
        ('▅', 40, block),
        ('▆', 48, block),
        ('▇', 56, block),
        ('▉', 56, block),
        ('▊', 48, block),
        ('▋', 40, block),
        ('▍', 24, block),
        ('▎', 16, block),
        ('▏', 8, block),
        ('▔', 8, block | T::UGLY),
        ('▕', 8, block | T::UGLY),
        ('▖', 16, quad),
        ('▗', 16, quad),
        ('▘', 16, quad),
        ('▝', 16, quad),
        ('▚', 32, quad),
        ('▞', 32, quad),
        ('▙', 48, quad | T::INVERTED),
        ('▛', 48, quad | T::INVERTED),
        ('▜', 48, quad | T::INVERTED),
        ('▟', 48, quad | T::INVERTED),
        // Shades
        ('░', 16, T::STIPPLE | n),
        ('▒', 32, T::STIPPLE | n),
        ('▓', 48, T::STIPPLE | n),
        // Box drawing
        ('─', 8, border),
        ('│', 8, border),
        ('━', 16, border),
        ('┃', 16, border),
        ('┌', 8, border),
        ('┐', 8, border),
        ('└', 8, border),
        ('┘', 8, border),
        ('├', 12, border),
        ('┤', 12, border),
        ('┬', 12, border),
        ('┴', 12, border),
        ('┼', 15, border),
        ('╋', 30, border),
        ('═', 16, border),
        ('║', 16, border),
        ('╭', 8, border),
        ('╮', 8, border),
        ('╯', 8, border),
        ('╰', 8, border),
        ('╱', 8, border | T::DIAGONAL),
        ('╲', 8, border | T::DIAGONAL),
        ('╳', 15, border | T::DIAGONAL),
        // Dots
        ('·', 4, T::DOT | T::LATIN | n),
        ('•', 12, T::DOT | T::AMBIGUOUS),
        // Geometric shapes
        ('■', 36, T::GEOMETRIC | T::AMBIGUOUS),
        ('▪', 16, T::GEOMETRIC | n),
        ('▲', 24, T::GEOMETRIC | T::AMBIGUOUS),
        ('▼', 24, T::GEOMETRIC | T::AMBIGUOUS),
        ('◆', 24, T::GEOMETRIC | T::AMBIGUOUS),
        ('●', 36, T::GEOMETRIC | T::DOT | T::AMBIGUOUS),
        ('◢', 32, T::GEOMETRIC | T::WEDGE | n),
        ('◣', 32, T::GEOMETRIC | T::WEDGE | n),
        ('◤', 32, T::GEOMETRIC | T::WEDGE | n),
        ('◥', 32, T::GEOMETRIC | T::WEDGE | n),
        // Technical
        ('⌐', 8, T::TECHNICAL | n),
        ('⌠', 10, T::TECHNICAL | n),
        ('⌡', 10, T::TECHNICAL | n),
        ('≡', 18, T::TECHNICAL | T::EXTRA | n),
        // Wide
        ('\u{3000}', 0, T::SPACE | T::WIDE),
        ('⬛', 64, T::GEOMETRIC | T::WIDE),
        ('▬', 24, T::GEOMETRIC | T::EXTRA | n),
    ];

    let ascii = ('!'..='~').map(|c| Symbol::new(c, ascii_coverage(c), ascii_tags(c)));

    fixed
        .into_iter()
        .map(|(c, coverage, tags)| Symbol::new(c, coverage, tags))
        .chain(ascii)
        .chain(sextant_symbols())
        .chain(braille_symbols())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert!(catalog.validate().is_ok());
        assert!(!catalog.is_empty());
    }

    #[test]
    fn init_is_idempotent() {
        let a = init();
        let b = init();
        assert!(Arc::ptr_eq(a, b));
        assert!(is_initialized());
    }

    #[test]
    fn builtin_is_not_sorted_by_code_point() {
        let catalog = Catalog::builtin();
        let sorted = catalog
            .symbols()
            .windows(2)
            .all(|w| w[0].code_point < w[1].code_point);
        assert!(!sorted);
    }

    #[test]
    fn builtin_covers_expected_ranges() {
        let catalog = Catalog::builtin();

        assert_eq!(catalog.indices_matching(SymbolTags::BRAILLE).count(), 256);
        assert_eq!(catalog.indices_matching(SymbolTags::SEXTANT).count(), 60);
        assert_eq!(catalog.indices_matching(SymbolTags::DIGIT).count(), 10);
        assert_eq!(catalog.indices_matching(SymbolTags::ALPHA).count(), 52);
        // printable ASCII plus space
        assert_eq!(catalog.indices_matching(SymbolTags::ASCII).count(), 95);
    }

    #[test]
    fn sextants_skip_half_blocks() {
        let catalog = Catalog::builtin();
        let (_, first) = catalog.find('\u{1FB00}').unwrap();
        let (_, last) = catalog.find('\u{1FB3B}').unwrap();

        assert!(first.tags.contains(SymbolTags::SEXTANT));
        assert!(last.tags.contains(SymbolTags::SEXTANT));
        assert!(catalog.find('\u{1FB3C}').is_none());
    }

    #[test]
    fn coverage_never_exceeds_full_cell() {
        assert!(Catalog::builtin()
            .iter()
            .all(|sym| sym.coverage <= FULL_COVERAGE));
    }

    #[test]
    fn from_symbols_rejects_duplicates() {
        let result = Catalog::from_symbols(vec![
            Symbol::new('a', 10, SymbolTags::ASCII),
            Symbol::new('b', 10, SymbolTags::ASCII),
            Symbol::new('a', 12, SymbolTags::ALPHA),
        ]);

        assert_eq!(
            result.unwrap_err(),
            CatalogError::DuplicateCodePoint {
                code_point: 'a' as u32,
                first: 0,
                second: 2,
            }
        );
    }

    #[test]
    fn from_symbols_rejects_nul() {
        let result = Catalog::from_symbols(vec![Symbol::new('\0', 0, SymbolTags::SPACE)]);
        assert!(matches!(result, Err(CatalogError::ReservedCodePoint { index: 0 })));
    }

    #[test]
    fn from_symbols_rejects_overfull_coverage() {
        let result = Catalog::from_symbols(vec![Symbol::new('x', 65, SymbolTags::ASCII)]);
        assert!(matches!(
            result,
            Err(CatalogError::CoverageOutOfRange { index: 0, coverage: 65 })
        ));
    }

    #[test]
    fn ascii_ramp_orders_density() {
        assert!(ascii_coverage('.') < ascii_coverage('#'));
        assert!(ascii_coverage('#') < ascii_coverage('@'));
        assert!(ascii_coverage('=') < ascii_coverage('e'));
    }

    #[test]
    fn ascii_ramp_covers_printable_ascii() {
        let ramp: std::collections::HashSet<char> = ASCII_RAMP.chars().collect();
        assert_eq!(ramp.len(), ASCII_RAMP.chars().count());
        for c in '!'..='~' {
            assert!(ramp.contains(&c), "{c:?} missing from ramp");
        }
        assert_eq!(ramp.len(), 94);
    }
}
