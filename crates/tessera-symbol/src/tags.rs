//! Symbol category tags
//!
//! Provides [`SymbolTags`], the bit set of stylistic classes a glyph belongs
//! to. Maps select glyphs by tag, never one glyph at a time.

use crate::error::SelectorError;
use bitflags::bitflags;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

bitflags! {
    /// Categories a catalog symbol can carry.
    ///
    /// Flags are disjoint; a few named unions ([`HALF`](Self::HALF),
    /// [`ALNUM`](Self::ALNUM), [`BAD`](Self::BAD), [`ALL`](Self::ALL)) are
    /// provided for convenience.
    ///
    /// ```
    /// use tessera_symbol::SymbolTags;
    ///
    /// let wanted = SymbolTags::BLOCK | SymbolTags::BORDER;
    /// assert!(wanted.overlaps(SymbolTags::BLOCK | SymbolTags::ASCII));
    /// ```
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct SymbolTags: u32 {
        /// Whitespace
        const SPACE     = 1 << 0;
        /// Fully lit cell
        const SOLID     = 1 << 1;
        /// Shade / dither pattern
        const STIPPLE   = 1 << 2;
        /// Block element
        const BLOCK     = 1 << 3;
        /// Box-drawing line
        const BORDER    = 1 << 4;
        /// Diagonal stroke
        const DIAGONAL  = 1 << 5;
        /// Dot or bullet
        const DOT       = 1 << 6;
        /// Quadrant block
        const QUAD      = 1 << 7;
        /// Horizontal half block
        const HHALF     = 1 << 8;
        /// Vertical half block
        const VHALF     = 1 << 9;
        /// Inverse of another symbol
        const INVERTED  = 1 << 10;
        /// Braille pattern
        const BRAILLE   = 1 << 11;
        /// Miscellaneous technical
        const TECHNICAL = 1 << 12;
        /// Geometric shape
        const GEOMETRIC = 1 << 13;
        /// Printable 7-bit ASCII
        const ASCII     = 1 << 14;
        /// Letter
        const ALPHA     = 1 << 15;
        /// Decimal digit
        const DIGIT     = 1 << 16;
        /// Occupies a single cell
        const NARROW    = 1 << 17;
        /// Occupies two cells
        const WIDE      = 1 << 18;
        /// Width depends on the terminal
        const AMBIGUOUS = 1 << 19;
        /// Renders poorly in common fonts
        const UGLY      = 1 << 20;
        /// Symbols for Legacy Computing block
        const LEGACY    = 1 << 21;
        /// 2x3 sextant
        const SEXTANT   = 1 << 22;
        /// Wedge or triangle fill
        const WEDGE     = 1 << 23;
        /// Latin script beyond ASCII
        const LATIN     = 1 << 24;
        /// Opt-in only, never part of ALL
        const EXTRA     = 1 << 30;

        /// Either half-block orientation
        const HALF  = Self::HHALF.bits() | Self::VHALF.bits();
        /// Letters and digits
        const ALNUM = Self::ALPHA.bits() | Self::DIGIT.bits();
        /// Symbols that tend to misrender
        const BAD   = Self::AMBIGUOUS.bits() | Self::UGLY.bits();
        /// Everything except opt-in and misrendering symbols
        const ALL   = Self::SPACE.bits()
            | Self::SOLID.bits()
            | Self::STIPPLE.bits()
            | Self::BLOCK.bits()
            | Self::BORDER.bits()
            | Self::DIAGONAL.bits()
            | Self::DOT.bits()
            | Self::QUAD.bits()
            | Self::HALF.bits()
            | Self::INVERTED.bits()
            | Self::BRAILLE.bits()
            | Self::TECHNICAL.bits()
            | Self::GEOMETRIC.bits()
            | Self::ASCII.bits()
            | Self::ALNUM.bits()
            | Self::NARROW.bits()
            | Self::WIDE.bits()
            | Self::LEGACY.bits()
            | Self::SEXTANT.bits()
            | Self::WEDGE.bits()
            | Self::LATIN.bits();
    }
}

/// Name table used by [`SymbolTags::from_tag_name`] and selector parsing.
const TAG_NAMES: &[(&str, SymbolTags)] = &[
    ("space", SymbolTags::SPACE),
    ("solid", SymbolTags::SOLID),
    ("stipple", SymbolTags::STIPPLE),
    ("block", SymbolTags::BLOCK),
    ("border", SymbolTags::BORDER),
    ("diagonal", SymbolTags::DIAGONAL),
    ("dot", SymbolTags::DOT),
    ("quad", SymbolTags::QUAD),
    ("hhalf", SymbolTags::HHALF),
    ("vhalf", SymbolTags::VHALF),
    ("half", SymbolTags::HALF),
    ("inverted", SymbolTags::INVERTED),
    ("braille", SymbolTags::BRAILLE),
    ("technical", SymbolTags::TECHNICAL),
    ("geometric", SymbolTags::GEOMETRIC),
    ("ascii", SymbolTags::ASCII),
    ("alpha", SymbolTags::ALPHA),
    ("digit", SymbolTags::DIGIT),
    ("alnum", SymbolTags::ALNUM),
    ("narrow", SymbolTags::NARROW),
    ("wide", SymbolTags::WIDE),
    ("ambiguous", SymbolTags::AMBIGUOUS),
    ("ugly", SymbolTags::UGLY),
    ("legacy", SymbolTags::LEGACY),
    ("sextant", SymbolTags::SEXTANT),
    ("wedge", SymbolTags::WEDGE),
    ("latin", SymbolTags::LATIN),
    ("extra", SymbolTags::EXTRA),
    ("bad", SymbolTags::BAD),
    ("all", SymbolTags::ALL),
    ("none", SymbolTags::empty()),
];

impl SymbolTags {
    /// True if any bit is shared with `mask`
    #[inline]
    #[must_use]
    pub const fn overlaps(self, mask: Self) -> bool {
        self.intersects(mask)
    }

    /// Look up a tag by its lowercase name (ASCII case-insensitive)
    #[must_use]
    pub fn from_tag_name(name: &str) -> Option<Self> {
        TAG_NAMES
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|&(_, tags)| tags)
    }

    /// Names of the single-bit flags set in `self`, in bit order
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        TAG_NAMES
            .iter()
            .filter(|(_, tags)| tags.bits().is_power_of_two() && self.contains(*tags))
            .map(|&(name, _)| name)
            .collect()
    }
}

impl FromStr for SymbolTags {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag_name(s.trim()).ok_or_else(|| SelectorError::UnknownTag(s.trim().to_string()))
    }
}

impl Display for SymbolTags {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = self.names().into_iter().map(String::from).collect();

        // bits with no declared flag
        let unknown = self.bits() & !Self::all().bits();
        if unknown != 0 {
            parts.push(format!("{unknown:#x}"));
        }

        if parts.is_empty() {
            f.write_str("none")
        } else {
            f.write_str(&parts.join("|"))
        }
    }
}
