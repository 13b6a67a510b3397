//! Textual tag selectors
//!
//! A selector string is a sequence of tag names, each optionally prefixed
//! by `+` (select) or `-` (deselect), e.g. `"block+border-diagonal"` or
//! `"all -wide -braille"`. Unprefixed names select. Whitespace and commas
//! separate terms.

use crate::error::SelectorError;
use crate::map::SymbolMap;
use crate::shared::SharedSymbolMap;
use crate::tags::SymbolTags;
use std::fmt::{self, Display, Formatter};

/// Edit applied by one selector term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorOp {
    /// [`SymbolMap::add_by_tags`]
    Add,

    /// [`SymbolMap::remove_by_tags`]
    Remove,
}

/// One parsed selector term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSelector {
    /// Add or remove
    pub op: SelectorOp,

    /// Tags the term names
    pub tags: SymbolTags,
}

impl TagSelector {
    /// Create selector term
    #[inline]
    #[must_use]
    pub const fn new(op: SelectorOp, tags: SymbolTags) -> Self {
        Self { op, tags }
    }

    /// Apply this term to a map
    pub fn apply(&self, map: &mut SymbolMap) {
        match self.op {
            SelectorOp::Add => map.add_by_tags(self.tags),
            SelectorOp::Remove => map.remove_by_tags(self.tags),
        }
    }
}

impl Display for TagSelector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let sign = match self.op {
            SelectorOp::Add => '+',
            SelectorOp::Remove => '-',
        };
        write!(f, "{sign}{}", self.tags)
    }
}

/// Parse a selector string into terms
///
/// # Errors
/// Returns error on an unknown tag name or an operator with no name after it
pub fn parse(input: &str) -> Result<Vec<TagSelector>, SelectorError> {
    let mut selectors = Vec::new();
    let mut op = SelectorOp::Add;
    let mut name_start: Option<usize> = None;
    let mut pending_op: Option<usize> = None;

    let end = std::iter::once((input.len(), ' '));
    for (offset, ch) in input.char_indices().chain(end) {
        let is_separator = matches!(ch, '+' | '-' | ',') || ch.is_whitespace();
        if !is_separator {
            name_start.get_or_insert(offset);
            continue;
        }

        if let Some(start) = name_start.take() {
            selectors.push(TagSelector::new(op, parse_name(&input[start..offset])?));
            op = SelectorOp::Add;
            pending_op = None;
        }

        if ch == '+' || ch == '-' {
            if let Some(offset) = pending_op {
                return Err(SelectorError::EmptyTerm { offset });
            }
            op = if ch == '+' {
                SelectorOp::Add
            } else {
                SelectorOp::Remove
            };
            pending_op = Some(offset);
        }
    }

    match pending_op {
        Some(offset) => Err(SelectorError::EmptyTerm { offset }),
        None => Ok(selectors),
    }
}

pub(crate) fn parse_name(name: &str) -> Result<SymbolTags, SelectorError> {
    name.parse::<SymbolTags>().map_err(|e| {
        tracing::warn!("Rejected symbol selector: unknown tag '{}'", name);
        e
    })
}

impl SymbolMap {
    /// Parse `selectors` and apply each term in order
    ///
    /// Nothing is applied if any term fails to parse.
    ///
    /// # Errors
    /// Returns error if the selector string is malformed
    pub fn apply_selectors(&mut self, selectors: &str) -> Result<(), SelectorError> {
        for selector in parse(selectors)? {
            selector.apply(self);
        }
        Ok(())
    }
}

impl SharedSymbolMap {
    /// See [`SymbolMap::apply_selectors`]
    ///
    /// # Errors
    /// Returns error if the selector string is malformed
    pub fn apply_selectors(&self, selectors: &str) -> Result<(), SelectorError> {
        let parsed = parse(selectors)?;
        self.update(|map| parsed.iter().for_each(|selector| selector.apply(map)));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(tags: SymbolTags) -> TagSelector {
        TagSelector::new(SelectorOp::Add, tags)
    }

    fn remove(tags: SymbolTags) -> TagSelector {
        TagSelector::new(SelectorOp::Remove, tags)
    }

    #[test]
    fn parse_chained_terms() {
        let parsed = parse("block+border-diagonal").unwrap();
        assert_eq!(
            parsed,
            vec![
                add(SymbolTags::BLOCK),
                add(SymbolTags::BORDER),
                remove(SymbolTags::DIAGONAL),
            ]
        );
    }

    #[test]
    fn parse_whitespace_and_commas() {
        let parsed = parse("  all, -wide  braille ").unwrap();
        assert_eq!(
            parsed,
            vec![
                add(SymbolTags::ALL),
                remove(SymbolTags::WIDE),
                add(SymbolTags::BRAILLE),
            ]
        );
    }

    #[test]
    fn parse_leading_minus() {
        assert_eq!(parse("-ascii").unwrap(), vec![remove(SymbolTags::ASCII)]);
    }

    #[test]
    fn parse_empty_input() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse(" , ").unwrap().is_empty());
    }

    #[test]
    fn parse_rejects_unknown_tag() {
        assert_eq!(
            parse("block+glyphs"),
            Err(SelectorError::UnknownTag("glyphs".to_string()))
        );
    }

    #[test]
    fn parse_rejects_dangling_operator() {
        assert_eq!(parse("block+"), Err(SelectorError::EmptyTerm { offset: 5 }));
        assert_eq!(parse("block+-wide"), Err(SelectorError::EmptyTerm { offset: 5 }));
    }

    #[test]
    fn apply_is_all_or_nothing() {
        let mut map = SymbolMap::new();
        assert!(map.apply_selectors("block+nonsense").is_err());
        assert!(!map.has_selection());
    }

    #[test]
    fn apply_selectors_edits_map() {
        let mut map = SymbolMap::new();
        map.apply_selectors("block-quad").unwrap();

        assert!(map.has_symbol('▀'));
        assert!(!map.has_symbol('▖'));
    }

    #[test]
    fn selector_display() {
        assert_eq!(remove(SymbolTags::WIDE).to_string(), "-wide");
        assert_eq!(add(SymbolTags::BLOCK).to_string(), "+block");
    }
}
