//! Symbol map configuration
//!
//! [`SymbolMapConfig`] describes a selection in TOML:
//!
//! ```toml
//! include = ["block", "border"]
//! exclude = ["diagonal"]
//! selectors = "+braille -wide"
//! ```
//!
//! `include` is applied first, then `exclude`, then `selectors`.

use crate::catalog::Catalog;
use crate::error::SymbolMapError;
use crate::map::SymbolMap;
use crate::selector::{self, parse_name};
use crate::tags::SymbolTags;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Declarative symbol selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SymbolMapConfig {
    /// Tag names to select
    pub include: Vec<String>,

    /// Tag names to deselect after `include`
    pub exclude: Vec<String>,

    /// Selector string applied last
    pub selectors: Option<String>,
}

impl SymbolMapConfig {
    /// Create empty configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode from TOML
    ///
    /// # Errors
    /// Returns error if the document is not valid TOML or has unknown keys
    pub fn from_toml_str(input: &str) -> Result<Self, SymbolMapError> {
        Ok(toml::from_str(input)?)
    }

    /// Union of the `include` tags
    ///
    /// # Errors
    /// Returns error if a name is not a known tag
    pub fn include_tags(&self) -> Result<SymbolTags, SymbolMapError> {
        union_of(&self.include)
    }

    /// Union of the `exclude` tags
    ///
    /// # Errors
    /// Returns error if a name is not a known tag
    pub fn exclude_tags(&self) -> Result<SymbolTags, SymbolMapError> {
        union_of(&self.exclude)
    }

    /// Build a map over the built-in catalog
    ///
    /// # Errors
    /// Returns error if any tag name or selector is invalid
    pub fn build(&self) -> Result<SymbolMap, SymbolMapError> {
        self.build_with_catalog(Catalog::builtin())
    }

    /// Build a map over a custom catalog
    ///
    /// # Errors
    /// Returns error if any tag name or selector is invalid; no map is
    /// produced in that case
    pub fn build_with_catalog(&self, catalog: Arc<Catalog>) -> Result<SymbolMap, SymbolMapError> {
        let include = self.include_tags()?;
        let exclude = self.exclude_tags()?;
        let selectors = self
            .selectors
            .as_deref()
            .map(selector::parse)
            .transpose()?
            .unwrap_or_default();

        let mut map = SymbolMap::with_catalog(catalog);
        if !self.include.is_empty() {
            map.add_by_tags(include);
        }
        if !self.exclude.is_empty() {
            map.remove_by_tags(exclude);
        }
        for selector in &selectors {
            selector.apply(&mut map);
        }

        tracing::debug!(
            "Built symbol map from config: include={}, exclude={}, {} selector terms",
            include,
            exclude,
            selectors.len()
        );
        Ok(map)
    }
}

fn union_of(names: &[String]) -> Result<SymbolTags, SymbolMapError> {
    names
        .iter()
        .try_fold(SymbolTags::empty(), |acc, name| -> Result<_, SymbolMapError> {
            Ok(acc | parse_name(name)?)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SelectorError;

    #[test]
    fn decode_full_document() {
        let config = SymbolMapConfig::from_toml_str(
            r#"
            include = ["block", "border"]
            exclude = ["diagonal"]
            selectors = "+braille -wide"
            "#,
        )
        .unwrap();

        assert_eq!(config.include, vec!["block", "border"]);
        assert_eq!(config.exclude, vec!["diagonal"]);
        assert_eq!(config.selectors.as_deref(), Some("+braille -wide"));
    }

    #[test]
    fn decode_empty_document() {
        let config = SymbolMapConfig::from_toml_str("").unwrap();
        assert_eq!(config, SymbolMapConfig::new());
    }

    #[test]
    fn decode_rejects_unknown_keys() {
        let result = SymbolMapConfig::from_toml_str("colors = 256");
        assert!(matches!(result, Err(SymbolMapError::Config(_))));
    }

    #[test]
    fn build_applies_include_then_exclude() {
        let config = SymbolMapConfig {
            include: vec!["border".into()],
            exclude: vec!["diagonal".into()],
            selectors: Some("+solid".into()),
        };
        let mut map = config.build().unwrap();

        assert!(map.has_symbol('┼'));
        assert!(!map.has_symbol('╳'));
        assert!(map.has_symbol('█'));
    }

    #[test]
    fn build_rejects_unknown_tag() {
        let config = SymbolMapConfig {
            include: vec!["blocks".into()],
            ..SymbolMapConfig::default()
        };

        assert!(matches!(
            config.build(),
            Err(SymbolMapError::Selector(SelectorError::UnknownTag(name))) if name == "blocks"
        ));
    }

    #[test]
    fn empty_config_builds_unconfigured_map() {
        let map = SymbolMapConfig::new().build().unwrap();
        assert!(!map.has_selection());
        assert!(map.is_empty());
    }
}
