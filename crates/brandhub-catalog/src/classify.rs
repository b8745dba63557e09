//! Asset classification: type bucket from MIME, media category and model
//! number from the folder path.
//!
//! Category keywords and model patterns are ordered data, not inlined
//! conditionals: the order is a policy decision (paths can contain
//! several keywords, patterns can match overlapping substrings) and the
//! first match always wins.

use brandhub_core::{AssetKind, MediaCategory};
use regex::Regex;

use crate::error::CatalogError;

/// MIME prefix table, tested in order. `text/` maps into the Documents
/// bucket alongside `application/`.
const MIME_PREFIXES: &[(&str, AssetKind)] = &[
    ("image/", AssetKind::Images),
    ("video/", AssetKind::Videos),
    ("application/", AssetKind::Documents),
    ("audio/", AssetKind::Audio),
    ("text/", AssetKind::Documents),
];

/// Derives the asset-type bucket from a MIME string.
///
/// Total: empty or unrecognized input yields [`AssetKind::Unknown`].
#[must_use]
pub fn kind_from_mime(mime: &str) -> AssetKind {
    MIME_PREFIXES
        .iter()
        .find(|(prefix, _)| mime.starts_with(prefix))
        .map_or(AssetKind::Unknown, |(_, kind)| *kind)
}

/// One media-category keyword rule: any of the keywords (matched
/// case-insensitively as substrings) classifies the path into the
/// category.
#[derive(Debug, Clone)]
pub struct CategoryRule {
    keywords: Vec<String>,
    category: MediaCategory,
}

impl CategoryRule {
    #[must_use]
    pub fn new(keywords: &[&str], category: MediaCategory) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            category,
        }
    }
}

/// Path classifier built once at engine construction from the injected
/// keyword and pattern tables.
#[derive(Debug)]
pub struct Classifier {
    category_rules: Vec<CategoryRule>,
    model_patterns: Vec<Regex>,
}

impl Classifier {
    /// Compiles the model-number pattern table.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidConfig`] when a pattern source does
    /// not compile; the tables are injected configuration, so a typo must
    /// surface at construction rather than as a runtime panic.
    pub fn new(
        category_rules: Vec<CategoryRule>,
        pattern_sources: &[String],
    ) -> Result<Self, CatalogError> {
        let mut model_patterns = Vec::with_capacity(pattern_sources.len());
        for source in pattern_sources {
            let pattern = Regex::new(source).map_err(|e| CatalogError::InvalidConfig {
                reason: format!("model pattern {source:?}: {e}"),
            })?;
            model_patterns.push(pattern);
        }
        Ok(Self {
            category_rules,
            model_patterns,
        })
    }

    /// Classifies a path into a media category.
    ///
    /// Rules are tested in their declared priority order and the first
    /// matching rule wins, so a path containing several keywords always
    /// classifies the same way. Empty path → `Unknown`, no match →
    /// `Other`.
    #[must_use]
    pub fn category(&self, path: &str) -> MediaCategory {
        if path.is_empty() {
            return MediaCategory::Unknown;
        }
        let lower = path.to_lowercase();
        for rule in &self.category_rules {
            if rule.keywords.iter().any(|k| lower.contains(k.as_str())) {
                return rule.category;
            }
        }
        MediaCategory::Other
    }

    /// Extracts a candidate model number from a path.
    ///
    /// Patterns are applied in table order against the whole path; the
    /// first pattern that matches wins and its first non-empty capture
    /// group is returned. Earlier patterns take precedence even when a
    /// later pattern would match a longer substring.
    #[must_use]
    pub fn model_number(&self, path: &str) -> Option<String> {
        for pattern in &self.model_patterns {
            if let Some(caps) = pattern.captures(path) {
                if let Some(group) = caps.get(1) {
                    if !group.as_str().is_empty() {
                        return Some(group.as_str().to_string());
                    }
                }
            }
        }
        None
    }
}
