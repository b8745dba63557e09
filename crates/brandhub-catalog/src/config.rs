//! Engine configuration.
//!
//! The engine consumes, but does not own, its configuration: the host
//! application supplies base URL, field mapping and the classification
//! tables at construction time. [`CatalogConfig::default`] carries the
//! production tables so hosts only override what differs.

use brandhub_core::MediaCategory;

use crate::classify::CategoryRule;

/// Service field names targeted by the filter compiler.
///
/// The compiler visits these in declaration order (filename, model
/// number, MIME type, creation date), which keeps the serialized filter
/// string byte-identical across calls for equal criteria. Upstream
/// request de-duplication keys on that string, so the order is part of
/// the contract, not a style choice.
#[derive(Debug, Clone)]
pub struct FilterFieldMap {
    /// Free-text field, compiled to a `$like` predicate.
    pub filename: String,
    /// Id-list field, compiled to an Or-of-equality.
    pub model_number: String,
    /// Type-list field, compiled to an Or-of-`$like` on MIME prefixes.
    pub mime_type: String,
    /// Date field, compiled to a `$gte`/`$lte` pair.
    pub created: String,
}

impl Default for FilterFieldMap {
    fn default() -> Self {
        Self {
            filename: "filename".to_string(),
            model_number: "modelNumber".to_string(),
            mime_type: "mimetype".to_string(),
            created: "creationDate".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base prefix for absolutizing relative asset paths.
    pub asset_base_url: String,
    /// Marker fragment of the placeholder URL the service renders for
    /// preview-less file types; a thumbnail containing it is discarded
    /// in favour of the raw path.
    pub unsupported_preview_marker: String,
    /// Provenance tag stamped on normalized pages.
    pub source_tag: String,
    /// How many trailing folder names become asset tags.
    pub tag_depth: usize,
    /// Field used for the match-all guard predicate when no criteria
    /// are set (the service requires a filter to always be present).
    pub guard_field: String,
    pub fields: FilterFieldMap,
    /// Media-category keyword rules, highest priority first.
    pub category_rules: Vec<CategoryRule>,
    /// Model-number pattern sources, highest precedence first. Compiled
    /// once at engine construction.
    pub model_patterns: Vec<String>,
}

impl CatalogConfig {
    /// The production tables with a host-supplied asset base URL.
    #[must_use]
    pub fn new(asset_base_url: impl Into<String>) -> Self {
        Self {
            asset_base_url: asset_base_url.into(),
            unsupported_preview_marker: "filetype-not-supported".to_string(),
            source_tag: "catalog".to_string(),
            tag_depth: 4,
            guard_field: "filename".to_string(),
            fields: FilterFieldMap::default(),
            category_rules: default_category_rules(),
            model_patterns: default_model_patterns(),
        }
    }

    /// Absolutizes an asset path against the configured base prefix.
    /// Already-absolute URLs pass through untouched.
    #[must_use]
    pub fn absolutize(&self, path: &str) -> String {
        if path.is_empty() {
            return String::new();
        }
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_owned();
        }
        format!(
            "{}/{}",
            self.asset_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new("")
    }
}

/// Category keywords in priority order. Paths may contain several
/// keywords; the first rule that matches decides.
fn default_category_rules() -> Vec<CategoryRule> {
    vec![
        CategoryRule::new(&["main"], MediaCategory::Main),
        CategoryRule::new(&["on white", "onwhite"], MediaCategory::OnWhite),
        CategoryRule::new(&["lifestyle"], MediaCategory::Lifestyle),
        CategoryRule::new(&["action"], MediaCategory::Action),
        CategoryRule::new(&["in scene", "inscene"], MediaCategory::InScene),
    ]
}

/// Model-number patterns in precedence order. Several patterns can match
/// overlapping substrings of the same path; the declared order decides,
/// so do not reorder for aesthetics.
fn default_model_patterns() -> Vec<String> {
    [
        // 5-6 digit folder/file segment bounded by path punctuation.
        r"(?:^|[/_\-\s.])(\d{5,6})(?:[/_\-\s.]|$)",
        r"([A-Za-z]\d{8})",
        r"([A-Za-z]\d{7})",
        r"(\d{8})",
        r"(\d{7})",
        r"([A-Za-z]\d{6,})",
        r"([A-Za-z]\d{5,})",
        r"(A\d{8})",
    ]
    .iter()
    .map(|s| (*s).to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_field_map_uses_service_names() {
        let fields = FilterFieldMap::default();
        assert_eq!(fields.filename, "filename");
        assert_eq!(fields.model_number, "modelNumber");
        assert_eq!(fields.mime_type, "mimetype");
        assert_eq!(fields.created, "creationDate");
    }

    #[test]
    fn absolutize_prefixes_relative_paths() {
        let config = CatalogConfig::new("https://cdn.example.com");
        assert_eq!(
            config.absolutize("/Products/10111/front.png"),
            "https://cdn.example.com/Products/10111/front.png"
        );
        assert_eq!(
            config.absolutize("Products/10111/front.png"),
            "https://cdn.example.com/Products/10111/front.png"
        );
    }

    #[test]
    fn absolutize_handles_trailing_slash_on_base() {
        let config = CatalogConfig::new("https://cdn.example.com/");
        assert_eq!(
            config.absolutize("/front.png"),
            "https://cdn.example.com/front.png"
        );
    }

    #[test]
    fn absolutize_passes_absolute_urls_through() {
        let config = CatalogConfig::new("https://cdn.example.com");
        assert_eq!(
            config.absolutize("https://other.example.com/x.png"),
            "https://other.example.com/x.png"
        );
        assert_eq!(
            config.absolutize("http://other.example.com/x.png"),
            "http://other.example.com/x.png"
        );
    }

    #[test]
    fn absolutize_empty_path_stays_empty() {
        let config = CatalogConfig::new("https://cdn.example.com");
        assert_eq!(config.absolutize(""), "");
    }

    #[test]
    fn default_tables_are_populated() {
        let config = CatalogConfig::default();
        assert_eq!(config.category_rules.len(), 5);
        assert_eq!(config.model_patterns.len(), 8);
        assert_eq!(config.tag_depth, 4);
    }
}
