//! The engine facade: configuration plus compiled tables behind the
//! operations every console surface calls.

use brandhub_core::{Asset, AssetPage, ProductViews};
use chrono::{DateTime, NaiveDate, Utc};

use crate::classify::Classifier;
use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::filter::{compile_criteria, ListingQuery, SearchCriteria, SortOrder};
use crate::normalize::{normalize_asset, normalize_asset_page, PageRequest};
use crate::product::normalize_product;
use crate::types::{RawAsset, RawErrorEnvelope, RawProduct};

/// The query-compilation and normalization engine.
///
/// Construction compiles the injected pattern tables once; afterwards
/// the engine is read-only and every call is a pure transform over
/// already-fetched data, so independent calls may run concurrently
/// without coordination. The engine performs no I/O and holds no
/// caches; all outputs are freshly constructed value objects.
#[derive(Debug)]
pub struct CatalogEngine {
    config: CatalogConfig,
    classifier: Classifier,
}

impl CatalogEngine {
    /// Builds an engine from host-supplied configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidConfig`] when an injected model
    /// pattern does not compile.
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let classifier = Classifier::new(config.category_rules.clone(), &config.model_patterns)?;
        Ok(Self { config, classifier })
    }

    #[must_use]
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Compiles search criteria into the serialized filter string.
    ///
    /// `today` anchors named date buckets; pass the current date in
    /// production and a fixed date in tests.
    #[must_use]
    pub fn compile_filter(&self, criteria: &SearchCriteria, today: NaiveDate) -> String {
        compile_criteria(
            criteria,
            &self.config.fields,
            &self.config.guard_field,
            today,
        )
        .to_query_string()
    }

    /// Compiles a full listing request: filter plus paging and sort.
    #[must_use]
    pub fn compile_listing_query(
        &self,
        criteria: &SearchCriteria,
        today: NaiveDate,
        request: PageRequest,
        sort_by: Option<&str>,
        sort_order: SortOrder,
    ) -> ListingQuery {
        ListingQuery {
            filter: self.compile_filter(criteria, today),
            offset: request.offset,
            limit: request.limit,
            sort_by: sort_by.map(str::to_owned),
            sort_order,
        }
    }

    /// Normalizes one raw asset record into the canonical [`Asset`].
    #[must_use]
    pub fn normalize_asset(&self, raw: &RawAsset, today: NaiveDate) -> Asset {
        normalize_asset(&self.config, &self.classifier, raw, today)
    }

    /// Normalizes a paged listing envelope into an [`AssetPage`].
    ///
    /// Malformed envelopes yield an empty page carrying an error string;
    /// this never fails.
    #[must_use]
    pub fn normalize_asset_page(
        &self,
        listing: serde_json::Value,
        request: PageRequest,
        now: DateTime<Utc>,
    ) -> AssetPage {
        normalize_asset_page(&self.config, &self.classifier, listing, request, now)
    }

    /// Normalizes one raw product record into the full [`ProductViews`].
    #[must_use]
    pub fn normalize_product(&self, raw: &RawProduct) -> ProductViews {
        normalize_product(&self.config, raw)
    }

    /// Converts an upstream error envelope into the error value handed
    /// back to the caller. The message is surfaced verbatim; retrying is
    /// the transport layer's concern.
    #[must_use]
    pub fn upstream_error(&self, envelope: &RawErrorEnvelope) -> CatalogError {
        CatalogError::Upstream {
            message: envelope.combined_message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandhub_core::{AssetKind, MediaCategory};
    use serde_json::json;

    fn engine() -> CatalogEngine {
        CatalogEngine::new(CatalogConfig::new("https://cdn.example.com")).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()
    }

    #[test]
    fn construction_rejects_an_invalid_pattern() {
        let mut config = CatalogConfig::default();
        config.model_patterns.push("(unclosed".to_string());
        let err = CatalogEngine::new(config).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidConfig { .. }));
    }

    #[test]
    fn video_on_white_scenario() {
        let raw = RawAsset {
            id: Some("4711".to_string()),
            filename: Some("clip.mp4".to_string()),
            fullpath: Some("/Products/On White/10111/clip.mp4".to_string()),
            mimetype: Some("video/mp4".to_string()),
            ..RawAsset::default()
        };
        let asset = engine().normalize_asset(&raw, today());
        assert_eq!(asset.kind, AssetKind::Videos);
        assert_eq!(asset.category, MediaCategory::OnWhite);
        assert_eq!(asset.model_number.as_deref(), Some("10111"));
    }

    #[test]
    fn compile_filter_is_deterministic_through_the_engine() {
        let engine = engine();
        let criteria = SearchCriteria {
            filename: Some("drill".to_string()),
            date_bucket: Some("last_1_month".to_string()),
            ..SearchCriteria::default()
        };
        assert_eq!(
            engine.compile_filter(&criteria, today()),
            engine.compile_filter(&criteria, today())
        );
    }

    #[test]
    fn listing_query_carries_the_compiled_filter_and_paging() {
        let engine = engine();
        let query = engine.compile_listing_query(
            &SearchCriteria::default(),
            today(),
            PageRequest {
                offset: 50,
                limit: 25,
            },
            Some("creationDate"),
            SortOrder::Descending,
        );
        assert_eq!(query.filter, r#"{"filename":{"$like":"%"}}"#);
        assert_eq!(query.offset, 50);
        assert_eq!(query.limit, 25);
        assert_eq!(query.sort_by.as_deref(), Some("creationDate"));
    }

    #[test]
    fn page_normalization_flows_through_the_engine() {
        let listing = json!({
            "edges": [{"node": {"id": "1", "fullpath": "/a/x.png", "mimetype": "image/png"}}],
            "totalCount": 1
        });
        let page = engine().normalize_asset_page(
            listing,
            PageRequest {
                offset: 0,
                limit: 25,
            },
            Utc::now(),
        );
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].kind, AssetKind::Images);
        assert!(!page.has_error());
    }

    #[test]
    fn upstream_error_surfaces_the_message_verbatim() {
        let envelope: RawErrorEnvelope = serde_json::from_value(json!({
            "errors": [{"message": "cannot resolve field 'colour'"}]
        }))
        .unwrap();
        let err = engine().upstream_error(&envelope);
        assert_eq!(
            err.to_string(),
            "catalog query rejected: cannot resolve field 'colour'"
        );
    }
}
