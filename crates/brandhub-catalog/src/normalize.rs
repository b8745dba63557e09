//! Normalization from raw catalog asset records to [`Asset`] and
//! [`AssetPage`].
//!
//! Classification is delegated to [`crate::classify`]; this module
//! focuses on structural conversion, URL absolutization and the paging
//! envelope. Both entry points are total: a malformed envelope becomes
//! an empty page carrying an error marker, never a panic.

use brandhub_core::format::{format_file_size, iso_date_only, parse_date};
use brandhub_core::{Asset, AssetPage};
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::classify::{kind_from_mime, Classifier};
use crate::config::CatalogConfig;
use crate::types::{RawAsset, RawAssetListing};

/// Display label used when no model number could be extracted.
const UNKNOWN_MODEL_LABEL: &str = "Unknown";

/// Paging parameters of the listing call that produced the envelope.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub offset: u64,
    pub limit: u64,
}

/// Normalizes one raw asset record. Total: every missing field has a
/// documented default, and `today` backfills a missing creation date so
/// every asset stays sortable by date.
pub(crate) fn normalize_asset(
    config: &CatalogConfig,
    classifier: &Classifier,
    raw: &RawAsset,
    today: NaiveDate,
) -> Asset {
    let path = raw.fullpath.clone().unwrap_or_default();
    let mime = raw.mimetype.clone().unwrap_or_default();
    let size_bytes = raw.filesize.unwrap_or(0);

    let model_number = classifier.model_number(&path);
    let model_label = model_number
        .clone()
        .unwrap_or_else(|| UNKNOWN_MODEL_LABEL.to_string());

    // A thumbnail pointing at the service's "no preview for this file
    // type" placeholder is useless to the console; fall back to the raw
    // path so the preview link at least downloads the original.
    let preview_source = raw
        .thumbnail
        .as_deref()
        .filter(|t| !t.is_empty() && !t.contains(&config.unsupported_preview_marker))
        .unwrap_or(path.as_str());

    let created_date = raw
        .creation_date
        .as_deref()
        .and_then(iso_date_only)
        .and_then(parse_date)
        .unwrap_or(today);

    Asset {
        id: raw.id.clone().unwrap_or_default(),
        filename: raw.filename.clone().unwrap_or_default(),
        kind: kind_from_mime(&mime),
        category: classifier.category(&path),
        model_number,
        model_label,
        tags: path_tags(&path, config.tag_depth),
        preview_url: config.absolutize(preview_source),
        download_url: config.absolutize(&path),
        source_path: path,
        mime_type: mime,
        size_label: format_file_size(size_bytes),
        size_bytes,
        created_date,
    }
}

/// The last `depth` non-empty folder segments of `path`, in order. The
/// trailing filename segment is not a tag.
fn path_tags(path: &str, depth: usize) -> Vec<String> {
    let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    segments.pop();
    let skip = segments.len().saturating_sub(depth);
    segments.into_iter().skip(skip).map(str::to_owned).collect()
}

/// Normalizes a paged listing envelope.
///
/// The envelope arrives as already-parsed JSON because the service has
/// been observed returning shapes that do not match the documented
/// listing at all (error pages, legacy envelopes); those become an empty
/// page with a non-empty `error` instead of a deserialization failure.
pub(crate) fn normalize_asset_page(
    config: &CatalogConfig,
    classifier: &Classifier,
    listing: serde_json::Value,
    request: PageRequest,
    now: DateTime<Utc>,
) -> AssetPage {
    let trace_id = Uuid::new_v4();

    let listing: RawAssetListing = match serde_json::from_value(listing) {
        Ok(listing) => listing,
        Err(e) => {
            tracing::warn!(trace_id = %trace_id, error = %e, "asset listing envelope failed to parse");
            return error_page(config, now, trace_id, format!("malformed asset listing: {e}"));
        }
    };

    let Some(edges) = listing.edges else {
        tracing::warn!(trace_id = %trace_id, "asset listing carried no edge collection");
        return error_page(
            config,
            now,
            trace_id,
            "asset listing carried no edge collection".to_string(),
        );
    };

    let today = now.date_naive();
    let mut items: Vec<Asset> = edges
        .iter()
        .filter_map(|edge| edge.node.as_ref())
        .map(|raw| normalize_asset(config, classifier, raw, today))
        .collect();

    if request.limit > 0 {
        items.truncate(usize::try_from(request.limit).unwrap_or(usize::MAX));
    }

    // A listing that undercounts its own page would break paging math
    // downstream; clamp the total up to what we actually hold.
    let total_count = listing.total_count.unwrap_or(0).max(items.len() as u64);

    tracing::debug!(
        trace_id = %trace_id,
        count = items.len(),
        total = total_count,
        offset = request.offset,
        "normalized asset page"
    );

    AssetPage {
        items,
        total_count,
        offset: request.offset,
        limit: request.limit,
        source: config.source_tag.clone(),
        fetched_at: now,
        trace_id,
        error: None,
    }
}

fn error_page(
    config: &CatalogConfig,
    now: DateTime<Utc>,
    trace_id: Uuid,
    error: String,
) -> AssetPage {
    let mut page = AssetPage::empty(&config.source_tag, now, Some(error));
    page.trace_id = trace_id;
    page
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
