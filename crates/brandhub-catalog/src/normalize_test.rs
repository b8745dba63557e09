use super::*;

use brandhub_core::{AssetKind, MediaCategory};
use serde_json::json;

fn config() -> CatalogConfig {
    CatalogConfig::new("https://cdn.example.com")
}

fn classifier(config: &CatalogConfig) -> Classifier {
    Classifier::new(config.category_rules.clone(), &config.model_patterns).unwrap()
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()
}

fn make_raw_asset() -> RawAsset {
    RawAsset {
        id: Some("4711".to_string()),
        filename: Some("clip.mp4".to_string()),
        fullpath: Some("/Products/Drills/On White/10111/clip.mp4".to_string()),
        mimetype: Some("video/mp4".to_string()),
        filesize: Some(1_500_000),
        creation_date: Some("2024-02-14T09:30:00Z".to_string()),
        thumbnail: Some("/thumbs/clip.jpg".to_string()),
    }
}

fn normalize(raw: &RawAsset) -> brandhub_core::Asset {
    let config = config();
    let classifier = classifier(&config);
    normalize_asset(&config, &classifier, raw, today())
}

// -----------------------------------------------------------------------
// normalize_asset
// -----------------------------------------------------------------------

#[test]
fn classifies_kind_category_and_model_from_the_record() {
    let asset = normalize(&make_raw_asset());
    assert_eq!(asset.kind, AssetKind::Videos);
    assert_eq!(asset.category, MediaCategory::OnWhite);
    assert_eq!(asset.model_number.as_deref(), Some("10111"));
    assert_eq!(asset.model_label, "10111");
}

#[test]
fn model_label_defaults_to_unknown_but_the_raw_value_stays_none() {
    let raw = RawAsset {
        fullpath: Some("/Products/misc/logo.svg".to_string()),
        ..make_raw_asset()
    };
    let asset = normalize(&raw);
    assert_eq!(asset.model_number, None);
    assert_eq!(asset.model_label, "Unknown");
}

#[test]
fn tags_are_the_last_four_folder_names_without_the_filename() {
    let asset = normalize(&make_raw_asset());
    assert_eq!(asset.tags, vec!["Products", "Drills", "On White", "10111"]);
}

#[test]
fn tags_shorter_paths_keep_all_folders() {
    let raw = RawAsset {
        fullpath: Some("/Drills/clip.mp4".to_string()),
        ..make_raw_asset()
    };
    assert_eq!(normalize(&raw).tags, vec!["Drills"]);
}

#[test]
fn download_url_is_absolute_for_relative_paths() {
    let asset = normalize(&make_raw_asset());
    assert_eq!(
        asset.download_url,
        "https://cdn.example.com/Products/Drills/On White/10111/clip.mp4"
    );
}

#[test]
fn download_url_passes_absolute_paths_through() {
    let raw = RawAsset {
        fullpath: Some("https://media.example.com/clip.mp4".to_string()),
        ..make_raw_asset()
    };
    assert_eq!(
        normalize(&raw).download_url,
        "https://media.example.com/clip.mp4"
    );
}

#[test]
fn preview_prefers_the_thumbnail() {
    let asset = normalize(&make_raw_asset());
    assert_eq!(asset.preview_url, "https://cdn.example.com/thumbs/clip.jpg");
}

#[test]
fn unsupported_type_thumbnail_falls_back_to_the_raw_path() {
    let raw = RawAsset {
        thumbnail: Some("/placeholders/filetype-not-supported.png".to_string()),
        ..make_raw_asset()
    };
    let asset = normalize(&raw);
    assert_eq!(asset.preview_url, asset.download_url);
}

#[test]
fn missing_thumbnail_falls_back_to_the_raw_path() {
    let raw = RawAsset {
        thumbnail: None,
        ..make_raw_asset()
    };
    let asset = normalize(&raw);
    assert_eq!(asset.preview_url, asset.download_url);
}

#[test]
fn created_date_truncates_the_timestamp() {
    let asset = normalize(&make_raw_asset());
    assert_eq!(
        asset.created_date,
        NaiveDate::from_ymd_opt(2024, 2, 14).unwrap()
    );
}

#[test]
fn missing_creation_date_defaults_to_today() {
    let raw = RawAsset {
        creation_date: None,
        ..make_raw_asset()
    };
    assert_eq!(normalize(&raw).created_date, today());
}

#[test]
fn size_label_is_rendered_from_the_byte_count() {
    let asset = normalize(&make_raw_asset());
    assert_eq!(asset.size_bytes, 1_500_000);
    assert_eq!(asset.size_label, "1.50 MB");
}

#[test]
fn empty_record_normalizes_to_defaults() {
    let asset = normalize(&RawAsset::default());
    assert_eq!(asset.id, "");
    assert_eq!(asset.kind, AssetKind::Unknown);
    assert_eq!(asset.category, MediaCategory::Unknown);
    assert!(asset.tags.is_empty());
    assert_eq!(asset.size_label, "0 B");
    assert_eq!(asset.created_date, today());
}

// -----------------------------------------------------------------------
// normalize_asset_page
// -----------------------------------------------------------------------

fn page(listing: serde_json::Value, request: PageRequest) -> AssetPage {
    let config = config();
    let classifier = classifier(&config);
    normalize_asset_page(&config, &classifier, listing, request, Utc::now())
}

#[test]
fn maps_edges_and_copies_the_counters() {
    let listing = json!({
        "edges": [
            {"node": {"id": "1", "fullpath": "/a/x.png", "mimetype": "image/png"}},
            {"node": {"id": "2", "fullpath": "/a/y.png", "mimetype": "image/png"}}
        ],
        "totalCount": 40
    });
    let page = page(listing, PageRequest { offset: 0, limit: 25 });
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total_count, 40);
    assert_eq!(page.offset, 0);
    assert_eq!(page.limit, 25);
    assert_eq!(page.source, "catalog");
    assert!(page.error.is_none());
    assert!(page.has_more());
}

#[test]
fn null_nodes_are_dropped() {
    let listing = json!({
        "edges": [
            {"node": null},
            {"node": {"id": "2", "fullpath": "/a/y.png", "mimetype": "image/png"}}
        ],
        "totalCount": 2
    });
    let page = page(listing, PageRequest { offset: 0, limit: 25 });
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, "2");
}

#[test]
fn empty_object_envelope_yields_an_error_page() {
    let page = page(json!({}), PageRequest { offset: 0, limit: 25 });
    assert!(page.items.is_empty());
    assert_eq!(page.total_count, 0);
    assert!(page.error.as_deref().is_some_and(|e| !e.is_empty()));
}

#[test]
fn garbage_envelope_yields_an_error_page() {
    let page = page(json!([1, 2, 3]), PageRequest { offset: 0, limit: 25 });
    assert!(page.items.is_empty());
    assert!(page.has_error());
}

#[test]
fn items_truncate_to_the_requested_limit() {
    let listing = json!({
        "edges": [
            {"node": {"id": "1", "fullpath": "/a/x.png"}},
            {"node": {"id": "2", "fullpath": "/a/y.png"}},
            {"node": {"id": "3", "fullpath": "/a/z.png"}}
        ],
        "totalCount": 3
    });
    let page = page(listing, PageRequest { offset: 0, limit: 2 });
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total_count, 3);
}

#[test]
fn total_count_is_clamped_up_to_the_item_count() {
    let listing = json!({
        "edges": [
            {"node": {"id": "1", "fullpath": "/a/x.png"}},
            {"node": {"id": "2", "fullpath": "/a/y.png"}}
        ]
    });
    let page = page(listing, PageRequest { offset: 0, limit: 25 });
    assert_eq!(page.total_count, 2);
}
