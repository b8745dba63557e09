//! Catalog service response types for the filter-based listing interface.
//!
//! ## Observed shape from the live service
//!
//! ### Listings
//! Collections arrive in a paged edge/node shape:
//! `{"edges": [{"node": {…}}, …], "totalCount": N}`. Edges may carry a
//! `null` node when a record was deleted between the count and the page
//! fetch; normalization drops those. `totalCount` has been observed
//! missing on legacy listings, hence `Option`.
//!
//! ### Ids
//! Record ids are numeric service-side but are delivered as JSON strings
//! by the listing interface. We pass them through as strings to avoid
//! precision assumptions.
//!
//! ### Scalars
//! Any scalar may be `null` or absent on a partially-enriched record.
//! Every field is therefore `Option` + `#[serde(default)]`; defaulting to
//! the view-level empty form happens in normalization, not here.
//!
//! ### Numeric packaging fields
//! Quantities, weights and dimensions are delivered as **strings**
//! (`"12"`, `"0.85"`), not JSON numbers. Normalization coerces them with
//! default 0 rather than trusting the source shape.

use serde::Deserialize;

/// Paged asset listing envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAssetListing {
    #[serde(default)]
    pub edges: Option<Vec<RawAssetEdge>>,
    #[serde(default, rename = "totalCount")]
    pub total_count: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAssetEdge {
    #[serde(default)]
    pub node: Option<RawAsset>,
}

/// A single asset record as the service delivers it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAsset {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    /// Folder path plus filename, usually relative to the media root.
    #[serde(default)]
    pub fullpath: Option<String>,
    #[serde(default)]
    pub mimetype: Option<String>,
    #[serde(default)]
    pub filesize: Option<u64>,
    /// ISO timestamp; observed missing on migrated legacy assets.
    #[serde(default, rename = "creationDate")]
    pub creation_date: Option<String>,
    /// Server-rendered preview URL. Carries a placeholder URL containing
    /// a fixed marker fragment when the file type has no preview support.
    #[serde(default)]
    pub thumbnail: Option<String>,
}

/// A single product record. Deeply nested; every sub-collection is
/// independently optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProduct {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "modelNumber")]
    pub model_number: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "lifecycleStatus")]
    pub lifecycle_status: Option<String>,
    #[serde(default, rename = "enrichmentStatus")]
    pub enrichment_status: Option<String>,
    #[serde(default, rename = "launchDate")]
    pub launch_date: Option<String>,
    #[serde(default)]
    pub image: Option<RawImageRef>,
    #[serde(default)]
    pub sap: Option<RawSapData>,
    #[serde(default)]
    pub marketing: Option<RawMarketingCopy>,
    #[serde(default)]
    pub seo: Option<RawSeoData>,
    #[serde(default)]
    pub bundles: Vec<RawRelation>,
    #[serde(default)]
    pub components: Vec<RawRelation>,
    #[serde(default)]
    pub accessories: Vec<RawRelation>,
    #[serde(default)]
    pub successors: Vec<RawRelation>,
    #[serde(default)]
    pub icons: Vec<RawIcon>,
    #[serde(default, rename = "qrCode")]
    pub qr_code: Option<RawImageRef>,
    #[serde(default, rename = "webLinks")]
    pub web_links: Vec<RawWebLink>,
    #[serde(default, rename = "eanCodes")]
    pub ean_codes: Vec<RawEanCode>,
    #[serde(default)]
    pub packaging: Option<RawPackaging>,
    #[serde(default)]
    pub collaterals: Vec<RawDocument>,
    #[serde(default, rename = "serviceDocuments")]
    pub service_documents: Vec<RawDocument>,
    #[serde(default)]
    pub variants: Vec<RawVariant>,
    #[serde(default)]
    pub certifications: Option<RawCertifications>,
}

/// Reference to an image asset on a nested object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawImageRef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub fullpath: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSapData {
    #[serde(default, rename = "materialNumber")]
    pub material_number: Option<String>,
    #[serde(default)]
    pub division: Option<String>,
    #[serde(default, rename = "salesOrg")]
    pub sales_org: Option<String>,
    #[serde(default, rename = "priceGroup")]
    pub price_group: Option<String>,
    #[serde(default, rename = "baseUnit")]
    pub base_unit: Option<String>,
    #[serde(default, rename = "countryOfOrigin")]
    pub country_of_origin: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMarketingCopy {
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub subheadline: Option<String>,
    #[serde(default, rename = "longText")]
    pub long_text: Option<String>,
    #[serde(default, rename = "bulletPoints")]
    pub bullet_points: Vec<String>,
}

/// SEO fields. `keywords` is one comma-separated string in the source;
/// normalization splits it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSeoData {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

/// One relationship edge: the linked record plus an optional per-link
/// quantity (bundles/components carry one, accessories do not).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRelation {
    #[serde(default)]
    pub element: Option<RawLinkedRecord>,
    #[serde(default)]
    pub quantity: Option<f64>,
}

/// The target of a relationship link.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLinkedRecord {
    #[serde(default)]
    pub id: Option<String>,
    /// Customer-facing, directly-orderable code. Absent on virtual
    /// grouping records.
    #[serde(default, rename = "articleNumber")]
    pub article_number: Option<String>,
    /// `"virtual"` marks a non-purchasable parent record.
    #[serde(default, rename = "objectType")]
    pub object_type: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<RawImageRef>,
    #[serde(default)]
    pub children: Vec<RawLinkedChild>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLinkedChild {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "articleNumber")]
    pub article_number: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawIcon {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub asset: Option<RawImageRef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawWebLink {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEanCode {
    #[serde(default)]
    pub code: Option<String>,
    /// Service unit code, e.g. `"PCE"`.
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub quantity: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPackaging {
    #[serde(default)]
    pub item: Option<RawPackLevel>,
    #[serde(default, rename = "innerBox")]
    pub inner_box: Option<RawPackLevel>,
    #[serde(default, rename = "masterCarton")]
    pub master_carton: Option<RawPackLevel>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default, rename = "customsTariffNumber")]
    pub customs_tariff_number: Option<String>,
    #[serde(default, rename = "stackingFactor")]
    pub stacking_factor: Option<String>,
    #[serde(default, rename = "countryOfOrigin")]
    pub country_of_origin: Option<String>,
}

/// One packaging level (item / inner box / master carton). All numerics
/// are strings in the source; see the module header.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPackLevel {
    #[serde(default, rename = "packagingType")]
    pub packaging_type: Option<String>,
    #[serde(default)]
    pub quantity: Option<String>,
    #[serde(default, rename = "netWeight")]
    pub net_weight: Option<String>,
    #[serde(default, rename = "grossWeight")]
    pub gross_weight: Option<String>,
    #[serde(default)]
    pub length: Option<String>,
    #[serde(default)]
    pub width: Option<String>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub volume: Option<String>,
}

/// A document row (marketing collateral or after-service document).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDocument {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub asset: Option<RawAsset>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawVariant {
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub ean: Option<String>,
}

/// Certification families. Each family is an array of entries; only the
/// first entry of a family carries live documents.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCertifications {
    #[serde(default)]
    pub ce: Vec<RawCertificationEntry>,
    #[serde(default)]
    pub gs: Vec<RawCertificationEntry>,
    #[serde(default)]
    pub ul: Vec<RawCertificationEntry>,
    #[serde(default)]
    pub ccc: Vec<RawCertificationEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCertificationEntry {
    #[serde(default)]
    pub certificates: Vec<RawCertDocument>,
    #[serde(default, rename = "testReports")]
    pub test_reports: Vec<RawCertDocument>,
    #[serde(default)]
    pub declarations: Vec<RawCertDocument>,
    /// Only populated on CE entries.
    #[serde(default, rename = "declarationsOfConformity")]
    pub declarations_of_conformity: Vec<RawCertDocument>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCertDocument {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub asset: Option<RawAsset>,
}

/// Error envelope returned when the service rejects a query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawErrorEnvelope {
    #[serde(default)]
    pub errors: Vec<RawErrorMessage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawErrorMessage {
    #[serde(default)]
    pub message: Option<String>,
}

impl RawErrorEnvelope {
    /// All error messages joined for display; a fixed fallback when the
    /// envelope carried none.
    #[must_use]
    pub fn combined_message(&self) -> String {
        let messages: Vec<&str> = self
            .errors
            .iter()
            .filter_map(|e| e.message.as_deref())
            .filter(|m| !m.is_empty())
            .collect();
        if messages.is_empty() {
            "catalog service returned an unspecified error".to_string()
        } else {
            messages.join("; ")
        }
    }
}
