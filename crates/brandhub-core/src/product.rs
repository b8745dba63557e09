//! Canonical product views.
//!
//! A product record from the catalog service is deeply nested and only
//! partially populated; normalization flattens it into this fixed set of
//! independent views. Every view is always constructed: an unsourced
//! sub-collection yields empty strings/arrays rather than a missing
//! view, so consumers branch on emptiness only, never on presence.

use serde::{Deserialize, Serialize};

/// The full set of views derived from one product record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductViews {
    pub card: ProductCard,
    pub basic: BasicData,
    pub sap: SapData,
    pub marketing: MarketingCopy,
    pub seo: SeoData,
    pub relationships: Relationships,
    pub icons: Vec<ProductIcon>,
    pub weblinks: WebLinks,
    pub ean_codes: Vec<EanCode>,
    /// Fixed 6-row packaging dimension grid.
    pub packaging_grid: Vec<PackagingRow>,
    pub packaging_specs: PackagingSpecs,
    pub collaterals: Vec<DocumentLink>,
    pub service_documents: Vec<DocumentLink>,
    pub variants: Vec<VariantRow>,
    /// One group per certification family (CE, GS, UL, CCC), in that
    /// order, empty when the family is unsourced.
    pub certifications: Vec<CertificationGroup>,
}

/// Summary used by grid/card surfaces.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub model_number: String,
    pub status_label: String,
    pub image_url: String,
}

/// General product data shown on the detail header.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BasicData {
    pub name: String,
    pub model_number: String,
    pub category: String,
    pub description: String,
    pub lifecycle_status: String,
    pub enrichment_status: String,
    pub status_label: String,
    pub launch_date: String,
}

/// ERP-side identifiers and classifications.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SapData {
    pub material_number: String,
    pub division: String,
    pub sales_org: String,
    pub price_group: String,
    pub base_unit: String,
    pub country_of_origin: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketingCopy {
    pub headline: String,
    pub subheadline: String,
    pub long_text: String,
    pub bullet_points: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeoData {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub slug: String,
}

/// All relationship views of one product, grouped by link type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Relationships {
    pub bundles: Vec<RelationshipLink>,
    pub components: Vec<RelationshipLink>,
    pub accessories: Vec<RelationshipLink>,
    pub successors: Vec<RelationshipLink>,
}

impl Relationships {
    /// Returns `true` when no link of any type is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
            && self.components.is_empty()
            && self.accessories.is_empty()
            && self.successors.is_empty()
    }
}

/// One navigable relationship row.
///
/// `redirect_id` is always a concrete, directly-orderable identifier:
/// for links that target a virtual grouping record it carries the first
/// child's customer-facing code, never the parent's.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelationshipLink {
    /// Identifier shown in the table.
    pub display_id: String,
    /// Identifier used for navigation/ordering.
    pub redirect_id: String,
    pub name: String,
    pub image_url: String,
    /// Service-side id of the linked record's image asset, when present.
    pub asset_id: String,
    pub quantity: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductIcon {
    pub name: String,
    pub url: String,
}

/// QR code plus the product's web links.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebLinks {
    pub qr_code_url: String,
    pub links: Vec<WebLink>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebLink {
    pub label: String,
    pub url: String,
}

/// EAN/GTIN code per packaging unit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EanCode {
    pub code: String,
    pub packaging_unit: String,
    pub quantity: String,
}

/// One row of the packaging dimension grid: a row label plus the three
/// packaging-level columns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackagingRow {
    pub label: String,
    pub item: String,
    pub inner_box: String,
    pub master_carton: String,
}

/// Free-form packaging facts outside the dimension grid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackagingSpecs {
    pub material: String,
    pub customs_tariff_number: String,
    pub stacking_factor: String,
    pub country_of_origin: String,
}

/// A downloadable document row (marketing collaterals, after-service
/// documents).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentLink {
    pub title: String,
    pub url: String,
    pub mime_type: String,
    pub size_label: String,
}

/// One sellable SKU variant row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VariantRow {
    pub sku: String,
    pub name: String,
    pub color: String,
    pub status_label: String,
    pub ean: String,
}

/// Flattened certification documents of one family.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CertificationGroup {
    /// Family label: `"CE"`, `"GS"`, `"UL"` or `"CCC"`.
    pub family: String,
    pub documents: Vec<CertificationDocument>,
}

impl CertificationGroup {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CertificationDocument {
    /// Document kind: `"Certificate"`, `"Test Report"`, `"Declaration"`
    /// or `"Declaration of Conformity"`.
    pub kind: String,
    pub title: String,
    pub url: String,
}
