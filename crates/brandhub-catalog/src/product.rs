//! Normalization from raw product records to [`ProductViews`].
//!
//! One record feeds ~15 independent views. Each sub-mapper is total and
//! defaults its missing inputs (empty string, empty array, zero), so a
//! record with a missing sub-collection still yields every other view
//! intact; the console never branches on view presence, only on
//! emptiness.

use brandhub_core::format::{format_file_size, format_quantity, iso_date_only, unit_abbreviation};
use brandhub_core::{
    BasicData, CertificationDocument, CertificationGroup, DocumentLink, EanCode, MarketingCopy,
    PackagingRow, PackagingSpecs, ProductCard, ProductIcon, ProductViews, Relationships, SapData,
    SeoData, VariantRow, WebLink, WebLinks,
};

use crate::config::CatalogConfig;
use crate::relations::normalize_links;
use crate::types::{RawCertDocument, RawCertificationEntry, RawDocument, RawPackLevel, RawProduct};

/// Normalizes one raw product record into the full set of views.
pub(crate) fn normalize_product(config: &CatalogConfig, raw: &RawProduct) -> ProductViews {
    ProductViews {
        card: card(config, raw),
        basic: basic(raw),
        sap: sap(raw),
        marketing: marketing(raw),
        seo: seo(raw),
        relationships: relationships(config, raw),
        icons: icons(config, raw),
        weblinks: weblinks(config, raw),
        ean_codes: ean_codes(raw),
        packaging_grid: packaging_grid(raw),
        packaging_specs: packaging_specs(raw),
        collaterals: documents(config, &raw.collaterals),
        service_documents: documents(config, &raw.service_documents),
        variants: variants(raw),
        certifications: certifications(config, raw),
    }
}

/// Derives the console's status label from the two service-side status
/// fields. An active product with any enrichment status is launch-ready;
/// locally enriched data is still in development; anything else shows
/// whichever status string the record carries.
fn status_label(lifecycle: &str, enrichment: &str) -> String {
    if lifecycle == "Active" && !enrichment.is_empty() {
        return "READY FOR LAUNCH".to_string();
    }
    if enrichment == "Local Data Ready" {
        return "IN DEVELOPMENT".to_string();
    }
    if lifecycle.is_empty() {
        enrichment.to_string()
    } else {
        lifecycle.to_string()
    }
}

fn text(field: &Option<String>) -> String {
    field.clone().unwrap_or_default()
}

/// `parseFloat`-style coercion: absent or unparseable → 0.
fn coerce_f64(field: &Option<String>) -> f64 {
    field
        .as_deref()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0.0)
}

/// `parseInt`-style coercion: absent or unparseable → 0.
fn coerce_i64(field: &Option<String>) -> i64 {
    field
        .as_deref()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0)
}

/// Plain numeric rendering without a unit; integral values lose the
/// fractional part.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

fn card(config: &CatalogConfig, raw: &RawProduct) -> ProductCard {
    ProductCard {
        id: text(&raw.id),
        name: text(&raw.name),
        model_number: text(&raw.model_number),
        status_label: status_label(
            raw.lifecycle_status.as_deref().unwrap_or(""),
            raw.enrichment_status.as_deref().unwrap_or(""),
        ),
        image_url: raw
            .image
            .as_ref()
            .and_then(|image| image.fullpath.as_deref())
            .map(|path| config.absolutize(path))
            .unwrap_or_default(),
    }
}

fn basic(raw: &RawProduct) -> BasicData {
    let lifecycle = text(&raw.lifecycle_status);
    let enrichment = text(&raw.enrichment_status);
    BasicData {
        name: text(&raw.name),
        model_number: text(&raw.model_number),
        category: text(&raw.category),
        description: text(&raw.description),
        status_label: status_label(&lifecycle, &enrichment),
        lifecycle_status: lifecycle,
        enrichment_status: enrichment,
        launch_date: raw
            .launch_date
            .as_deref()
            .and_then(iso_date_only)
            .unwrap_or("")
            .to_string(),
    }
}

fn sap(raw: &RawProduct) -> SapData {
    let Some(sap) = &raw.sap else {
        return SapData::default();
    };
    SapData {
        material_number: text(&sap.material_number),
        division: text(&sap.division),
        sales_org: text(&sap.sales_org),
        price_group: text(&sap.price_group),
        base_unit: text(&sap.base_unit),
        country_of_origin: text(&sap.country_of_origin),
    }
}

fn marketing(raw: &RawProduct) -> MarketingCopy {
    let Some(marketing) = &raw.marketing else {
        return MarketingCopy::default();
    };
    MarketingCopy {
        headline: text(&marketing.headline),
        subheadline: text(&marketing.subheadline),
        long_text: text(&marketing.long_text),
        bullet_points: marketing.bullet_points.clone(),
    }
}

fn seo(raw: &RawProduct) -> SeoData {
    let Some(seo) = &raw.seo else {
        return SeoData::default();
    };
    SeoData {
        title: text(&seo.title),
        description: text(&seo.description),
        keywords: seo
            .keywords
            .as_deref()
            .map(split_keywords)
            .unwrap_or_default(),
        slug: text(&seo.slug),
    }
}

/// The source keyword field is one comma-separated string.
fn split_keywords(keywords: &str) -> Vec<String> {
    keywords
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_owned)
        .collect()
}

fn relationships(config: &CatalogConfig, raw: &RawProduct) -> Relationships {
    Relationships {
        bundles: normalize_links(&raw.bundles, config),
        components: normalize_links(&raw.components, config),
        accessories: normalize_links(&raw.accessories, config),
        successors: normalize_links(&raw.successors, config),
    }
}

fn icons(config: &CatalogConfig, raw: &RawProduct) -> Vec<ProductIcon> {
    raw.icons
        .iter()
        .map(|icon| ProductIcon {
            name: text(&icon.name),
            url: icon
                .asset
                .as_ref()
                .and_then(|asset| asset.fullpath.as_deref())
                .map(|path| config.absolutize(path))
                .unwrap_or_default(),
        })
        .collect()
}

fn weblinks(config: &CatalogConfig, raw: &RawProduct) -> WebLinks {
    WebLinks {
        qr_code_url: raw
            .qr_code
            .as_ref()
            .and_then(|qr| qr.fullpath.as_deref())
            .map(|path| config.absolutize(path))
            .unwrap_or_default(),
        links: raw
            .web_links
            .iter()
            .map(|link| WebLink {
                label: text(&link.label),
                url: text(&link.url),
            })
            .collect(),
    }
}

fn ean_codes(raw: &RawProduct) -> Vec<EanCode> {
    raw.ean_codes
        .iter()
        .map(|ean| EanCode {
            code: text(&ean.code),
            packaging_unit: unit_abbreviation(ean.unit.as_deref().unwrap_or("PCE")),
            quantity: format_number(coerce_f64(&ean.quantity)),
        })
        .collect()
}

/// Builds the fixed 6-row packaging dimension grid. Rows and columns are
/// a declared layout filled by direct field lookup; the grid never
/// scans the source for whatever happens to be present.
fn packaging_grid(raw: &RawProduct) -> Vec<PackagingRow> {
    let packaging = raw.packaging.as_ref();
    let item = packaging.and_then(|p| p.item.as_ref());
    let inner = packaging.and_then(|p| p.inner_box.as_ref());
    let master = packaging.and_then(|p| p.master_carton.as_ref());

    vec![
        grid_row("Type", item, inner, master, |level| {
            text(&level.packaging_type)
        }),
        grid_row("Quantity", item, inner, master, |level| {
            format_quantity(coerce_i64(&level.quantity) as f64, "PCE")
        }),
        grid_row("Net weight", item, inner, master, |level| {
            format_quantity(coerce_f64(&level.net_weight), "KGM")
        }),
        grid_row("Gross weight", item, inner, master, |level| {
            format_quantity(coerce_f64(&level.gross_weight), "KGM")
        }),
        grid_row("L x W x H", item, inner, master, |level| {
            format!(
                "{} x {} x {}",
                format_number(coerce_f64(&level.length)),
                format_number(coerce_f64(&level.width)),
                format_number(coerce_f64(&level.height))
            )
        }),
        grid_row("Volume", item, inner, master, |level| {
            format_quantity(coerce_f64(&level.volume), "CBM")
        }),
    ]
}

fn grid_row(
    label: &str,
    item: Option<&RawPackLevel>,
    inner: Option<&RawPackLevel>,
    master: Option<&RawPackLevel>,
    cell: impl Fn(&RawPackLevel) -> String,
) -> PackagingRow {
    PackagingRow {
        label: label.to_string(),
        item: item.map(&cell).unwrap_or_default(),
        inner_box: inner.map(&cell).unwrap_or_default(),
        master_carton: master.map(&cell).unwrap_or_default(),
    }
}

fn packaging_specs(raw: &RawProduct) -> PackagingSpecs {
    let Some(packaging) = &raw.packaging else {
        return PackagingSpecs::default();
    };
    PackagingSpecs {
        material: text(&packaging.material),
        customs_tariff_number: text(&packaging.customs_tariff_number),
        stacking_factor: text(&packaging.stacking_factor),
        country_of_origin: text(&packaging.country_of_origin),
    }
}

fn documents(config: &CatalogConfig, raws: &[RawDocument]) -> Vec<DocumentLink> {
    raws.iter()
        .map(|doc| {
            let asset = doc.asset.as_ref();
            DocumentLink {
                title: text(&doc.title),
                url: asset
                    .and_then(|a| a.fullpath.as_deref())
                    .map(|path| config.absolutize(path))
                    .unwrap_or_default(),
                mime_type: asset
                    .and_then(|a| a.mimetype.clone())
                    .unwrap_or_default(),
                size_label: asset
                    .and_then(|a| a.filesize)
                    .map(format_file_size)
                    .unwrap_or_default(),
            }
        })
        .collect()
}

fn variants(raw: &RawProduct) -> Vec<VariantRow> {
    raw.variants
        .iter()
        .map(|variant| VariantRow {
            sku: text(&variant.sku),
            name: text(&variant.name),
            color: text(&variant.color),
            status_label: status_label(variant.status.as_deref().unwrap_or(""), ""),
            ean: text(&variant.ean),
        })
        .collect()
}

/// Certification families in display order. All four groups are always
/// present; CE is the only family that carries declaration-of-conformity
/// documents.
fn certifications(config: &CatalogConfig, raw: &RawProduct) -> Vec<CertificationGroup> {
    let source = raw.certifications.as_ref();
    vec![
        family_group(
            config,
            "CE",
            source.map_or(&[][..], |c| c.ce.as_slice()),
            true,
        ),
        family_group(
            config,
            "GS",
            source.map_or(&[][..], |c| c.gs.as_slice()),
            false,
        ),
        family_group(
            config,
            "UL",
            source.map_or(&[][..], |c| c.ul.as_slice()),
            false,
        ),
        family_group(
            config,
            "CCC",
            source.map_or(&[][..], |c| c.ccc.as_slice()),
            false,
        ),
    ]
}

/// Flattens the sub-objects of a family's first entry into one linear
/// document list. The family arrays carry at most one live entry; later
/// entries are superseded revisions and are not shown.
fn family_group(
    config: &CatalogConfig,
    family: &str,
    entries: &[RawCertificationEntry],
    with_conformity: bool,
) -> CertificationGroup {
    let mut documents = Vec::new();
    if let Some(entry) = entries.first() {
        append_documents(config, &mut documents, "Certificate", &entry.certificates);
        append_documents(config, &mut documents, "Test Report", &entry.test_reports);
        append_documents(config, &mut documents, "Declaration", &entry.declarations);
        if with_conformity {
            append_documents(
                config,
                &mut documents,
                "Declaration of Conformity",
                &entry.declarations_of_conformity,
            );
        }
    }
    CertificationGroup {
        family: family.to_string(),
        documents,
    }
}

fn append_documents(
    config: &CatalogConfig,
    out: &mut Vec<CertificationDocument>,
    kind: &str,
    docs: &[RawCertDocument],
) {
    for doc in docs {
        out.push(CertificationDocument {
            kind: kind.to_string(),
            title: text(&doc.title),
            url: doc
                .asset
                .as_ref()
                .and_then(|asset| asset.fullpath.as_deref())
                .map(|path| config.absolutize(path))
                .unwrap_or_default(),
        });
    }
}

#[cfg(test)]
#[path = "product_test.rs"]
mod tests;
