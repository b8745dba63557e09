//! Redirect-identifier resolution for relationship links.
//!
//! Bundle, component, accessory and successor links all resolve the same
//! way: the rule only inspects the shape of the linked record, never
//! the link type.

use brandhub_core::RelationshipLink;

use crate::config::CatalogConfig;
use crate::types::{RawLinkedRecord, RawRelation};

/// Object type the service uses for non-purchasable parent records.
const VIRTUAL_OBJECT_TYPE: &str = "virtual";

/// Resolves the identifier a relationship row navigates to.
///
/// A customer-facing article number wins. A virtual grouping record has
/// none; its first child's article number is used instead, so the row
/// always points at a concrete, directly-orderable record. The raw id is
/// the terminal fallback either way.
#[must_use]
pub fn resolve_redirect_id(record: &RawLinkedRecord) -> String {
    if let Some(code) = non_empty(record.article_number.as_deref()) {
        return code.to_owned();
    }
    if is_virtual(record) {
        if let Some(code) = record
            .children
            .first()
            .and_then(|child| non_empty(child.article_number.as_deref()))
        {
            return code.to_owned();
        }
    }
    record.id.clone().unwrap_or_default()
}

fn is_virtual(record: &RawLinkedRecord) -> bool {
    record
        .object_type
        .as_deref()
        .is_some_and(|t| t.eq_ignore_ascii_case(VIRTUAL_OBJECT_TYPE))
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// Builds the rows for one relationship list. Links without a target
/// record are dropped; everything else defaults field-wise.
pub(crate) fn normalize_links(links: &[RawRelation], config: &CatalogConfig) -> Vec<RelationshipLink> {
    links
        .iter()
        .filter_map(|link| {
            let record = link.element.as_ref()?;
            Some(RelationshipLink {
                display_id: non_empty(record.article_number.as_deref())
                    .map_or_else(|| record.id.clone().unwrap_or_default(), str::to_owned),
                redirect_id: resolve_redirect_id(record),
                name: record.name.clone().unwrap_or_default(),
                image_url: record
                    .image
                    .as_ref()
                    .and_then(|image| image.fullpath.as_deref())
                    .map(|path| config.absolutize(path))
                    .unwrap_or_default(),
                asset_id: record
                    .image
                    .as_ref()
                    .and_then(|image| image.id.clone())
                    .unwrap_or_default(),
                quantity: link.quantity,
            })
        })
        .collect()
}
