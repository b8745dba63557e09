//! Compilation of structured search criteria into the service's
//! filter-query language.
//!
//! The service expects a boolean filter tree serialized as a JSON-shaped
//! string: `{"$and":[{"filename":{"$like":"%drill%"}}, …]}`. Operator
//! keys are fixed literals and values are JSON-escaped, so serialization
//! is a direct structural mapping with no escaping ambiguity.

use brandhub_core::AssetKind;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::FilterFieldMap;
use crate::daterange::{resolve_bucket, DateRange};

/// Structured search criteria assembled by the UI collaborators.
///
/// Every field is optional; an absent or empty field contributes no
/// predicate. Explicit `created_from`/`created_to` bounds take
/// precedence over a named `date_bucket`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub filename: Option<String>,
    #[serde(default)]
    pub model_numbers: Vec<String>,
    #[serde(default)]
    pub kinds: Vec<AssetKind>,
    pub date_bucket: Option<String>,
    pub created_from: Option<NaiveDate>,
    pub created_to: Option<NaiveDate>,
}

impl SearchCriteria {
    fn date_range(&self, today: NaiveDate) -> DateRange {
        if self.created_from.is_some() || self.created_to.is_some() {
            return DateRange::explicit(self.created_from, self.created_to);
        }
        match self.date_bucket.as_deref() {
            Some(bucket) => resolve_bucket(bucket, today),
            None => DateRange::none(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Like,
    Gte,
    Lte,
}

impl FilterOp {
    /// The operator key literal, or `None` for plain equality (which
    /// serializes without an operator object).
    const fn key(self) -> Option<&'static str> {
        match self {
            FilterOp::Eq => None,
            FilterOp::Like => Some("$like"),
            FilterOp::Gte => Some("$gte"),
            FilterOp::Lte => Some("$lte"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Number(i64),
}

impl FilterValue {
    /// JSON rendering of the value; strings are escaped.
    fn to_json(&self) -> String {
        match self {
            FilterValue::Text(s) => serde_json::Value::from(s.as_str()).to_string(),
            FilterValue::Number(n) => n.to_string(),
        }
    }
}

/// A compiled boolean filter tree.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterNode {
    And(Vec<FilterNode>),
    Or(Vec<FilterNode>),
    Predicate {
        field: String,
        op: FilterOp,
        value: FilterValue,
    },
}

impl FilterNode {
    fn predicate(field: &str, op: FilterOp, value: FilterValue) -> Self {
        FilterNode::Predicate {
            field: field.to_owned(),
            op,
            value,
        }
    }

    /// Serializes the tree to the string the service expects.
    ///
    /// Children serialize in construction order, so the output is
    /// byte-identical for equal trees.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut out = String::new();
        self.write(&mut out);
        out
    }

    fn write(&self, out: &mut String) {
        match self {
            FilterNode::And(children) => Self::write_group(out, "$and", children),
            FilterNode::Or(children) => Self::write_group(out, "$or", children),
            FilterNode::Predicate { field, op, value } => {
                let field_json = serde_json::Value::from(field.as_str()).to_string();
                match op.key() {
                    None => {
                        out.push('{');
                        out.push_str(&field_json);
                        out.push(':');
                        out.push_str(&value.to_json());
                        out.push('}');
                    }
                    Some(key) => {
                        out.push('{');
                        out.push_str(&field_json);
                        out.push_str(":{\"");
                        out.push_str(key);
                        out.push_str("\":");
                        out.push_str(&value.to_json());
                        out.push_str("}}");
                    }
                }
            }
        }
    }

    fn write_group(out: &mut String, key: &str, children: &[FilterNode]) {
        out.push_str("{\"");
        out.push_str(key);
        out.push_str("\":[");
        for (i, child) in children.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            child.write(out);
        }
        out.push_str("]}");
    }
}

/// The guard predicate used when no criteria produced a condition: it
/// matches every record with a non-null guard field. The service
/// requires a filter to always be present, so "no filter" compiles to
/// this instead of an empty string.
#[must_use]
pub fn match_all(guard_field: &str) -> FilterNode {
    FilterNode::predicate(guard_field, FilterOp::Like, FilterValue::Text("%".to_owned()))
}

/// Compiles criteria into a filter tree.
///
/// Criteria are visited in the field map's declaration order (filename,
/// model numbers, kinds, date range), never in input iteration order,
/// so compiling the same criteria twice yields byte-identical strings.
/// A single condition is returned unwrapped; zero conditions degenerate
/// to [`match_all`].
#[must_use]
pub fn compile_criteria(
    criteria: &SearchCriteria,
    fields: &FilterFieldMap,
    guard_field: &str,
    today: NaiveDate,
) -> FilterNode {
    let mut nodes = Vec::new();

    if let Some(name) = criteria.filename.as_deref().filter(|s| !s.is_empty()) {
        nodes.push(FilterNode::predicate(
            &fields.filename,
            FilterOp::Like,
            FilterValue::Text(format!("%{name}%")),
        ));
    }

    let model_predicates: Vec<FilterNode> = criteria
        .model_numbers
        .iter()
        .filter(|m| !m.is_empty())
        .map(|m| FilterNode::predicate(&fields.model_number, FilterOp::Eq, FilterValue::Text(m.clone())))
        .collect();
    if let Some(node) = any_of(model_predicates) {
        nodes.push(node);
    }

    let kind_predicates: Vec<FilterNode> = criteria
        .kinds
        .iter()
        .flat_map(|kind| kind.mime_prefixes())
        .map(|prefix| {
            FilterNode::predicate(
                &fields.mime_type,
                FilterOp::Like,
                FilterValue::Text(format!("{prefix}%")),
            )
        })
        .collect();
    if let Some(node) = any_of(kind_predicates) {
        nodes.push(node);
    }

    let range = criteria.date_range(today);
    if let Some(from) = range.from {
        nodes.push(FilterNode::predicate(
            &fields.created,
            FilterOp::Gte,
            FilterValue::Text(from.to_string()),
        ));
    }
    if let Some(to) = range.to {
        nodes.push(FilterNode::predicate(
            &fields.created,
            FilterOp::Lte,
            FilterValue::Text(to.to_string()),
        ));
    }

    match nodes.len() {
        0 => match_all(guard_field),
        1 => nodes.remove(0),
        _ => FilterNode::And(nodes),
    }
}

/// Wraps predicates in an Or, unwrapping the single-predicate case.
fn any_of(mut predicates: Vec<FilterNode>) -> Option<FilterNode> {
    match predicates.len() {
        0 => None,
        1 => Some(predicates.remove(0)),
        _ => Some(FilterNode::Or(predicates)),
    }
}

/// Sort direction accepted by the listing interface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            SortOrder::Ascending => "ASC",
            SortOrder::Descending => "DESC",
        }
    }
}

/// A compiled listing request: the filter string plus the paging and
/// sort parameters the (excluded) transport layer appends to the call.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingQuery {
    pub filter: String,
    pub offset: u64,
    pub limit: u64,
    pub sort_by: Option<String>,
    pub sort_order: SortOrder,
}

impl ListingQuery {
    /// Ordered `(name, value)` parameter pairs. The order is fixed for
    /// the same reason the filter string is deterministic: the full
    /// request is a memoization key upstream.
    #[must_use]
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("filter", self.filter.clone()),
            ("offset", self.offset.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(sort_by) = &self.sort_by {
            params.push(("sortBy", sort_by.clone()));
            params.push(("sortOrder", self.sort_order.as_param().to_string()));
        }
        params
    }
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
