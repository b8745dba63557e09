//! Catalog query-compilation and normalization engine.
//!
//! Compiles structured search criteria into the filter-query language of
//! the external catalog service and normalizes the heterogeneous,
//! partially-populated records it returns into the canonical entities of
//! [`brandhub_core`]. The engine performs no I/O: callers hand it
//! already-parsed responses and take the compiled filter string to the
//! transport layer themselves.

pub mod classify;
pub mod config;
pub mod daterange;
pub mod engine;
pub mod error;
pub mod filter;
pub mod normalize;
pub mod product;
pub mod relations;
pub mod types;

pub use classify::{kind_from_mime, CategoryRule, Classifier};
pub use config::{CatalogConfig, FilterFieldMap};
pub use daterange::{resolve_bucket, DateRange};
pub use engine::CatalogEngine;
pub use error::CatalogError;
pub use filter::{
    compile_criteria, match_all, FilterNode, FilterOp, FilterValue, ListingQuery, SearchCriteria,
    SortOrder,
};
pub use normalize::PageRequest;
pub use relations::resolve_redirect_id;
