use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Coarse asset-type bucket derived from the MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetKind {
    Images,
    Videos,
    Documents,
    Audio,
    Unknown,
}

impl AssetKind {
    /// MIME prefixes that map into this bucket. `Documents` covers both
    /// `application/` and `text/`; `Unknown` matches nothing.
    #[must_use]
    pub fn mime_prefixes(self) -> &'static [&'static str] {
        match self {
            AssetKind::Images => &["image/"],
            AssetKind::Videos => &["video/"],
            AssetKind::Documents => &["application/", "text/"],
            AssetKind::Audio => &["audio/"],
            AssetKind::Unknown => &[],
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetKind::Images => write!(f, "Images"),
            AssetKind::Videos => write!(f, "Videos"),
            AssetKind::Documents => write!(f, "Documents"),
            AssetKind::Audio => write!(f, "Audio"),
            AssetKind::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Content-purpose label inferred from the asset's folder path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaCategory {
    Main,
    OnWhite,
    Lifestyle,
    Action,
    InScene,
    Other,
    Unknown,
}

impl MediaCategory {
    /// The label shown in the console, including the two-word forms.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MediaCategory::Main => "Main",
            MediaCategory::OnWhite => "On White",
            MediaCategory::Lifestyle => "Lifestyle",
            MediaCategory::Action => "Action",
            MediaCategory::InScene => "In Scene",
            MediaCategory::Other => "Other",
            MediaCategory::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for MediaCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A media asset in canonical form, decoupled from the catalog
/// service's native record shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    /// Service-side asset identifier, passed through as a string.
    pub id: String,
    pub filename: String,
    pub mime_type: String,
    pub kind: AssetKind,
    pub category: MediaCategory,
    /// Model number extracted from the folder path, when one matched.
    pub model_number: Option<String>,
    /// Display form of [`Asset::model_number`]; `"Unknown"` when none
    /// was extracted. Consumers that need the raw nullable value must
    /// use `model_number`.
    pub model_label: String,
    /// Trailing folder names of the source path, oldest first.
    pub tags: Vec<String>,
    /// Path exactly as the service delivered it.
    pub source_path: String,
    pub preview_url: String,
    pub download_url: String,
    pub size_bytes: u64,
    /// Pre-rendered size label, e.g. `"1.50 MB"`.
    pub size_label: String,
    pub created_date: NaiveDate,
}

impl Asset {
    /// Tags joined for single-line display, e.g. `"Drills / On White / 10111"`.
    #[must_use]
    pub fn tag_line(&self) -> String {
        self.tags.join(" / ")
    }
}

/// One page of normalized assets plus the paging counters and
/// provenance metadata copied from the listing envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetPage {
    pub items: Vec<Asset>,
    pub total_count: u64,
    pub offset: u64,
    pub limit: u64,
    /// Which listing produced this page (e.g. `"catalog"`).
    pub source: String,
    pub fetched_at: DateTime<Utc>,
    /// Opaque per-normalization id for correlating log lines.
    pub trace_id: Uuid,
    /// Set when the listing envelope was malformed; the page is empty
    /// in that case.
    pub error: Option<String>,
}

impl AssetPage {
    /// An empty page carrying an error marker instead of items.
    #[must_use]
    pub fn empty(source: &str, fetched_at: DateTime<Utc>, error: Option<String>) -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            offset: 0,
            limit: 0,
            source: source.to_owned(),
            fetched_at,
            trace_id: Uuid::new_v4(),
            error,
        }
    }

    /// Returns `true` when the envelope was malformed and the page
    /// carries an error marker.
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Returns `true` when there are more records beyond this page.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.offset + (self.items.len() as u64) < self.total_count
    }
}
