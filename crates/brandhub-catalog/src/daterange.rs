//! Resolution of named date buckets into concrete date intervals.

use chrono::{Datelike, Days, NaiveDate};

/// An inclusive `[from, to]` date interval; `None` on either side means
/// unbounded (no filtering on that side).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// The unbounded range: no date filtering at all.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            from: None,
            to: None,
        }
    }

    /// A range from caller-supplied explicit bounds.
    #[must_use]
    pub const fn explicit(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

/// Named buckets mapped to the number of days subtracted from `today`.
/// Month-ish buckets are plain day subtraction (30/90/180), not calendar
/// month arithmetic.
const BUCKET_DAYS: &[(&str, u64)] = &[
    ("last_1_week", 7),
    ("last_1_month", 30),
    ("last_3_months", 90),
    ("last_6_months", 180),
];

/// Resolves a named bucket against a reference date.
///
/// `to` is always `today` when the bucket is recognized. An unknown or
/// empty key degrades to the unbounded range rather than erroring;
/// "no filter" is the correct behaviour for a key this engine does not
/// know.
#[must_use]
pub fn resolve_bucket(key: &str, today: NaiveDate) -> DateRange {
    if let Some((_, days)) = BUCKET_DAYS.iter().find(|(name, _)| *name == key) {
        return DateRange {
            from: today.checked_sub_days(Days::new(*days)),
            to: Some(today),
        };
    }
    if key == "this_year" {
        return DateRange {
            from: NaiveDate::from_ymd_opt(today.year(), 1, 1),
            to: Some(today),
        };
    }
    DateRange::none()
}
