//! Pure display-formatting helpers shared by every console surface.
//!
//! These are deliberately free functions over primitives so that grid
//! cells, detail panes and download dialogs all render byte sizes,
//! quantities and dates identically.

use chrono::NaiveDate;

/// Unit codes as delivered by the catalog service, mapped to the
/// abbreviations the console displays. Codes not in this table fall
/// back to the lowercased code itself.
const UNIT_ABBREVIATIONS: &[(&str, &str)] = &[
    ("PCE", "pc"),
    ("KGM", "kg"),
    ("GRM", "g"),
    ("MTR", "m"),
    ("CMT", "cm"),
    ("MMT", "mm"),
    ("LTR", "l"),
    ("MLT", "ml"),
    ("CBM", "m3"),
];

/// Formats a byte count as a decimal size label with two decimals for
/// scaled units, e.g. `1_500_000` → `"1.50 MB"` and `512` → `"512 B"`.
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    const KB: f64 = 1_000.0;
    const MB: f64 = 1_000_000.0;
    const GB: f64 = 1_000_000_000.0;

    #[allow(clippy::cast_precision_loss)]
    let value = bytes as f64;

    if value >= GB {
        format!("{:.2} GB", value / GB)
    } else if value >= MB {
        format!("{:.2} MB", value / MB)
    } else if value >= KB {
        format!("{:.2} KB", value / KB)
    } else {
        format!("{bytes} B")
    }
}

/// Returns the display abbreviation for a service unit code.
///
/// Unknown codes are passed through lowercased so an unexpected unit
/// still renders something readable instead of an empty cell.
#[must_use]
pub fn unit_abbreviation(code: &str) -> String {
    UNIT_ABBREVIATIONS
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map_or_else(|| code.to_lowercase(), |(_, abbr)| (*abbr).to_string())
}

/// Formats a quantity with its unit abbreviation, e.g. `12 pc` or
/// `1.5 kg`. Integral values are printed without a fractional part.
#[must_use]
pub fn format_quantity(value: f64, unit_code: &str) -> String {
    let unit = unit_abbreviation(unit_code);
    if value.fract() == 0.0 {
        format!("{value:.0} {unit}")
    } else {
        format!("{value} {unit}")
    }
}

/// Truncates an ISO timestamp to its date component by cutting at the
/// `T` (or space) separator. Returns `None` for empty input.
#[must_use]
pub fn iso_date_only(timestamp: &str) -> Option<&str> {
    if timestamp.is_empty() {
        return None;
    }
    timestamp.split(['T', ' ']).next()
}

/// Parses a `"YYYY-MM-DD"` date string into a [`NaiveDate`].
///
/// Returns `None` if the string does not match the expected format.
#[must_use]
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Formats a date the way the console's tables show it: `DD.MM.YYYY`.
#[must_use]
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // format_file_size
    // -----------------------------------------------------------------------

    #[test]
    fn file_size_bytes_tier() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(999), "999 B");
    }

    #[test]
    fn file_size_kb_tier() {
        assert_eq!(format_file_size(1_000), "1.00 KB");
        assert_eq!(format_file_size(1_500), "1.50 KB");
    }

    #[test]
    fn file_size_mb_tier() {
        assert_eq!(format_file_size(1_500_000), "1.50 MB");
        assert_eq!(format_file_size(12_345_678), "12.35 MB");
    }

    #[test]
    fn file_size_gb_tier() {
        assert_eq!(format_file_size(2_500_000_000), "2.50 GB");
    }

    // -----------------------------------------------------------------------
    // unit_abbreviation / format_quantity
    // -----------------------------------------------------------------------

    #[test]
    fn unit_abbreviation_known_codes() {
        assert_eq!(unit_abbreviation("PCE"), "pc");
        assert_eq!(unit_abbreviation("KGM"), "kg");
        assert_eq!(unit_abbreviation("MMT"), "mm");
        assert_eq!(unit_abbreviation("CBM"), "m3");
    }

    #[test]
    fn unit_abbreviation_is_case_insensitive() {
        assert_eq!(unit_abbreviation("pce"), "pc");
        assert_eq!(unit_abbreviation("Kgm"), "kg");
    }

    #[test]
    fn unit_abbreviation_unknown_code_passes_through_lowercased() {
        assert_eq!(unit_abbreviation("XYZ"), "xyz");
    }

    #[test]
    fn format_quantity_integral_value() {
        assert_eq!(format_quantity(12.0, "PCE"), "12 pc");
    }

    #[test]
    fn format_quantity_fractional_value() {
        assert_eq!(format_quantity(1.5, "KGM"), "1.5 kg");
    }

    #[test]
    fn format_quantity_zero() {
        assert_eq!(format_quantity(0.0, "PCE"), "0 pc");
    }

    // -----------------------------------------------------------------------
    // dates
    // -----------------------------------------------------------------------

    #[test]
    fn iso_date_only_truncates_t_separator() {
        assert_eq!(iso_date_only("2024-03-31T14:22:03Z"), Some("2024-03-31"));
    }

    #[test]
    fn iso_date_only_truncates_space_separator() {
        assert_eq!(iso_date_only("2024-03-31 14:22:03"), Some("2024-03-31"));
    }

    #[test]
    fn iso_date_only_plain_date_is_unchanged() {
        assert_eq!(iso_date_only("2024-03-31"), Some("2024-03-31"));
    }

    #[test]
    fn iso_date_only_empty_is_none() {
        assert_eq!(iso_date_only(""), None);
    }

    #[test]
    fn parse_date_valid() {
        assert_eq!(
            parse_date("2024-03-31"),
            NaiveDate::from_ymd_opt(2024, 3, 31)
        );
    }

    #[test]
    fn parse_date_invalid() {
        assert_eq!(parse_date("not-a-date"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn display_date_is_dotted() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_display_date(date), "05.03.2024");
    }
}
