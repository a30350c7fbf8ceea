//! Formatting helpers for dates, counts, and percentages.

use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Strip separators from a snapshot date for the wire: `2021-01-04` →
/// `20210104`. The `latest` sentinel (and anything already compact) passes
/// through unchanged.
pub fn compact_snapshot(snapshot: &str) -> String {
    snapshot.replace('-', "")
}

/// Re-insert separators for display: `20210104` → `2021-01-04`. Inputs that
/// are not eight digits are returned as-is.
pub fn display_snapshot(snapshot: &str) -> String {
    if snapshot.len() == 8 && snapshot.bytes().all(|b| b.is_ascii_digit()) {
        format!(
            "{}-{}-{}",
            &snapshot[0..4],
            &snapshot[4..6],
            &snapshot[6..8]
        )
    } else {
        snapshot.to_string()
    }
}

/// Parse a `YYYY-MM-DD` snapshot date, used to order the snapshot list.
pub fn parse_snapshot_date(date: &str) -> Option<Date> {
    Date::parse(date, format_description!("[year]-[month]-[day]")).ok()
}

/// Positive years render as CE, the rest as BCE.
pub fn format_year(year: i32) -> String {
    if year > 0 {
        format!("{year} CE")
    } else {
        format!("{} BCE", -year)
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Thousands-separated count for table cells.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Default upper bound for the year-of-birth range filter.
pub fn current_year() -> i32 {
    OffsetDateTime::now_utc().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_compaction_round_trips() {
        assert_eq!(compact_snapshot("2021-01-04"), "20210104");
        assert_eq!(display_snapshot("20210104"), "2021-01-04");
        assert_eq!(compact_snapshot("latest"), "latest");
        assert_eq!(display_snapshot("latest"), "latest");
    }

    #[test]
    fn snapshot_dates_parse_and_order() {
        let older = parse_snapshot_date("2020-12-28").expect("valid date");
        let newer = parse_snapshot_date("2021-01-04").expect("valid date");
        assert!(newer > older);
        assert!(parse_snapshot_date("latest").is_none());
    }

    #[test]
    fn years_render_as_ce_or_bce() {
        assert_eq!(format_year(1900), "1900 CE");
        assert_eq!(format_year(-350), "350 BCE");
        assert_eq!(format_year(0), "0 BCE");
    }

    #[test]
    fn counts_get_thousands_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(12_345_678), "12,345,678");
    }

    #[test]
    fn percents_render_with_one_decimal() {
        assert_eq!(format_percent(80.0), "80.0%");
        assert_eq!(format_percent(12.34), "12.3%");
    }
}
