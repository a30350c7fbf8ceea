//! Pure predicates over metric records. Predicates never touch the network;
//! applying one re-slices data the view already holds.

use super::model::{MetricRecord, PropertyField};

/// Predicate: the record's year of birth lies in `[start, end]`, inclusive.
/// Records whose year does not parse are excluded.
pub fn year_range_filter(start: i32, end: i32) -> impl Fn(&MetricRecord) -> bool {
    move |record| match record.year() {
        Some(year) => start <= year && year <= end,
        None => false,
    }
}

/// Predicate: the record's display label contains `needle`,
/// case-insensitively. An empty needle matches everything.
pub fn label_filter(field: PropertyField, needle: &str) -> impl Fn(&MetricRecord) -> bool {
    let needle = needle.trim().to_lowercase();
    move |record| {
        if needle.is_empty() {
            return true;
        }
        record
            .group_label(field)
            .map(|label| label.to_lowercase().contains(&needle))
            .unwrap_or(false)
    }
}

/// The subsequence of `metrics` satisfying `predicate`, in original order.
pub fn filter_metrics<F>(metrics: &[MetricRecord], predicate: F) -> Vec<MetricRecord>
where
    F: Fn(&MetricRecord) -> bool,
{
    metrics
        .iter()
        .filter(|record| predicate(record))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dob_record(year: &str) -> MetricRecord {
        serde_json::from_str(&format!(
            r#"{{
                "item": {{"date_of_birth": "{year}"}},
                "item_label": {{"date_of_birth": "{year}"}},
                "values": {{"Q6581097": 1}}
            }}"#
        ))
        .expect("record should deserialize")
    }

    fn country_record(label: &str) -> MetricRecord {
        serde_json::from_str(&format!(
            r#"{{
                "item_label": {{"country": "{label}"}},
                "values": {{"Q6581097": 1}}
            }}"#
        ))
        .expect("record should deserialize")
    }

    #[test]
    fn year_range_is_inclusive_and_order_preserving() {
        let metrics = vec![
            dob_record("1599"),
            dob_record("1600"),
            dob_record("1750"),
            dob_record("1900"),
            dob_record("1901"),
        ];

        let kept = filter_metrics(&metrics, year_range_filter(1600, 1900));
        let years: Vec<_> = kept.iter().filter_map(MetricRecord::year).collect();
        assert_eq!(years, [1600, 1750, 1900]);
    }

    #[test]
    fn unparseable_years_are_excluded() {
        let metrics = vec![dob_record("1900"), dob_record("unknown")];
        let kept = filter_metrics(&metrics, year_range_filter(1600, 2000));
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn degenerate_range_keeps_exact_year_only() {
        let metrics = vec![dob_record("1899"), dob_record("1900"), dob_record("1901")];
        let kept = filter_metrics(&metrics, year_range_filter(1900, 1900));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].year(), Some(1900));
    }

    #[test]
    fn label_filter_is_case_insensitive_substring() {
        let metrics = vec![
            country_record("France"),
            country_record("Germany"),
            country_record("South Africa"),
        ];

        let kept = filter_metrics(&metrics, label_filter(PropertyField::Country, "fr"));
        assert_eq!(kept.len(), 2);

        let all = filter_metrics(&metrics, label_filter(PropertyField::Country, "  "));
        assert_eq!(all.len(), 3);
    }
}
