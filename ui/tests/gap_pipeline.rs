//! End-to-end check of the data layer: a captured service payload is
//! deserialized, filtered, and reshaped exactly the way the views do it.

use ui::core::filters::{filter_metrics, year_range_filter};
use ui::core::model::{GapPayload, GenderCategory, PropertyField};
use ui::core::transform::{ColumnKey, DerivedGap};

const GAP_DOB: &str = include_str!("fixtures/gap_dob.json");

fn fixture() -> GapPayload {
    serde_json::from_str(GAP_DOB).expect("fixture payload should deserialize")
}

#[test]
fn payload_deserializes_with_labels_and_coverage() {
    let payload = fixture();
    assert_eq!(payload.metrics.len(), 5);
    assert_eq!(payload.meta.coverage, 0.82);
    assert_eq!(
        payload.meta.bias_labels.get("Q6581072").map(String::as_str),
        Some("women")
    );
}

#[test]
fn year_filter_then_derive_matches_the_views() {
    let payload = fixture();

    // The default range drops the 1599 record.
    let kept = filter_metrics(&payload.metrics, year_range_filter(1600, 2026));
    assert_eq!(kept.len(), 4);

    let derived = DerivedGap::derive(&payload.meta, &kept, PropertyField::DateOfBirth);

    assert_eq!(derived.snapshot_display, "2021-01-04");
    assert_eq!(derived.coverage, 0.82);
    assert_eq!(derived.rows.len(), 4);
    assert_eq!(derived.line.len(), 3);

    // Conservation across the three series.
    let input_total: u64 = kept.iter().map(|r| r.total()).sum();
    let series_total: u64 = derived
        .line
        .iter()
        .flat_map(|s| s.points.iter().map(|p| p.value))
        .sum();
    assert_eq!(series_total, input_total);

    // The 1600 row is the worked example from the product notes.
    let row_1600 = &derived.rows[0];
    assert_eq!(row_1600.label, "1600 CE");
    assert_eq!(row_1600.total, 100);
    assert_eq!(row_1600.female_percent, 80.0);
    assert_eq!(row_1600.display_for(ColumnKey::GenderPercent(0)), "80.0%");
    assert_eq!(row_1600.display_for(ColumnKey::GenderPercent(1)), "20.0%");
    assert_eq!(row_1600.display_for(ColumnKey::OtherPercent), "0.0%");

    // 1900 splits across two unlisted identifiers; both land in "other".
    let row_1900 = &derived.rows[2];
    assert_eq!(row_1900.total, 3100);
    assert_eq!(row_1900.other.count, 100);
    let other_series = &derived.line[GenderCategory::Other.index()];
    assert_eq!(other_series.points[2].value, 100);

    // The empty 1950 row reports zero percentages, not NaN.
    let row_1950 = &derived.rows[3];
    assert_eq!(row_1950.total, 0);
    assert_eq!(row_1950.female_percent, 0.0);
    assert_eq!(row_1950.other.percent, 0.0);

    // Extrema cover the true min/max over the derived rows.
    assert_eq!(derived.extrema.percent_max, 80.0);
    assert_eq!(derived.extrema.percent_min, 0.0);
    assert_eq!(derived.extrema.total_max, 3100.0);
    assert_eq!(derived.extrema.total_min, 0.0);

    // Column layout: key column, per-gender count/percent, other, total.
    let labels: Vec<&str> = derived.columns.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(
        labels,
        [
            "Year of birth",
            "women",
            "women %",
            "men",
            "men %",
            "other genders",
            "other genders %",
            "total",
        ]
    );
}

#[test]
fn filter_only_changes_never_touch_the_payload() {
    let payload = fixture();
    let before = payload.metrics.clone();

    let _narrow = filter_metrics(&payload.metrics, year_range_filter(1700, 1800));
    let _wide = filter_metrics(&payload.metrics, year_range_filter(i32::MIN, i32::MAX));

    // Re-slicing derives new vectors; the held payload is untouched.
    assert_eq!(payload.metrics, before);
}
