//! Reshaping of raw metric records into chart- and table-ready structures.
//!
//! Everything here is a pure function of `(meta, metrics)`; views recompute
//! and replace the whole derived value whenever the source data or a filter
//! changes. Nothing is mutated in place afterwards.

use super::format::{display_snapshot, format_count, format_percent, format_year};
use super::model::{GenderCategory, Meta, MetricRecord, PropertyField};

/// One point of a line series. `x` is the parsed year for date-of-birth data
/// and the record index otherwise; `key` keeps the raw grouping value for
/// tick labels.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePoint {
    pub x: f64,
    pub key: String,
    pub value: u64,
}

/// One line per gender category, in the fixed female/male/other order.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub category: GenderCategory,
    pub points: Vec<LinePoint>,
}

/// Bucket every record's counts into three aligned series. Each record
/// contributes exactly one point to each series (absent counts as 0), so the
/// series values sum to the sum of all gender counts in the input.
pub fn create_line_data(metrics: &[MetricRecord], field: PropertyField) -> Vec<LineSeries> {
    let mut series: Vec<LineSeries> = GenderCategory::ORDERED
        .iter()
        .map(|&category| LineSeries {
            category,
            points: Vec::with_capacity(metrics.len()),
        })
        .collect();

    for (index, record) in metrics.iter().enumerate() {
        let x = match field {
            PropertyField::DateOfBirth => record.year().map(f64::from).unwrap_or(index as f64),
            _ => index as f64,
        };
        let key = record.group_label(field).unwrap_or_default().to_string();

        for (slot, &category) in GenderCategory::ORDERED.iter().enumerate() {
            series[slot].points.push(LinePoint {
                x,
                key: key.clone(),
                value: record.count_for(category),
            });
        }
    }

    series
}

/// One `{count, percent}` pair of a table row.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GenderCell {
    pub count: u64,
    pub percent: f64,
}

/// One table row derived from one metric record. `genders` is aligned with
/// the `bias_labels` iteration order used by [`create_columns`].
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub index: usize,
    /// Display label for the grouping value (years formatted CE/BCE).
    pub label: String,
    /// Numeric sort value for the key column (year, or record index).
    pub sort_value: f64,
    pub total: u64,
    pub genders: Vec<GenderCell>,
    pub other: GenderCell,
    pub female_percent: f64,
}

/// Dataset-wide extrema over the generated rows, used for chart axis scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extrema {
    pub percent_min: f64,
    pub percent_max: f64,
    pub total_min: f64,
    pub total_max: f64,
}

impl Extrema {
    fn empty() -> Self {
        Self {
            percent_min: f64::INFINITY,
            percent_max: f64::NEG_INFINITY,
            total_min: f64::INFINITY,
            total_max: f64::NEG_INFINITY,
        }
    }

    fn observe(&mut self, female_percent: f64, total: f64) {
        if female_percent < self.percent_min {
            self.percent_min = female_percent;
        }
        if female_percent > self.percent_max {
            self.percent_max = female_percent;
        }
        if total < self.total_min {
            self.total_min = total;
        }
        if total > self.total_max {
            self.total_max = total;
        }
    }
}

/// Percentage of `count` within `total`. A zero total reports 0 rather than
/// letting NaN or infinity escape into rendering.
fn percent_of(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Build one row per record plus running extrema of the female percentage and
/// of the row total.
pub fn create_table(
    meta: &Meta,
    metrics: &[MetricRecord],
    field: PropertyField,
) -> (Vec<TableRow>, Extrema) {
    let mut rows = Vec::with_capacity(metrics.len());
    let mut extrema = Extrema::empty();

    for (index, record) in metrics.iter().enumerate() {
        let total = record.total();

        let label = match field {
            PropertyField::DateOfBirth => record
                .year()
                .map(format_year)
                .or_else(|| record.group_label(field).map(str::to_string))
                .unwrap_or_default(),
            _ => record.group_label(field).unwrap_or_default().to_string(),
        };
        let sort_value = match field {
            PropertyField::DateOfBirth => record.year().map(f64::from).unwrap_or(index as f64),
            _ => index as f64,
        };

        let genders: Vec<GenderCell> = meta
            .bias_labels
            .keys()
            .map(|identifier| {
                let count = record.values.get(identifier).copied().unwrap_or(0);
                GenderCell {
                    count,
                    percent: percent_of(count, total),
                }
            })
            .collect();

        let other_count = record.count_for(GenderCategory::Other);
        let other = GenderCell {
            count: other_count,
            percent: percent_of(other_count, total),
        };
        let female_percent = percent_of(record.count_for(GenderCategory::Female), total);

        extrema.observe(female_percent, total as f64);

        rows.push(TableRow {
            index,
            label,
            sort_value,
            total,
            genders,
            other,
            female_percent,
        });
    }

    (rows, extrema)
}

/// Addresses one cell of a [`TableRow`]. Gender indices point into the
/// `bias_labels` iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKey {
    Group,
    GenderCount(usize),
    GenderPercent(usize),
    OtherCount,
    OtherPercent,
    Total,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKind {
    Numeric,
    Text,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    pub key: ColumnKey,
    pub label: String,
    pub sort: SortKind,
}

/// Column descriptors matching [`create_table`]'s row layout: the grouping
/// key, count and percent per gender label, the other-genders aggregate, and
/// the total.
pub fn create_columns(meta: &Meta, field: PropertyField) -> Vec<ColumnSpec> {
    let mut columns = vec![ColumnSpec {
        key: ColumnKey::Group,
        label: field.display_label().to_string(),
        sort: match field {
            PropertyField::DateOfBirth => SortKind::Numeric,
            _ => SortKind::Text,
        },
    }];

    for (slot, label) in meta.bias_labels.values().enumerate() {
        columns.push(ColumnSpec {
            key: ColumnKey::GenderCount(slot),
            label: label.clone(),
            sort: SortKind::Numeric,
        });
        columns.push(ColumnSpec {
            key: ColumnKey::GenderPercent(slot),
            label: format!("{label} %"),
            sort: SortKind::Numeric,
        });
    }

    columns.push(ColumnSpec {
        key: ColumnKey::OtherCount,
        label: "other genders".to_string(),
        sort: SortKind::Numeric,
    });
    columns.push(ColumnSpec {
        key: ColumnKey::OtherPercent,
        label: "other genders %".to_string(),
        sort: SortKind::Numeric,
    });
    columns.push(ColumnSpec {
        key: ColumnKey::Total,
        label: "total".to_string(),
        sort: SortKind::Numeric,
    });

    columns
}

impl TableRow {
    /// Numeric value of a cell, used for sorting and chart scaling.
    pub fn number_for(&self, key: ColumnKey) -> f64 {
        match key {
            ColumnKey::Group => self.sort_value,
            ColumnKey::GenderCount(slot) => {
                self.genders.get(slot).map(|c| c.count as f64).unwrap_or(0.0)
            }
            ColumnKey::GenderPercent(slot) => {
                self.genders.get(slot).map(|c| c.percent).unwrap_or(0.0)
            }
            ColumnKey::OtherCount => self.other.count as f64,
            ColumnKey::OtherPercent => self.other.percent,
            ColumnKey::Total => self.total as f64,
        }
    }

    /// Rendered value of a cell.
    pub fn display_for(&self, key: ColumnKey) -> String {
        match key {
            ColumnKey::Group => self.label.clone(),
            ColumnKey::GenderCount(slot) => {
                format_count(self.genders.get(slot).map(|c| c.count).unwrap_or(0))
            }
            ColumnKey::GenderPercent(slot) => {
                format_percent(self.genders.get(slot).map(|c| c.percent).unwrap_or(0.0))
            }
            ColumnKey::OtherCount => format_count(self.other.count),
            ColumnKey::OtherPercent => format_percent(self.other.percent),
            ColumnKey::Total => format_count(self.total),
        }
    }
}

/// Everything one view render needs, derived in a single pass from the held
/// payload and the already-filtered records.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedGap {
    pub line: Vec<LineSeries>,
    pub rows: Vec<TableRow>,
    pub columns: Vec<ColumnSpec>,
    pub extrema: Extrema,
    pub snapshot_display: String,
    pub coverage: f64,
}

impl DerivedGap {
    pub fn derive(meta: &Meta, metrics: &[MetricRecord], field: PropertyField) -> Self {
        let (rows, extrema) = create_table(meta, metrics, field);
        Self {
            line: create_line_data(metrics, field),
            rows,
            columns: create_columns(meta, field),
            extrema,
            snapshot_display: display_snapshot(&meta.snapshot),
            coverage: meta.coverage,
        }
    }
}
