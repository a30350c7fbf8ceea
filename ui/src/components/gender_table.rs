//! Sortable table over the derived rows. Clicking a header sorts by that
//! column; clicking again flips the direction. Sorting is a pure function so
//! it can be tested without rendering.

use std::cmp::Ordering;

use dioxus::prelude::*;

use crate::core::transform::{ColumnSpec, SortKind, TableRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    fn indicator(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

#[component]
pub fn GenderTable(columns: Vec<ColumnSpec>, rows: Vec<TableRow>) -> Element {
    let mut sort = use_signal(|| None::<(usize, SortDirection)>);

    let view_rows = {
        let mut view_rows = rows.clone();
        if let Some((index, direction)) = sort() {
            if let Some(column) = columns.get(index) {
                sort_rows(&mut view_rows, column, direction);
            }
        }
        view_rows
    };

    let active = sort();

    rsx! {
        div { class: "gender-table",
            table {
                thead {
                    tr {
                        for (index, column) in columns.iter().enumerate() {
                            th {
                                key: "{index}",
                                class: "gender-table__header",
                                onclick: move |_| {
                                    let next = match *sort.peek() {
                                        Some((current, direction)) if current == index => {
                                            (index, direction.flipped())
                                        }
                                        _ => (index, SortDirection::Ascending),
                                    };
                                    sort.set(Some(next));
                                },
                                "{column.label}"
                                if let Some((current, direction)) = active {
                                    if current == index {
                                        span { class: "gender-table__sort", " {direction.indicator()}" }
                                    }
                                }
                            }
                        }
                    }
                }
                tbody {
                    for row in view_rows.iter() {
                        tr { key: "{row.index}",
                            for column in columns.iter() {
                                td { "{row.display_for(column.key)}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Sort rows by one column. Numeric columns compare cell values; text columns
/// compare labels case-insensitively.
pub fn sort_rows(rows: &mut [TableRow], column: &ColumnSpec, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ordering = match column.sort {
            SortKind::Numeric => a
                .number_for(column.key)
                .partial_cmp(&b.number_for(column.key))
                .unwrap_or(Ordering::Equal),
            SortKind::Text => a.label.to_lowercase().cmp(&b.label.to_lowercase()),
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{Meta, MetricRecord, PropertyField};
    use crate::core::transform::{create_columns, create_table, ColumnKey};
    use std::collections::BTreeMap;

    fn sample_rows() -> (Vec<ColumnSpec>, Vec<TableRow>) {
        let meta = Meta {
            bias_labels: BTreeMap::from([
                ("Q6581072".to_string(), "women".to_string()),
                ("Q6581097".to_string(), "men".to_string()),
            ]),
            snapshot: "2021-01-04".to_string(),
            coverage: 0.5,
        };
        let records: Vec<MetricRecord> = [("France", 30u64), ("Austria", 10), ("Brazil", 20)]
            .iter()
            .map(|(label, men)| MetricRecord {
                item: BTreeMap::new(),
                item_label: BTreeMap::from([("country".to_string(), label.to_string())]),
                values: BTreeMap::from([("Q6581097".to_string(), *men)]),
            })
            .collect();

        let (rows, _) = create_table(&meta, &records, PropertyField::Country);
        (create_columns(&meta, PropertyField::Country), rows)
    }

    #[test]
    fn text_sort_orders_labels_case_insensitively() {
        let (columns, mut rows) = sample_rows();
        sort_rows(&mut rows, &columns[0], SortDirection::Ascending);
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["Austria", "Brazil", "France"]);
    }

    #[test]
    fn numeric_sort_descends_on_totals() {
        let (columns, mut rows) = sample_rows();
        let total_column = columns
            .iter()
            .find(|c| c.key == ColumnKey::Total)
            .expect("total column exists");
        sort_rows(&mut rows, total_column, SortDirection::Descending);
        let totals: Vec<u64> = rows.iter().map(|r| r.total).collect();
        assert_eq!(totals, [30, 20, 10]);
    }
}
