use dioxus::prelude::*;

use crate::components::{
    committed_year, push_toast, use_toasts, ErrorPanel, GenderTable, LicensingNote, LineChart,
    PopulationToggle, RadialChart, SnapshotSelect, YearRangeInputs, INVALID_YEAR_MESSAGE,
};
use crate::core::fetch::{use_gap_metrics, SharedSnapshots};
use crate::core::filters::{filter_metrics, year_range_filter};
use crate::core::format::current_year;
use crate::core::model::{Population, PropertyField, DEFAULT_YEAR_START, LATEST_SNAPSHOT};
use crate::core::transform::DerivedGap;

/// Combined search: the grouping property is itself selectable, so changing
/// it re-issues the fetch alongside snapshot and population. The year range
/// applies (filter-only) when grouping by year of birth.
#[component]
pub fn AdvancedSearch() -> Element {
    let mut snapshot = use_signal(|| LATEST_SNAPSHOT.to_string());
    let mut population = use_signal(Population::default);
    let mut property = use_signal(|| PropertyField::DateOfBirth);
    let mut year_start = use_signal(|| DEFAULT_YEAR_START);
    let mut year_end = use_signal(current_year);

    let metrics = use_gap_metrics(snapshot, population, property);
    let toasts = use_toasts();
    let shared_snapshots = use_context::<SharedSnapshots>();

    let derived = use_memo(move || {
        metrics.payload.read().as_ref().map(|payload| {
            let field = property();
            let kept = if field == PropertyField::DateOfBirth {
                filter_metrics(
                    &payload.metrics,
                    year_range_filter(year_start(), year_end()),
                )
            } else {
                payload.metrics.clone()
            };
            DerivedGap::derive(&payload.meta, &kept, field)
        })
    });

    let loading = (metrics.loading)();
    let error = (metrics.error)();
    let data = derived();
    let field = property();

    rsx! {
        section { class: "viz-page viz-page--advanced",
            header { class: "viz-page__intro",
                h1 { "Advanced search" }
                p { "Pick a snapshot, a population, and a grouping property to slice the gap metric." }
            }

            div { class: "viz-page__query",
                PopulationToggle {
                    value: population(),
                    on_change: move |value| population.set(value),
                }

                div { class: "property-select",
                    label { class: "property-select__label", r#for: "property-select", "Group by" }
                    select {
                        id: "property-select",
                        value: "{field.as_param()}",
                        onchange: move |evt| {
                            if let Some(next) = PropertyField::from_param(&evt.value()) {
                                property.set(next);
                            }
                        },
                        for option in PropertyField::ALL {
                            option { key: "{option.as_param()}", value: "{option.as_param()}",
                                "{option.display_label()}"
                            }
                        }
                    }
                }

                SnapshotSelect {
                    snapshots: shared_snapshots.0(),
                    selected: snapshot(),
                    on_select: move |value| snapshot.set(value),
                }

                if field == PropertyField::DateOfBirth {
                    YearRangeInputs {
                        start: year_start(),
                        end: year_end(),
                        on_start: move |raw: String| {
                            let (year, fell_back) = committed_year(&raw, DEFAULT_YEAR_START);
                            if fell_back {
                                push_toast(toasts, INVALID_YEAR_MESSAGE);
                            }
                            year_start.set(year);
                        },
                        on_end: move |raw: String| {
                            let (year, fell_back) = committed_year(&raw, current_year());
                            if fell_back {
                                push_toast(toasts, INVALID_YEAR_MESSAGE);
                            }
                            year_end.set(year);
                        },
                    }
                }
            }

            div { class: "viz-page__body",
                div { class: "viz-page__chart",
                    if let Some(ref d) = data {
                        p { class: "viz-page__timestamp", "As of {d.snapshot_display}" }
                    }
                    if loading {
                        div { class: "viz-page__loading", "Loading…" }
                    }
                    if let Some(message) = error {
                        ErrorPanel { message }
                    }
                    if field == PropertyField::DateOfBirth {
                        if let Some(ref d) = data {
                            if !d.rows.is_empty() {
                                LineChart { series: d.line.clone(), extrema: d.extrema }
                            }
                        }
                    }
                }

                aside { class: "viz-page__controls",
                    div { class: "viz-page__completeness",
                        h2 { "Data completeness" }
                        p { "Share of humans with the grouping property known." }
                        if let Some(ref d) = data {
                            RadialChart { coverage: d.coverage }
                        }
                    }
                }
            }

            LicensingNote {}
            hr {}

            if let Some(ref d) = data {
                GenderTable { columns: d.columns.clone(), rows: d.rows.clone() }
            }
        }
    }
}
