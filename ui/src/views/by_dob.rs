use dioxus::prelude::*;

use crate::components::{
    committed_year, push_toast, use_toasts, ErrorPanel, GenderTable, HoverTooltip, LicensingNote,
    LineChart, PopulationToggle, RadialChart, SnapshotSelect, YearRangeInputs,
    INVALID_YEAR_MESSAGE,
};
use crate::core::fetch::{use_gap_metrics, SharedSnapshots};
use crate::core::filters::{filter_metrics, year_range_filter};
use crate::core::format::current_year;
use crate::core::model::{Population, PropertyField, DEFAULT_YEAR_START, LATEST_SNAPSHOT};
use crate::core::transform::DerivedGap;

/// Gender gap by year of birth. Snapshot and population changes refetch;
/// year-range changes only re-slice the payload already held.
#[component]
pub fn GenderByDob() -> Element {
    let mut snapshot = use_signal(|| LATEST_SNAPSHOT.to_string());
    let mut population = use_signal(Population::default);
    let property = use_signal(|| PropertyField::DateOfBirth);
    let mut year_start = use_signal(|| DEFAULT_YEAR_START);
    let mut year_end = use_signal(current_year);

    let metrics = use_gap_metrics(snapshot, population, property);
    let toasts = use_toasts();
    let shared_snapshots = use_context::<SharedSnapshots>();

    let derived = use_memo(move || {
        metrics.payload.read().as_ref().map(|payload| {
            let kept = filter_metrics(
                &payload.metrics,
                year_range_filter(year_start(), year_end()),
            );
            DerivedGap::derive(&payload.meta, &kept, PropertyField::DateOfBirth)
        })
    });

    let loading = (metrics.loading)();
    let error = (metrics.error)();
    let data = derived();

    rsx! {
        section { class: "viz-page viz-page--dob",
            header { class: "viz-page__intro",
                h1 { "Gender gap by year of birth" }
                p {
                    "Year of birth of humans with biographical coverage across Wikimedia "
                    "projects, split by gender."
                    HoverTooltip {
                        text: "Each point counts humans born in that year; the year range \
                               filters without refetching.",
                    }
                }
            }

            PopulationToggle {
                value: population(),
                on_change: move |value| population.set(value),
            }

            div { class: "viz-page__body",
                div { class: "viz-page__chart",
                    if let Some(ref d) = data {
                        p { class: "viz-page__timestamp", "All time, as of {d.snapshot_display}" }
                    }
                    if loading {
                        div { class: "viz-page__loading", "Loading…" }
                    }
                    if let Some(message) = error {
                        ErrorPanel { message }
                    }
                    if let Some(ref d) = data {
                        if !d.rows.is_empty() {
                            LineChart { series: d.line.clone(), extrema: d.extrema }
                        }
                    }
                }

                aside { class: "viz-page__controls",
                    div { class: "viz-page__completeness",
                        h2 { "Data completeness" }
                        p { "Share of humans with a known year of birth." }
                        if let Some(ref d) = data {
                            RadialChart { coverage: d.coverage }
                        }
                    }

                    SnapshotSelect {
                        snapshots: shared_snapshots.0(),
                        selected: snapshot(),
                        on_select: move |value| snapshot.set(value),
                    }

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

            LicensingNote {}
            hr {}

            if let Some(ref d) = data {
                GenderTable { columns: d.columns.clone(), rows: d.rows.clone() }
            }
        }
    }
}
