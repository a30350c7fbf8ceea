use dioxus::prelude::*;

use crate::components::{
    ErrorPanel, GenderTable, HoverTooltip, LicensingNote, PopulationToggle, RadialChart,
    SnapshotSelect,
};
use crate::core::fetch::{use_gap_metrics, SharedSnapshots};
use crate::core::filters::{filter_metrics, label_filter};
use crate::core::model::{Population, PropertyField, LATEST_SNAPSHOT};
use crate::core::transform::DerivedGap;

/// Shared scaffold for the table-centric views grouped by a labeled property
/// (country, language). Snapshot and population changes refetch; the search
/// box only re-slices the held payload.
#[component]
pub fn LabeledGapView(
    field: PropertyField,
    title: String,
    blurb: String,
    tooltip: String,
    coverage_blurb: String,
    search_placeholder: String,
) -> Element {
    let mut snapshot = use_signal(|| LATEST_SNAPSHOT.to_string());
    let mut population = use_signal(Population::default);
    let property = use_signal(|| field);
    let mut search = use_signal(String::new);

    let metrics = use_gap_metrics(snapshot, population, property);
    let shared_snapshots = use_context::<SharedSnapshots>();

    let derived = use_memo(move || {
        metrics.payload.read().as_ref().map(|payload| {
            let kept = filter_metrics(&payload.metrics, label_filter(property(), &search()));
            DerivedGap::derive(&payload.meta, &kept, property())
        })
    });

    let loading = (metrics.loading)();
    let error = (metrics.error)();
    let data = derived();

    rsx! {
        section { class: "viz-page viz-page--labeled",
            header { class: "viz-page__intro",
                h1 { "{title}" }
                p {
                    "{blurb}"
                    HoverTooltip { text: tooltip }
                }
            }

            PopulationToggle {
                value: population(),
                on_change: move |value| population.set(value),
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

                    input {
                        class: "viz-page__search",
                        r#type: "search",
                        placeholder: "{search_placeholder}",
                        value: "{search()}",
                        oninput: move |evt| search.set(evt.value()),
                    }

                    if let Some(ref d) = data {
                        GenderTable { columns: d.columns.clone(), rows: d.rows.clone() }
                    }
                }

                aside { class: "viz-page__controls",
                    div { class: "viz-page__completeness",
                        h2 { "Data completeness" }
                        p { "{coverage_blurb}" }
                        if let Some(ref d) = data {
                            RadialChart { coverage: d.coverage }
                        }
                    }

                    SnapshotSelect {
                        snapshots: shared_snapshots.0(),
                        selected: snapshot(),
                        on_select: move |value| snapshot.set(value),
                    }
                }
            }

            LicensingNote {}
        }
    }
}
