use dioxus::prelude::*;

use crate::core::model::{Snapshot, LATEST_SNAPSHOT};

/// Dropdown over the shared snapshot list. While the list is still being
/// fetched the selector is replaced by a placeholder, not an error. The
/// newest snapshot is listed first and maps to the `latest` sentinel.
#[component]
pub fn SnapshotSelect(
    snapshots: Option<Vec<Snapshot>>,
    selected: String,
    on_select: EventHandler<String>,
) -> Element {
    let Some(list) = snapshots else {
        return rsx! {
            div { class: "snapshot-select snapshot-select--pending", "snapshots loading" }
        };
    };

    let options: Vec<(u64, String, String)> = list
        .iter()
        .enumerate()
        .map(|(index, snapshot)| {
            if index == 0 {
                (
                    snapshot.id,
                    LATEST_SNAPSHOT.to_string(),
                    format!("{} (latest)", snapshot.date),
                )
            } else {
                (snapshot.id, snapshot.date.clone(), snapshot.date.clone())
            }
        })
        .collect();

    rsx! {
        div { class: "snapshot-select",
            label { class: "snapshot-select__label", r#for: "snapshot-select", "Snapshot" }
            select {
                id: "snapshot-select",
                value: "{selected}",
                onchange: move |evt| on_select.call(evt.value()),
                for (id, value, label) in options.iter() {
                    option { key: "{id}", value: "{value}", "{label}" }
                }
            }
        }
    }
}
