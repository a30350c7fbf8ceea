use dioxus::prelude::*;

/// Per-view error banner. Previously fetched numbers stay on screen behind
/// it; a failed refetch never clears held data.
#[component]
pub fn ErrorPanel(message: String) -> Element {
    rsx! {
        div { class: "error-panel", role: "alert",
            strong { "Something went wrong fetching statistics." }
            p { class: "error-panel__detail", "{message}" }
            p { "Any numbers shown below are from an earlier request." }
        }
    }
}
