use dioxus::prelude::*;

/// Small "?" badge with an explanatory hover text.
#[component]
pub fn HoverTooltip(text: String) -> Element {
    rsx! {
        span { class: "hover-tooltip", title: "{text}", aria_label: "{text}", "?" }
    }
}
