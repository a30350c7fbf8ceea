use dioxus::prelude::*;

use crate::core::model::Population;

/// Switch between the two population definitions. Changing this re-issues the
/// metrics request.
#[component]
pub fn PopulationToggle(value: Population, on_change: EventHandler<Population>) -> Element {
    rsx! {
        div { class: "population-toggle", role: "group", aria_label: "Population filter",
            for option in [Population::GteOneSitelink, Population::AllWikidata] {
                button {
                    r#type: "button",
                    class: format!(
                        "population-toggle__option{}",
                        if option == value { " population-toggle__option--active" } else { "" }
                    ),
                    onclick: move |_| on_change.call(option),
                    "{option.display_label()}"
                }
            }
        }
    }
}
