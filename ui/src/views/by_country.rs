use dioxus::prelude::*;

use super::labeled::LabeledGapView;
use crate::core::model::PropertyField;

#[component]
pub fn GenderByCountry() -> Element {
    rsx! {
        LabeledGapView {
            field: PropertyField::Country,
            title: "Gender gap by country",
            blurb: "Humans with biographical coverage, grouped by their country and \
                    split by gender.",
            tooltip: "Country comes from the citizenship recorded for each human; \
                      people without one are not counted here.",
            coverage_blurb: "Share of humans with a known country.",
            search_placeholder: "Filter countries…",
        }
    }
}
