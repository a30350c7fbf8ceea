use dioxus::prelude::*;

use super::labeled::LabeledGapView;
use crate::core::model::PropertyField;

#[component]
pub fn GenderByLanguage() -> Element {
    rsx! {
        LabeledGapView {
            field: PropertyField::Language,
            title: "Gender gap by language",
            blurb: "Humans with biographical coverage, grouped by the language of the \
                    project that covers them and split by gender.",
            tooltip: "A human covered in several languages counts once per language.",
            coverage_blurb: "Share of humans attributable to a content language.",
            search_placeholder: "Filter languages…",
        }
    }
}
