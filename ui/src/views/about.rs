use dioxus::prelude::*;

use crate::components::LicensingNote;

#[component]
pub fn About() -> Element {
    rsx! {
        section { class: "page page-about",
            h1 { "About Genderscope" }

            p {
                "Genderscope visualizes gender representation in the biographical entries "
                "of a public knowledge graph. The underlying statistics are computed by a "
                "remote service from dated dataset snapshots; this site only slices and "
                "renders them."
            }

            h2 { "The gap metric" }
            p {
                "For each grouping value (a year of birth, a country, a language) the "
                "service reports how many humans of each gender are covered. The dashboard "
                "distinguishes women and men explicitly and aggregates every other "
                "recorded gender into a single category; that choice is presentational, "
                "the full per-identifier counts are in every response."
            }

            h2 { "Populations" }
            p {
                "Counts can be restricted to humans with at least one cross-project link "
                "(typically a Wikipedia biography article) or extended to every human "
                "entity in the graph. The first is the default, since it approximates "
                "\u{201c}has an article somewhere\u{201d}."
            }

            h2 { "Completeness" }
            p {
                "Not every entry records a year of birth, a country, or a language. The "
                "donut next to each view shows the share of humans for which the grouping "
                "property is known; bear it in mind when reading absolute numbers."
            }

            h2 { "Snapshots" }
            p {
                "Statistics are recomputed for each dataset snapshot. The selector in each "
                "view switches between snapshots; \u{201c}latest\u{201d} always follows "
                "the most recent one."
            }

            LicensingNote {}
        }
    }
}
