use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { "Genderscope" }
            p { class: "page-home__tagline",
                "How well does open knowledge represent everyone?"
            }
            p {
                "Genderscope tracks gender representation across the biographical entries "
                "of a public knowledge graph. Every statistic is computed ahead of time "
                "from dated snapshots, so numbers are comparable over time."
            }

            ul { class: "page-home__features",
                li { "Follow the gap across centuries of birth years." }
                li { "Compare representation between countries." }
                li { "See which content languages cover whom." }
                li { "Combine snapshot, population, and property in one search." }
            }

            p { class: "page-home__cta",
                "Pick a view from the navigation above to start exploring."
            }
        }
    }
}
