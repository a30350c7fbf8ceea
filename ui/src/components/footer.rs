use dioxus::prelude::*;

#[component]
pub fn AppFooter() -> Element {
    rsx! {
        footer { class: "footer",
            span { "Genderscope: gender representation in open knowledge." }
            span { class: "footer__hint",
                "Counts come from precomputed snapshots; coverage varies by property."
            }
        }
    }
}
