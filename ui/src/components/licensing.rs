use dioxus::prelude::*;

#[component]
pub fn LicensingNote() -> Element {
    rsx! {
        p { class: "licensing",
            "Statistics are derived from Wikidata, whose structured data is published under "
            a {
                href: "https://creativecommons.org/publicdomain/zero/1.0/",
                "CC0 1.0"
            }
            ". Charts and tables on this page may be reused under the same terms."
        }
    }
}
