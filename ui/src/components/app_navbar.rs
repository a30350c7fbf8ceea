use dioxus::prelude::*;
use once_cell::sync::OnceCell;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Platforms register a `NavBuilder` whose closures return fully constructed
/// `Link` elements, so this crate never needs to know the platform's `Route`
/// enum. Each closure receives the label to render inside the link.
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub by_dob: fn(label: &str) -> Element,
    pub by_country: fn(label: &str) -> Element,
    pub by_language: fn(label: &str) -> Element,
    pub advanced: fn(label: &str) -> Element,
    pub about: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

/// Call once before rendering the root, e.g. at the top of `App()`.
pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar() -> Element {
    let links = NAV_BUILDER.get().map(|b| {
        let home = (b.home)("Home");
        let by_dob = (b.by_dob)("By year of birth");
        let by_country = (b.by_country)("By country");
        let by_language = (b.by_language)("By language");
        let advanced = (b.advanced)("Advanced search");
        let about = (b.about)("About");

        rsx! {
            nav { class: "navbar__links",
                {home}
                {by_dob}
                {by_country}
                {by_language}
                {advanced}
                {about}
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-mark", "Genderscope" }
                    }
                    span { class: "navbar__brand-subtitle",
                        "gender representation in open knowledge"
                    }
                }

                if let Some(nav) = links {
                    {nav}
                }
            }
        }
    }
}
