use dioxus::prelude::*;
use dioxus_logger::tracing::{error, Level};

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{AppFooter, AppNavbar, Toast, ToastHost};
use ui::core::api::{ApiClient, DEFAULT_API_BASE};
use ui::core::fetch::SharedSnapshots;
use ui::core::format::parse_snapshot_date;
use ui::views::{About, AdvancedSearch, GenderByCountry, GenderByDob, GenderByLanguage, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/combine-search")]
    AdvancedSearch {},
    #[route("/gender-by-country")]
    GenderByCountry {},
    #[route("/gender-by-dob")]
    GenderByDob {},
    #[route("/gender-by-language")]
    GenderByLanguage {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_by_dob(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::GenderByDob {},
        "{label}"
    })
}
fn nav_by_country(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::GenderByCountry {},
        "{label}"
    })
}
fn nav_by_language(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::GenderByLanguage {},
        "{label}"
    })
}
fn nav_advanced(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::AdvancedSearch {},
        "{label}"
    })
}
fn nav_about(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::About {},
        "{label}"
    })
}

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    register_nav(NavBuilder {
        home: nav_home,
        by_dob: nav_by_dob,
        by_country: nav_by_country,
        by_language: nav_by_language,
        advanced: nav_advanced,
        about: nav_about,
    });

    // The one API client instance the whole tree shares, constructed here and
    // passed down explicitly through context.
    let client = use_context_provider(|| ApiClient::new(DEFAULT_API_BASE));
    let shared = use_context_provider(|| SharedSnapshots(Signal::new(None)));
    use_context_provider(|| Signal::new(Vec::<Toast>::new()));

    // One-time snapshot-list fetch; views show a placeholder until it lands.
    use_future(move || {
        let client = client.clone();
        let mut shared = shared;
        async move {
            match client.snapshots().await {
                Ok(mut list) => {
                    // Newest first, so index 0 is the "(latest)" entry.
                    list.sort_by(|a, b| {
                        parse_snapshot_date(&b.date).cmp(&parse_snapshot_date(&a.date))
                    });
                    shared.0.set(Some(list));
                }
                Err(err) => {
                    error!(%err, "snapshot list fetch failed");
                }
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Web-specific layout: navbar, toast overlay, routed content, footer.
#[component]
fn WebShell() -> Element {
    rsx! {
        AppNavbar {}
        ToastHost {}
        main { class: "page-shell",
            Outlet::<Route> {}
        }
        AppFooter {}
    }
}
