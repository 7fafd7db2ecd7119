use dioxus::prelude::*;

use ui::components::{register_nav, AppSidebar, NavBuilder};
use ui::dashboard::{use_filter_root, AppHeader};
use ui::views::{Analytics, Campaigns, Dashboard, NotFound, Revenue};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
        #[route("/")]
        Dashboard {},
        #[route("/analytics")]
        Analytics {},
        #[route("/revenue")]
        Revenue {},
        #[route("/campaigns")]
        Campaigns {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn nav_dashboard(label: &str) -> Element {
    rsx!(Link {
        class: "sidebar__link",
        active_class: "sidebar__link--active",
        to: Route::Dashboard {},
        "{label}"
    })
}
fn nav_analytics(label: &str) -> Element {
    rsx!(Link {
        class: "sidebar__link",
        active_class: "sidebar__link--active",
        to: Route::Analytics {},
        "{label}"
    })
}
fn nav_revenue(label: &str) -> Element {
    rsx!(Link {
        class: "sidebar__link",
        active_class: "sidebar__link--active",
        to: Route::Revenue {},
        "{label}"
    })
}
fn nav_campaigns(label: &str) -> Element {
    rsx!(Link {
        class: "sidebar__link",
        active_class: "sidebar__link--active",
        to: Route::Campaigns {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder {
        dashboard: nav_dashboard,
        analytics: nav_analytics,
        revenue: nav_revenue,
        campaigns: nav_campaigns,
    });

    // Shared dashboard filters and the language code the sidebar updates.
    use_filter_root();
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    use_hook(|| tracing::info!(version = env!("CARGO_PKG_VERSION"), "web shell started"));

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        div { key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// Web layout: sidebar, header and the routed page.
#[component]
fn WebShell() -> Element {
    rsx! {
        div { class: "app-shell",
            AppSidebar {}
            div { class: "app-main",
                AppHeader {}
                main { class: "app-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
