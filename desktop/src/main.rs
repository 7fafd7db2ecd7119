#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;
use tracing_subscriber::EnvFilter;

use ui::components::{register_nav, AppSidebar, NavBuilder};
use ui::dashboard::{use_filter_root, AppHeader};
use ui::views::{Analytics, Campaigns, Dashboard, NotFound, Revenue};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
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

// Shared theme from ui/assets/theme/main.css, embedded so packaged builds need no asset dir.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // dioxus may already have installed a subscriber; keep whichever came first.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

#[cfg(feature = "desktop")]
fn main() {
    init_tracing();
    let resource_dir = resolve_resource_dir();
    tracing::info!(dir = %resource_dir.display(), "launching desktop shell");

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!(
                            "ADmyBRAND Insights – v{}",
                            env!("CARGO_PKG_VERSION")
                        ))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    init_tracing();
    LaunchBuilder::server().launch(App);
}

fn nav_dashboard(label: &str) -> Element {
    rsx!(Link { class: "sidebar__link", active_class: "sidebar__link--active", to: Route::Dashboard {}, "{label}" })
}
fn nav_analytics(label: &str) -> Element {
    rsx!(Link { class: "sidebar__link", active_class: "sidebar__link--active", to: Route::Analytics {}, "{label}" })
}
fn nav_revenue(label: &str) -> Element {
    rsx!(Link { class: "sidebar__link", active_class: "sidebar__link--active", to: Route::Revenue {}, "{label}" })
}
fn nav_campaigns(label: &str) -> Element {
    rsx!(Link { class: "sidebar__link", active_class: "sidebar__link--active", to: Route::Campaigns {}, "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Language code the sidebar's switcher writes to.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    // Filters live above the router so they survive page navigation.
    use_filter_root();

    register_nav(NavBuilder {
        dashboard: nav_dashboard,
        analytics: nav_analytics,
        revenue: nav_revenue,
        campaigns: nav_campaigns,
    });

    // Some window managers ignore the builder's maximize hint.
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed on the language so every localized string re-renders on change.
        div {
            key: "{lang_code()}",
            div { style: "display:none", "{lang_code()}" }
            Router::<Route> { }
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Desktop layout wrapping the shared sidebar and header around the routed page.
#[component]
fn DesktopShell() -> Element {
    rsx! {
        div { class: "app-shell",
            AppSidebar { }
            div { class: "app-main",
                AppHeader { }
                main { class: "app-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
