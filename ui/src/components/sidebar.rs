use crate::core::platform::Platform;
use crate::i18n;
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

const SIDEBAR_CSS: Asset = asset!("/assets/styling/sidebar.css");
const SIDEBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/sidebar.css"
));

/// Route links supplied by the platform crate, so `ui` never needs to know
/// each platform's `Route` enum.
///
/// Each function receives the localized label and must return a `Link`
/// (class `sidebar__link`) whose only child is that label. Register once with
/// [`register_nav`] before the router renders:
///
/// ```ignore
/// register_nav(NavBuilder {
///     dashboard: |label| rsx!( Link { class: "sidebar__link", to: Route::Dashboard {}, "{label}" } ),
///     analytics: |label| rsx!( Link { class: "sidebar__link", to: Route::Analytics {}, "{label}" } ),
///     revenue: |label| rsx!( Link { class: "sidebar__link", to: Route::Revenue {}, "{label}" } ),
///     campaigns: |label| rsx!( Link { class: "sidebar__link", to: Route::Campaigns {}, "{label}" } ),
/// });
/// ```
pub struct NavBuilder {
    pub dashboard: fn(label: &str) -> Element,
    pub analytics: fn(label: &str) -> Element,
    pub revenue: fn(label: &str) -> Element,
    pub campaigns: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

/// Language the picker shows on mount: the shared code if set, else the fallback.
fn initial_language(shared: Option<String>) -> String {
    shared
        .filter(|code| !code.is_empty())
        .unwrap_or_else(|| i18n::FALLBACK_LANGUAGE.to_string())
}

#[component]
pub fn AppSidebar(children: Element) -> Element {
    i18n::init();

    // Global language code, when the platform provides one. The shells remount
    // the sidebar on a language change, so the picker must start from it.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let mut current_lang = use_signal(|| initial_language(lang_code_ctx.map(|c| c())));
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    tracing::debug!(lang = %lang_marker, "sidebar render");

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!(lang = %val, "language switch failed: {err}"),
        }
    };

    let nav_links = NAV_BUILDER.get().map(|b| {
        (
            (b.dashboard)(&t!("nav-dashboard")),
            (b.analytics)(&t!("nav-analytics")),
            (b.revenue)(&t!("nav-revenue")),
            (b.campaigns)(&t!("nav-campaigns")),
        )
    });

    let tagline = t!("tagline");
    let platform = Platform::current().label();

    rsx! {
        document::Link { rel: "stylesheet", href: SIDEBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{SIDEBAR_CSS_INLINE}" }
        }

        aside { id: "sidebar", class: "sidebar",
            div { style: "display:none", "{lang_marker}" }
            div { class: "sidebar__brand",
                span { class: "sidebar__brand-mark", "ADmyBRAND" }
                span { class: "sidebar__brand-subtitle", "{tagline}" }
            }

            if let Some((dashboard, analytics, revenue, campaigns)) = nav_links {
                nav { class: "sidebar__links",
                    {dashboard}
                    {analytics}
                    {revenue}
                    {campaigns}
                }
            } else {
                nav { class: "sidebar__links", {children} }
            }

            div { class: "sidebar__footer",
                if show_switcher {
                    div { class: "sidebar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            for code in langs() {
                                option { key: "{code}", value: "{code}", selected: code == current_lang(), "{code}" }
                            }
                        }
                    }
                }
                span { class: "sidebar__platform", "{platform}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picker_starts_from_the_shared_language() {
        assert_eq!(initial_language(Some("es-ES".into())), "es-ES");
    }

    #[test]
    fn picker_falls_back_without_a_shared_language() {
        assert_eq!(initial_language(None), "en-US");
        assert_eq!(initial_language(Some(String::new())), "en-US");
    }
}
