use dioxus::prelude::*;

use crate::core::dataset::PLATFORMS;
use crate::core::Period;
use crate::dashboard::{use_filters, ExportMenu, NotificationBell};
use crate::t;

/// Top bar: global search, period picker, platform filter, exports and
/// notifications. Every control writes through `FilterState`'s methods.
#[component]
pub fn AppHeader() -> Element {
    let mut filters = use_filters();
    let mut platforms_open = use_signal(|| false);

    let current = filters.read().clone();
    let selected_count = current.platforms().len();
    let search_placeholder = t!("header-search-placeholder");

    rsx! {
        header { class: "app-header",
            div { class: "app-header__search",
                input {
                    class: "input",
                    r#type: "search",
                    placeholder: "{search_placeholder}",
                    value: "{current.global_search()}",
                    oninput: move |evt| filters.write().set_global_search_term(evt.value()),
                }
            }

            div { class: "app-header__controls",
                label { class: "visually-hidden", r#for: "period-select", {t!("header-period-label")} }
                select {
                    id: "period-select",
                    class: "select",
                    value: "{current.period()}",
                    onchange: move |evt| {
                        filters.write().set_period_label(&evt.value());
                    },
                    for period in Period::ALL {
                        option {
                            key: "{period.slug()}",
                            value: "{period}",
                            selected: period == current.period(),
                            "{period}"
                        }
                    }
                }

                div { class: "filter-popover",
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        aria_expanded: "{platforms_open}",
                        onclick: move |_| platforms_open.toggle(),
                        {t!("header-platforms-label")}
                        span { class: "filter-popover__count", "{selected_count}/{PLATFORMS.len()}" }
                    }
                    if platforms_open() {
                        div { class: "filter-popover__panel",
                            for platform in PLATFORMS {
                                label { key: "{platform}", class: "filter-popover__option",
                                    input {
                                        r#type: "checkbox",
                                        checked: current.platforms().contains(platform),
                                        onchange: move |_| filters.write().toggle_platform(platform),
                                    }
                                    "{platform}"
                                }
                            }
                            button {
                                r#type: "button",
                                class: "button button--ghost filter-popover__reset",
                                onclick: move |_| filters.write().reset(),
                                {t!("header-reset-filters")}
                            }
                        }
                    }
                }

                ExportMenu {}
                NotificationBell {}
            }
        }
    }
}
