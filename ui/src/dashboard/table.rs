use dioxus::prelude::*;

use crate::core::format::{format_count, format_percent};
use crate::core::table::{self, SortDirection, SortField, SortState, USER_ROWS};
use crate::dashboard::use_filters;
use crate::t;

const COLUMNS: [SortField; 5] = [
    SortField::Name,
    SortField::Platform,
    SortField::Clicks,
    SortField::Sales,
    SortField::Conversion,
];

/// Per-user performance table. Local search and sort state live here; the
/// header's global search is read from the shared filters.
#[component]
pub fn PerformanceTable() -> Element {
    let filters = use_filters();
    let mut local_search = use_signal(String::new);
    let mut sort = use_signal(SortState::default);

    let global = filters.read().global_search().to_string();
    let rows = table::view(&USER_ROWS, &local_search(), &global, sort());
    let placeholder = t!("table-search-placeholder");

    rsx! {
        section { class: "table-card",
            div { class: "table-card__header",
                h2 { class: "table-card__title", {t!("table-title")} }
                input {
                    class: "input table-card__search",
                    r#type: "search",
                    placeholder: "{placeholder}",
                    value: "{local_search}",
                    oninput: move |evt| local_search.set(evt.value()),
                }
            }

            table { class: "data-table",
                thead {
                    tr {
                        for field in COLUMNS {
                            th {
                                key: "{field.label()}",
                                class: "data-table__heading",
                                button {
                                    r#type: "button",
                                    class: "data-table__sort",
                                    onclick: move |_| sort.with_mut(|state| state.toggle(field)),
                                    "{field.label()}"
                                    span { class: "data-table__indicator", "{indicator(sort().indicator(field))}" }
                                }
                            }
                        }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr {
                            td { class: "data-table__empty", colspan: "5", {t!("table-empty")} }
                        }
                    }
                    for row in rows {
                        tr { key: "{row.id}",
                            td {
                                div { class: "data-table__user",
                                    span { class: "avatar", "{row.avatar}" }
                                    span { "{row.name}" }
                                }
                            }
                            td {
                                span { class: "badge badge--{row.platform.to_lowercase()}", "{row.platform}" }
                            }
                            td { class: "data-table__num", "{format_count(u64::from(row.clicks))}" }
                            td { class: "data-table__num", "{format_count(u64::from(row.sales))}" }
                            td { class: "data-table__num", "{format_percent(row.conversion)}" }
                        }
                    }
                }
            }
        }
    }
}

fn indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Ascending) => "↑",
        Some(SortDirection::Descending) => "↓",
        None => "",
    }
}
