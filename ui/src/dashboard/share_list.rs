use dioxus::prelude::*;

use crate::core::breakdowns::ShareRow;
use crate::core::format::format_currency;

#[component]
pub fn ShareList(title: String, subtitle: String, rows: Vec<ShareRow>) -> Element {
    rsx! {
        section { class: "chart-card share-list",
            div { class: "chart-card__header",
                h2 { class: "chart-card__title", "{title}" }
                span { class: "chart-card__meta", "{subtitle}" }
            }
            ul { class: "share-list__rows",
                for row in rows {
                    li { key: "{row.label}", class: "share-list__row",
                        div { class: "share-list__labels",
                            span { class: "share-list__label", "{row.label}" }
                            if let Some(amount) = row.amount {
                                span { class: "share-list__amount", "{format_currency(amount)}" }
                            }
                            span { class: "share-list__pct", "{row.percentage}%" }
                        }
                        div { class: "progress",
                            div { class: "progress__fill", style: "width: {row.percentage}%" }
                        }
                    }
                }
            }
        }
    }
}
