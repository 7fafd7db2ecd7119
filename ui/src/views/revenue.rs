use dioxus::prelude::*;

use crate::core::breakdowns::{REVENUE_BY_PLATFORM, REVENUE_METRICS, REVENUE_TRENDS};
use crate::core::format::format_currency;
use crate::dashboard::{use_derived_view, MetricCard, PlatformBarChart, RevenueLineChart, ShareList};
use crate::t;

#[component]
pub fn Revenue() -> Element {
    let view = use_derived_view()();

    rsx! {
        section { class: "page page-revenue",
            div { class: "page__header",
                h1 { {t!("revenue-title")} }
                p { class: "page__subtitle", {t!("revenue-subtitle")} }
            }

            section { class: "metric-grid",
                for metric in REVENUE_METRICS {
                    MetricCard { key: "{metric.title}", metric }
                }
            }

            div { class: "page__charts page__charts--even",
                RevenueLineChart { points: view.chart.clone() }
                PlatformBarChart { rows: view.platforms.clone() }
            }

            div { class: "page__charts",
                ShareList {
                    title: t!("revenue-platform-title"),
                    subtitle: t!("revenue-platform-subtitle"),
                    rows: REVENUE_BY_PLATFORM.to_vec(),
                }
                section { class: "chart-card",
                    div { class: "chart-card__header",
                        h2 { class: "chart-card__title", {t!("revenue-trends-title")} }
                    }
                    ul { class: "trend-list",
                        for trend in REVENUE_TRENDS {
                            li { key: "{trend.month}", class: "trend-list__item",
                                div {
                                    strong { "{trend.month}" }
                                    span { class: "trend-list__amount", "{format_currency(trend.revenue)}" }
                                }
                                span { class: "trend-list__growth", "{trend.growth}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
