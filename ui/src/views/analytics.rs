use dioxus::prelude::*;

use crate::core::breakdowns::{ANALYTICS_METRICS, TRAFFIC_SOURCES};
use crate::dashboard::{
    use_derived_view, MetricCard, PlatformBarChart, RevenueLineChart, ShareList,
    TrafficDonutChart,
};
use crate::t;

#[component]
pub fn Analytics() -> Element {
    let view = use_derived_view()();

    rsx! {
        section { class: "page page-analytics",
            div { class: "page__header",
                h1 { {t!("analytics-title")} }
                p { class: "page__subtitle", {t!("analytics-subtitle")} }
            }

            section { class: "metric-grid",
                for metric in ANALYTICS_METRICS {
                    MetricCard { key: "{metric.title}", metric }
                }
            }

            div { class: "page__charts page__charts--even",
                RevenueLineChart { points: view.chart.clone() }
                PlatformBarChart { rows: view.platforms.clone() }
            }

            div { class: "page__charts",
                ShareList {
                    title: t!("analytics-traffic-title"),
                    subtitle: t!("analytics-traffic-subtitle"),
                    rows: TRAFFIC_SOURCES.to_vec(),
                }
                TrafficDonutChart { slices: view.donut.clone() }
            }
        }
    }
}
