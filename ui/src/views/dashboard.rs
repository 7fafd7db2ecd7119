use dioxus::prelude::*;

use crate::dashboard::{
    use_derived_view, MetricGrid, PerformanceTable, PlatformBarChart, RevenueLineChart,
    TrafficDonutChart,
};
use crate::t;

#[component]
pub fn Dashboard() -> Element {
    let view = use_derived_view();
    let view = view();

    tracing::debug!(
        period = %view.period,
        platforms = view.platforms.len(),
        "dashboard render"
    );

    rsx! {
        section { class: "page page-dashboard",
            div { class: "page__header",
                h1 { {t!("dashboard-title")} }
                p { class: "page__subtitle", {t!("dashboard-subtitle")} }
            }

            MetricGrid { period: view.period, metrics: view.metrics.clone() }

            div { class: "page__charts",
                div { class: "page__charts-main",
                    RevenueLineChart { points: view.chart.clone() }
                    PlatformBarChart { rows: view.platforms.clone() }
                }
                TrafficDonutChart { slices: view.donut.clone() }
            }

            PerformanceTable {}
        }
    }
}
