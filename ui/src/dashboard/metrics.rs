use dioxus::prelude::*;

use crate::core::animation::CountUp;
use crate::core::dataset::{ChangeType, Metric};
use crate::core::{timing, Period};

/// Headline cards for the current period. Cards are keyed by period so a
/// period change remounts them and restarts their count-up.
#[component]
pub fn MetricGrid(period: Period, metrics: Vec<Metric>) -> Element {
    let slug = period.slug();

    rsx! {
        section { class: "metric-grid",
            for metric in metrics {
                MetricCard { key: "{slug}-{metric.title}", metric }
            }
        }
    }
}

#[component]
pub fn MetricCard(metric: Metric) -> Element {
    let value_anim = CountUp::value(metric.value);
    let change_anim = CountUp::change(metric.change);
    let mut value_text = use_signal(|| value_anim.initial_frame());
    let mut change_text = use_signal(|| change_anim.initial_frame());

    // Both tasks belong to this scope and are dropped with it on remount.
    use_future(move || {
        let frames = CountUp::value(metric.value);
        async move {
            let interval = frames.interval_ms();
            for frame in frames {
                timing::sleep_ms(interval).await;
                value_text.set(frame);
            }
        }
    });
    use_future(move || {
        let frames = CountUp::change(metric.change);
        async move {
            let interval = frames.interval_ms();
            for frame in frames {
                timing::sleep_ms(interval).await;
                change_text.set(frame);
            }
        }
    });

    let (tone, arrow) = match metric.change_type {
        ChangeType::Positive => ("metric-card__change--positive", "▲"),
        ChangeType::Negative => ("metric-card__change--negative", "▼"),
    };

    rsx! {
        article { class: "metric-card",
            span { class: "metric-card__title", "{metric.title}" }
            strong { class: "metric-card__value", "{value_text}" }
            span { class: "metric-card__change {tone}",
                span { aria_hidden: "true", "{arrow} " }
                "{change_text}"
            }
        }
    }
}
