//! Inline SVG charts. Geometry is computed here so the markup stays dumb.

use std::f64::consts::PI;

use dioxus::prelude::*;

use crate::core::dataset::{ChartPoint, DonutSlice, PlatformRow};
use crate::core::format::{format_count, format_currency, format_currency_compact};
use crate::t;

const CHART_WIDTH: f64 = 640.0;
const CHART_HEIGHT: f64 = 240.0;
const PAD_LEFT: f64 = 56.0;
const PAD_BOTTOM: f64 = 28.0;
const PAD_TOP: f64 = 12.0;

#[component]
pub fn RevenueLineChart(points: Vec<ChartPoint>) -> Element {
    let revenue: Vec<f64> = points.iter().map(|p| p.revenue).collect();
    let users: Vec<f64> = points.iter().map(|p| f64::from(p.users)).collect();
    let revenue_path = polyline(&revenue, CHART_WIDTH, CHART_HEIGHT);
    let users_path = polyline(&users, CHART_WIDTH, CHART_HEIGHT);
    let revenue_marker = lone_marker(&revenue, CHART_WIDTH, CHART_HEIGHT);
    let users_marker = lone_marker(&users, CHART_WIDTH, CHART_HEIGHT);
    let peak = revenue.iter().copied().fold(0.0_f64, f64::max);
    let axis_top = format_currency_compact(peak);
    let labels = x_labels(&points, CHART_WIDTH);
    let last = points.last().cloned();
    let baseline = CHART_HEIGHT - PAD_BOTTOM;
    let tick_y = CHART_HEIGHT - 8.0;
    let top_tick_y = PAD_TOP + 4.0;

    rsx! {
        section { class: "chart-card",
            div { class: "chart-card__header",
                h2 { class: "chart-card__title", {t!("chart-revenue-title")} }
                if let Some(last) = last {
                    span { class: "chart-card__meta",
                        "{last.label}: {format_currency(last.revenue)} · {format_count(u64::from(last.users))}"
                    }
                }
            }
            if points.is_empty() {
                p { class: "chart-card__placeholder", {t!("chart-empty")} }
            } else {
                svg {
                    class: "chart chart--line",
                    view_box: "0 0 {CHART_WIDTH} {CHART_HEIGHT}",
                    role: "img",
                    line {
                        class: "chart__axis",
                        x1: "{PAD_LEFT}",
                        y1: "{baseline}",
                        x2: "{CHART_WIDTH}",
                        y2: "{baseline}",
                    }
                    text { class: "chart__tick", x: "4", y: "{top_tick_y}", "{axis_top}" }
                    text { class: "chart__tick", x: "4", y: "{baseline}", "$0" }
                    polyline { class: "chart__series chart__series--revenue", points: "{revenue_path}" }
                    polyline { class: "chart__series chart__series--users", points: "{users_path}" }
                    if let Some((cx, cy)) = revenue_marker {
                        circle { class: "chart__marker chart__marker--revenue", cx: "{cx:.1}", cy: "{cy:.1}", r: "5" }
                    }
                    if let Some((cx, cy)) = users_marker {
                        circle { class: "chart__marker chart__marker--users", cx: "{cx:.1}", cy: "{cy:.1}", r: "5" }
                    }
                    for (x, label) in labels {
                        text {
                            class: "chart__tick",
                            x: "{x:.1}",
                            y: "{tick_y}",
                            text_anchor: "middle",
                            "{label}"
                        }
                    }
                }
                div { class: "chart-card__legend",
                    span { class: "chart-legend chart-legend--revenue", {t!("chart-legend-revenue")} }
                    span { class: "chart-legend chart-legend--users", {t!("chart-legend-users")} }
                }
            }
        }
    }
}

#[component]
pub fn PlatformBarChart(rows: Vec<PlatformRow>) -> Element {
    let bars = bar_layout(&rows, CHART_WIDTH, CHART_HEIGHT);
    let tick_y = CHART_HEIGHT - 8.0;

    rsx! {
        section { class: "chart-card",
            div { class: "chart-card__header",
                h2 { class: "chart-card__title", {t!("chart-platforms-title")} }
            }
            if bars.is_empty() {
                p { class: "chart-card__placeholder", {t!("chart-platforms-empty")} }
            } else {
                svg {
                    class: "chart chart--bars",
                    view_box: "0 0 {CHART_WIDTH} {CHART_HEIGHT}",
                    role: "img",
                    for bar in bars {
                        g { key: "{bar.platform}",
                            rect {
                                class: "chart__bar chart__bar--clicks",
                                x: "{bar.x:.1}",
                                y: "{bar.clicks_y:.1}",
                                width: "{bar.width:.1}",
                                height: "{bar.clicks_h:.1}",
                            }
                            rect {
                                class: "chart__bar chart__bar--sales",
                                x: "{bar.sales_x:.1}",
                                y: "{bar.sales_y:.1}",
                                width: "{bar.width:.1}",
                                height: "{bar.sales_h:.1}",
                            }
                            text {
                                class: "chart__tick",
                                x: "{bar.sales_x:.1}",
                                y: "{tick_y}",
                                text_anchor: "middle",
                                "{bar.platform}"
                            }
                        }
                    }
                }
                div { class: "chart-card__legend",
                    span { class: "chart-legend chart-legend--clicks", {t!("chart-legend-clicks")} }
                    span { class: "chart-legend chart-legend--sales", {t!("chart-legend-sales")} }
                }
            }
        }
    }
}

#[component]
pub fn TrafficDonutChart(slices: Vec<DonutSlice>) -> Element {
    let arcs = donut_arcs(&slices, DONUT_RADIUS);

    rsx! {
        section { class: "chart-card chart-card--donut",
            div { class: "chart-card__header",
                h2 { class: "chart-card__title", {t!("chart-share-title")} }
            }
            svg {
                class: "chart chart--donut",
                view_box: "0 0 200 200",
                role: "img",
                for arc in arcs.iter() {
                    circle {
                        key: "{arc.name}",
                        class: "chart__slice",
                        cx: "100",
                        cy: "100",
                        r: "{DONUT_RADIUS}",
                        style: "stroke: var({arc.color})",
                        stroke_dasharray: "{arc.length:.2} {arc.gap:.2}",
                        stroke_dashoffset: "{arc.offset:.2}",
                        transform: "rotate(-90 100 100)",
                    }
                }
            }
            ul { class: "chart-card__legend chart-card__legend--stacked",
                for slice in slices {
                    li { key: "{slice.name}", class: "chart-legend",
                        span { class: "chart-legend__swatch", style: "background: var({slice.color})" }
                        "{slice.name} · {slice.value}%"
                    }
                }
            }
        }
    }
}

const DONUT_RADIUS: f64 = 70.0;

/// Points scaled into the plot area, zero anchored at the baseline.
fn plot_points(values: &[f64], width: f64, height: f64) -> Vec<(f64, f64)> {
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    let plot_w = width - PAD_LEFT;
    let plot_h = height - PAD_TOP - PAD_BOTTOM;
    let step = if values.len() > 1 {
        plot_w / (values.len() - 1) as f64
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(idx, value)| {
            let x = PAD_LEFT + step * idx as f64;
            let ratio = if max > 0.0 { value / max } else { 0.0 };
            (x, PAD_TOP + plot_h * (1.0 - ratio))
        })
        .collect()
}

/// `x,y` pairs for an SVG `polyline`.
fn polyline(values: &[f64], width: f64, height: f64) -> String {
    plot_points(values, width, height)
        .into_iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A one-vertex polyline draws nothing, so single-point series get a marker.
fn lone_marker(values: &[f64], width: f64, height: f64) -> Option<(f64, f64)> {
    if values.len() != 1 {
        return None;
    }
    plot_points(values, width, height).first().copied()
}

fn x_labels(points: &[ChartPoint], width: f64) -> Vec<(f64, &'static str)> {
    let plot_w = width - PAD_LEFT;
    let step = if points.len() > 1 {
        plot_w / (points.len() - 1) as f64
    } else {
        0.0
    };
    points
        .iter()
        .enumerate()
        .map(|(idx, point)| (PAD_LEFT + step * idx as f64, point.label))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
struct Bar {
    platform: &'static str,
    x: f64,
    sales_x: f64,
    width: f64,
    clicks_y: f64,
    clicks_h: f64,
    sales_y: f64,
    sales_h: f64,
}

/// Grouped bars; clicks and sales are scaled independently so sales stay visible.
fn bar_layout(rows: &[PlatformRow], width: f64, height: f64) -> Vec<Bar> {
    if rows.is_empty() {
        return Vec::new();
    }
    let max_clicks = rows.iter().map(|r| r.clicks).max().unwrap_or(0).max(1);
    let max_sales = rows.iter().map(|r| r.sales).max().unwrap_or(0).max(1);
    let plot_h = height - PAD_TOP - PAD_BOTTOM;
    let baseline = height - PAD_BOTTOM;
    let slot = width / rows.len() as f64;
    let bar_w = slot * 0.3;

    rows.iter()
        .enumerate()
        .map(|(idx, row)| {
            let clicks_h = plot_h * f64::from(row.clicks) / f64::from(max_clicks);
            let sales_h = plot_h * f64::from(row.sales) / f64::from(max_sales);
            let x = slot * idx as f64 + slot * 0.2;
            Bar {
                platform: row.platform,
                x,
                sales_x: x + bar_w,
                width: bar_w,
                clicks_y: baseline - clicks_h,
                clicks_h,
                sales_y: baseline - sales_h,
                sales_h,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
struct Arc {
    name: &'static str,
    color: &'static str,
    length: f64,
    gap: f64,
    offset: f64,
}

/// Dash pattern per slice on a circle of radius `r`.
fn donut_arcs(slices: &[DonutSlice], r: f64) -> Vec<Arc> {
    let circumference = 2.0 * PI * r;
    let total: f64 = slices.iter().map(|s| s.value).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut consumed = 0.0;
    slices
        .iter()
        .map(|slice| {
            let length = circumference * slice.value / total;
            let arc = Arc {
                name: slice.name,
                color: slice.color,
                length,
                gap: circumference - length,
                offset: -consumed,
            };
            consumed += length;
            arc
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DatasetStore, Period};

    #[test]
    fn polyline_spans_plot_area() {
        let path = polyline(&[0.0, 50.0, 100.0], CHART_WIDTH, CHART_HEIGHT);
        let pairs: Vec<&str> = path.split(' ').collect();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0], format!("{PAD_LEFT:.1},{:.1}", CHART_HEIGHT - PAD_BOTTOM));
        assert_eq!(pairs[2], format!("{CHART_WIDTH:.1},{PAD_TOP:.1}"));
    }

    #[test]
    fn flat_zero_series_sits_on_baseline() {
        let path = polyline(&[0.0], CHART_WIDTH, CHART_HEIGHT);
        assert_eq!(path, format!("{PAD_LEFT:.1},{:.1}", CHART_HEIGHT - PAD_BOTTOM));
    }

    #[test]
    fn single_point_series_gets_a_marker() {
        let point = lone_marker(&[1_529_320.0], CHART_WIDTH, CHART_HEIGHT);
        assert_eq!(point, Some((PAD_LEFT, PAD_TOP)));
        assert_eq!(lone_marker(&[1.0, 2.0], CHART_WIDTH, CHART_HEIGHT), None);
        assert_eq!(lone_marker(&[], CHART_WIDTH, CHART_HEIGHT), None);
    }

    #[test]
    fn tallest_bar_fills_plot_height() {
        let rows = &DatasetStore::builtin().lookup(Period::ThisYear).platforms;
        let bars = bar_layout(rows, CHART_WIDTH, CHART_HEIGHT);
        assert_eq!(bars.len(), rows.len());
        let tallest = bars.iter().map(|b| b.clicks_h).fold(0.0, f64::max);
        assert!((tallest - (CHART_HEIGHT - PAD_TOP - PAD_BOTTOM)).abs() < 1e-9);
        assert!(bar_layout(&[], CHART_WIDTH, CHART_HEIGHT).is_empty());
    }

    #[test]
    fn donut_arcs_cover_the_circle() {
        let slices = &DatasetStore::builtin().lookup(Period::LastMonth).donut;
        let arcs = donut_arcs(slices, DONUT_RADIUS);
        let covered: f64 = arcs.iter().map(|a| a.length).sum();
        assert!((covered - 2.0 * PI * DONUT_RADIUS).abs() < 1e-6);
        assert_eq!(arcs[0].offset, 0.0);
        assert!(arcs[1].offset < 0.0);
    }
}
