//! Hand-authored datasets backing every reporting period.
//!
//! The store is built once on first access and never mutated afterwards;
//! every [`Period`] maps to a fully populated [`PeriodDataset`].

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use super::period::Period;

/// Platforms tracked across the dashboard, in display order.
pub const PLATFORMS: [&str; 4] = ["Instagram", "Facebook", "TikTok", "YouTube"];

/// Metric categories offered by the metric filter.
pub const METRIC_CATEGORIES: [&str; 4] = ["Clicks", "Sales", "Conversion Rate", "Revenue"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: &'static str,
    pub revenue: f64,
    pub users: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformRow {
    pub platform: &'static str,
    pub clicks: u32,
    pub sales: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DonutSlice {
    pub name: &'static str,
    /// Share in percentage points.
    pub value: f64,
    /// Theme color token (`--chart-N`).
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Positive,
    Negative,
}

impl ChangeType {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeType::Positive => "positive",
            ChangeType::Negative => "negative",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metric {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub change_type: ChangeType,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodDataset {
    pub chart: Vec<ChartPoint>,
    pub platforms: Vec<PlatformRow>,
    pub donut: Vec<DonutSlice>,
    pub metrics: Vec<Metric>,
}

/// Immutable lookup from period to its dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetStore {
    datasets: BTreeMap<Period, PeriodDataset>,
}

static BUILTIN: Lazy<DatasetStore> = Lazy::new(DatasetStore::build);

impl DatasetStore {
    /// The process-wide store holding the built-in mock data.
    pub fn builtin() -> &'static DatasetStore {
        &BUILTIN
    }

    /// Total for every [`Period`]; all six are populated at construction.
    pub fn lookup(&self, period: Period) -> &PeriodDataset {
        self.datasets
            .get(&period)
            .or_else(|| self.datasets.get(&Period::default()))
            .unwrap_or_else(|| unreachable!("dataset store is populated for every period"))
    }

    fn build() -> Self {
        let datasets = Period::ALL
            .into_iter()
            .map(|period| (period, dataset_for(period)))
            .collect();
        Self { datasets }
    }
}

fn point(label: &'static str, revenue: f64, users: u32) -> ChartPoint {
    ChartPoint {
        label,
        revenue,
        users,
    }
}

fn platform_rows(rows: [(u32, u32); 4]) -> Vec<PlatformRow> {
    PLATFORMS
        .into_iter()
        .zip(rows)
        .map(|(platform, (clicks, sales))| PlatformRow {
            platform,
            clicks,
            sales,
        })
        .collect()
}

fn donut(direct: f64, affiliate: f64, social: f64) -> Vec<DonutSlice> {
    vec![
        DonutSlice {
            name: "Direct Sales",
            value: direct,
            color: "--chart-1",
        },
        DonutSlice {
            name: "Affiliate",
            value: affiliate,
            color: "--chart-2",
        },
        DonutSlice {
            name: "Social Media",
            value: social,
            color: "--chart-3",
        },
    ]
}

/// Revenue, meetings, average per member, growth rate. Every period's changes are positive.
fn metrics(values: [(&'static str, &'static str); 4]) -> Vec<Metric> {
    const TITLES: [&str; 4] = ["Revenue", "Total Meetings", "Avg Per Member", "Growth Rate"];
    TITLES
        .into_iter()
        .zip(values)
        .map(|(title, (value, change))| Metric {
            title,
            value,
            change,
            change_type: ChangeType::Positive,
        })
        .collect()
}

fn dataset_for(period: Period) -> PeriodDataset {
    match period {
        Period::ThisMonth => PeriodDataset {
            chart: vec![point("Dec", 1_529_320.0, 352)],
            platforms: platform_rows([(12_500, 234), (8_900, 187), (15_600, 298), (6_700, 89)]),
            donut: donut(58.0, 23.0, 19.0),
            metrics: metrics([
                ("$1,529,320", "+22%"),
                ("352", "+8.2%"),
                ("$4,342", "+4.1%"),
                ("24.3%", "+2.1%"),
            ]),
        },
        Period::LastMonth => PeriodDataset {
            chart: vec![point("Nov", 892_000.0, 321)],
            platforms: platform_rows([(9_800, 187), (7_200, 145), (12_300, 234), (5_400, 67)]),
            donut: donut(52.0, 28.0, 20.0),
            metrics: metrics([
                ("$892,000", "+18%"),
                ("321", "+6.5%"),
                ("$3,987", "+3.2%"),
                ("18.7%", "+1.8%"),
            ]),
        },
        Period::ThisQuarter => PeriodDataset {
            chart: vec![
                point("Oct", 678_000.0, 298),
                point("Nov", 892_000.0, 321),
                point("Dec", 1_529_320.0, 352),
            ],
            platforms: platform_rows([(11_500, 210), (8_200, 165), (14_200, 275), (6_100, 78)]),
            donut: donut(61.0, 21.0, 18.0),
            metrics: metrics([
                ("$3,099,320", "+25%"),
                ("971", "+12.3%"),
                ("$4,125", "+5.8%"),
                ("28.9%", "+3.2%"),
            ]),
        },
        Period::LastQuarter => PeriodDataset {
            chart: vec![
                point("Jul", 356_000.0, 203),
                point("Aug", 423_000.0, 234),
                point("Sep", 512_000.0, 267),
            ],
            platforms: platform_rows([(8_900, 165), (6_500, 125), (10_800, 198), (4_800, 58)]),
            donut: donut(49.0, 31.0, 20.0),
            metrics: metrics([
                ("$1,291,000", "+15%"),
                ("704", "+7.8%"),
                ("$3,654", "+2.9%"),
                ("16.2%", "+1.5%"),
            ]),
        },
        Period::ThisYear => PeriodDataset {
            chart: vec![
                point("Jan", 125_000.0, 89),
                point("Feb", 145_000.0, 123),
                point("Mar", 167_000.0, 156),
                point("Apr", 189_000.0, 134),
                point("May", 234_000.0, 167),
                point("Jun", 298_000.0, 189),
                point("Jul", 356_000.0, 203),
                point("Aug", 423_000.0, 234),
                point("Sep", 512_000.0, 267),
                point("Oct", 678_000.0, 298),
                point("Nov", 892_000.0, 321),
                point("Dec", 1_529_320.0, 352),
            ],
            platforms: platform_rows([(12_500, 234), (8_900, 187), (15_600, 298), (6_700, 89)]),
            donut: donut(65.0, 18.0, 17.0),
            metrics: metrics([
                ("$6,220,320", "+35%"),
                ("2,483", "+18.7%"),
                ("$4,125", "+8.9%"),
                ("42.1%", "+5.2%"),
            ]),
        },
        Period::LastYear => PeriodDataset {
            chart: vec![
                point("Jan", 89_000.0, 67),
                point("Feb", 102_000.0, 89),
                point("Mar", 118_000.0, 112),
                point("Apr", 134_000.0, 98),
                point("May", 156_000.0, 134),
                point("Jun", 178_000.0, 145),
                point("Jul", 201_000.0, 167),
                point("Aug", 234_000.0, 189),
                point("Sep", 267_000.0, 201),
                point("Oct", 312_000.0, 223),
                point("Nov", 378_000.0, 245),
                point("Dec", 456_000.0, 267),
            ],
            platforms: platform_rows([(8_900, 165), (6_500, 125), (10_800, 198), (4_800, 58)]),
            donut: donut(45.0, 35.0, 20.0),
            metrics: metrics([
                ("$2,456,000", "+12%"),
                ("1,987", "+8.9%"),
                ("$3,234", "+3.1%"),
                ("15.8%", "+2.1%"),
            ]),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_period_is_fully_populated() {
        let store = DatasetStore::builtin();
        for period in Period::ALL {
            let dataset = store.lookup(period);
            assert!(!dataset.chart.is_empty(), "{period} chart empty");
            assert!(!dataset.platforms.is_empty(), "{period} platforms empty");
            assert!(!dataset.donut.is_empty(), "{period} donut empty");
            assert!(!dataset.metrics.is_empty(), "{period} metrics empty");
        }
    }

    #[test]
    fn donut_shares_sum_to_one_hundred() {
        let store = DatasetStore::builtin();
        for period in Period::ALL {
            let total: f64 = store.lookup(period).donut.iter().map(|s| s.value).sum();
            assert_eq!(total, 100.0, "{period}");
        }
    }

    #[test]
    fn platform_rows_follow_platform_order() {
        let rows = &DatasetStore::builtin().lookup(Period::LastQuarter).platforms;
        let names: Vec<_> = rows.iter().map(|row| row.platform).collect();
        assert_eq!(names, PLATFORMS);
        assert_eq!(rows[2].clicks, 10_800);
        assert_eq!(rows[3].sales, 58);
    }

    #[test]
    fn yearly_series_cover_twelve_months() {
        let store = DatasetStore::builtin();
        assert_eq!(store.lookup(Period::ThisYear).chart.len(), 12);
        assert_eq!(store.lookup(Period::LastYear).chart.len(), 12);
        assert_eq!(store.lookup(Period::ThisQuarter).chart.len(), 3);
    }
}
