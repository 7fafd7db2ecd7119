//! Derived dashboard datasets: (filters, store) -> what the views render.

use super::dataset::{ChartPoint, DatasetStore, DonutSlice, Metric, PlatformRow};
use super::filters::FilterState;
use super::period::Period;

/// Recomputed on every filter change; holds no state of its own.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DerivedView {
    pub period: Period,
    pub chart: Vec<ChartPoint>,
    pub platforms: Vec<PlatformRow>,
    pub donut: Vec<DonutSlice>,
    pub metrics: Vec<Metric>,
}

pub fn derive(filters: &FilterState, store: &DatasetStore) -> DerivedView {
    let period = filters.period();
    let dataset = store.lookup(period);
    let selected = filters.platforms();

    let platforms = dataset
        .platforms
        .iter()
        .filter(|row| selected.contains(row.platform))
        .cloned()
        .collect();

    DerivedView {
        period,
        chart: dataset.chart.clone(),
        platforms,
        donut: dataset.donut.clone(),
        metrics: dataset.metrics.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dataset::PLATFORMS;

    fn store() -> &'static DatasetStore {
        DatasetStore::builtin()
    }

    #[test]
    fn empty_platform_selection_yields_no_rows() {
        let mut filters = FilterState::default();
        filters.set_platform_filter(Vec::<&str>::new());
        for period in Period::ALL {
            filters.set_period(period);
            let view = derive(&filters, store());
            assert!(view.platforms.is_empty());
            assert!(!view.chart.is_empty());
        }
    }

    #[test]
    fn full_selection_is_the_unfiltered_sequence() {
        let mut filters = FilterState::default();
        filters.set_platform_filter(PLATFORMS);
        for period in Period::ALL {
            filters.set_period(period);
            let view = derive(&filters, store());
            assert_eq!(view.platforms, store().lookup(period).platforms);
        }
    }

    #[test]
    fn selection_preserves_dataset_order() {
        let mut filters = FilterState::default();
        filters.set_platform_filter(["YouTube", "Instagram"]);
        let view = derive(&filters, store());
        let names: Vec<_> = view.platforms.iter().map(|row| row.platform).collect();
        assert_eq!(names, ["Instagram", "YouTube"]);
    }

    #[test]
    fn unknown_platform_names_match_nothing() {
        let mut filters = FilterState::default();
        filters.set_platform_filter(["LinkedIn"]);
        assert!(derive(&filters, store()).platforms.is_empty());
    }

    #[test]
    fn metric_selection_does_not_filter_metrics() {
        let mut filters = FilterState::default();
        filters.set_metric_filter(["Clicks"]);
        let view = derive(&filters, store());
        assert_eq!(view.metrics.len(), 4);
    }

    #[test]
    fn derivation_is_deterministic() {
        let mut filters = FilterState::default();
        filters.set_period(Period::LastQuarter);
        filters.set_platform_filter(["TikTok"]);
        assert_eq!(derive(&filters, store()), derive(&filters, store()));
    }
}
