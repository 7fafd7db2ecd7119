//! Dashboard widgets shared by every page: header controls, metric cards,
//! charts, the performance table, exports and notifications.

mod charts;
pub use charts::{PlatformBarChart, RevenueLineChart, TrafficDonutChart};

mod export;
pub use export::ExportMenu;

mod header;
pub use header::AppHeader;

mod metrics;
pub use metrics::{MetricCard, MetricGrid};

mod notifications;
pub use notifications::NotificationBell;

mod share_list;
pub use share_list::ShareList;

mod table;
pub use table::PerformanceTable;

use dioxus::prelude::*;

use crate::core::{derive, DatasetStore, DerivedView, FilterState};

/// Installs the shared filter state for the subtree. Call once at the app root.
pub fn use_filter_root() -> Signal<FilterState> {
    let filters = use_signal(FilterState::default);
    use_context_provider(|| filters)
}

/// The filter state installed by [`use_filter_root`].
pub fn use_filters() -> Signal<FilterState> {
    use_context::<Signal<FilterState>>()
}

/// Derived view recomputed whenever the shared filters change.
pub fn use_derived_view() -> Memo<DerivedView> {
    let filters = use_filters();
    use_memo(move || derive(&filters.read(), DatasetStore::builtin()))
}
