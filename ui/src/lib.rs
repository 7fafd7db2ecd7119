//! Shared UI crate for ADmyBRAND Insights. Dashboard logic, views and
//! localization live here; the platform crates only add routing and launch.

pub mod core;
pub mod dashboard;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized sidebar navigation (components/sidebar.rs)
    pub mod sidebar;
    pub use sidebar::register_nav;
    pub use sidebar::AppSidebar;
    pub use sidebar::NavBuilder;
}

use dioxus::prelude::{asset, manganis, Asset};

/// Shared theme stylesheet. Web links it; desktop inlines the same file.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
