#![cfg(test)]
/*!
Theme selector lint for the desktop build.

The shared theme (ui/assets/theme/main.css) is embedded at compile time, so a
refactor that renames a class in the components but not in the theme fails
silently. This test asserts that the selectors the dashboard markup relies on
are still present.

When renaming or removing a selector, update the component markup and
REQUIRED_SELECTORS together.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".app-shell",
    ".app-header",
    ".app-content",
    ".visually-hidden",
    // Buttons & inputs
    ".button {",
    ".button--primary",
    ".button--ghost",
    ".input",
    ".select",
    // Header popovers
    ".filter-popover__panel",
    ".filter-popover__option",
    ".export-menu__panel",
    ".export-menu__status--success",
    ".export-menu__status--error",
    ".notification-bell__badge",
    ".notification--unread",
    // Metric cards
    ".metric-grid",
    ".metric-card__value",
    ".metric-card__change--positive",
    ".metric-card__change--negative",
    // Charts
    ".chart-card",
    ".chart-card__placeholder",
    ".chart__series--revenue",
    ".chart__series--users",
    ".chart__bar--clicks",
    ".chart__bar--sales",
    ".chart__slice",
    ".chart__marker--revenue",
    ".chart-legend__swatch",
    // Tables
    ".data-table",
    ".data-table__sort",
    ".data-table__num",
    ".data-table__empty",
    ".badge--active",
    ".badge--paused",
    ".badge--scheduled",
    // Analytics / revenue / campaigns
    ".share-list__rows",
    ".progress__fill",
    ".trend-list__item",
    ".campaign-filters__group",
    ".dialog-backdrop",
    ".dialog__error",
    ".page-not-found",
    // Responsive block
    "@media (max-width: 720px)",
];

/// Platform badges are keyed by the lowercased platform name.
const PLATFORM_BADGES: &[&str] = &["tiktok", "instagram", "facebook", "youtube"];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn every_dashboard_platform_has_a_badge_colour() {
    for platform in PLATFORM_BADGES {
        let selector = format!(".badge--{platform}");
        assert!(THEME_CSS.contains(&selector), "missing {selector}");
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({non_ws_len} non-whitespace chars) - \
         did the file get truncated or path change?"
    );
}
