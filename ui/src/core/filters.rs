//! Session-wide filter state shared by every dashboard view.
//!
//! The UI holds a single `Signal<FilterState>` provided at the app root;
//! components mutate it only through the methods below.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::dataset::{METRIC_CATEGORIES, PLATFORMS};
use super::period::Period;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    period: Period,
    platforms: BTreeSet<String>,
    /// Stored for the metric picker; derivation does not read it yet.
    metrics: BTreeSet<String>,
    start_date: String,
    end_date: String,
    global_search: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            period: Period::default(),
            platforms: PLATFORMS.iter().map(|p| p.to_string()).collect(),
            metrics: METRIC_CATEGORIES.iter().map(|m| m.to_string()).collect(),
            start_date: String::new(),
            end_date: String::new(),
            global_search: String::new(),
        }
    }
}

impl FilterState {
    pub fn period(&self) -> Period {
        self.period
    }

    pub fn platforms(&self) -> &BTreeSet<String> {
        &self.platforms
    }

    pub fn metrics(&self) -> &BTreeSet<String> {
        &self.metrics
    }

    pub fn date_range(&self) -> (&str, &str) {
        (&self.start_date, &self.end_date)
    }

    pub fn global_search(&self) -> &str {
        &self.global_search
    }

    pub fn set_period(&mut self, period: Period) {
        self.period = period;
    }

    /// Applies a period arriving as free text. Unknown labels keep the current
    /// period and only leave a warning in the log.
    pub fn set_period_label(&mut self, candidate: &str) -> bool {
        match candidate.parse::<Period>() {
            Ok(period) => {
                self.period = period;
                true
            }
            Err(err) => {
                tracing::warn!(current = %self.period, "{err}; keeping current period");
                false
            }
        }
    }

    /// Replaces the platform selection. An empty set hides every platform row.
    pub fn set_platform_filter<I, S>(&mut self, platforms: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.platforms = platforms.into_iter().map(Into::into).collect();
    }

    /// Flips a single platform in or out of the selection.
    pub fn toggle_platform(&mut self, platform: &str) {
        if !self.platforms.remove(platform) {
            self.platforms.insert(platform.to_string());
        }
    }

    pub fn set_metric_filter<I, S>(&mut self, metrics: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.metrics = metrics.into_iter().map(Into::into).collect();
    }

    /// Stores both bounds verbatim; parsing belongs to whoever consumes them.
    pub fn set_date_range(&mut self, start: impl Into<String>, end: impl Into<String>) {
        self.start_date = start.into();
        self.end_date = end.into();
    }

    pub fn set_global_search_term(&mut self, text: impl Into<String>) {
        self.global_search = text.into();
    }

    /// Restores the defaults. The global search term is session state and survives.
    pub fn reset(&mut self) {
        let global_search = std::mem::take(&mut self.global_search);
        *self = Self {
            global_search,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_select_everything_for_this_year() {
        let state = FilterState::default();
        assert_eq!(state.period(), Period::ThisYear);
        assert_eq!(state.platforms().len(), 4);
        assert_eq!(state.metrics().len(), 4);
        assert!(state.platforms().contains("TikTok"));
        assert!(state.metrics().contains("Conversion Rate"));
        assert_eq!(state.date_range(), ("", ""));
        assert_eq!(state.global_search(), "");
    }

    #[test]
    fn invalid_period_label_keeps_current_period() {
        let mut state = FilterState::default();
        state.set_period(Period::LastMonth);
        assert!(!state.set_period_label("Fortnight"));
        assert_eq!(state.period(), Period::LastMonth);
        assert!(state.set_period_label("Last quarter"));
        assert_eq!(state.period(), Period::LastQuarter);
    }

    #[test]
    fn toggle_platform_adds_and_removes() {
        let mut state = FilterState::default();
        state.toggle_platform("Facebook");
        assert!(!state.platforms().contains("Facebook"));
        state.toggle_platform("Facebook");
        assert!(state.platforms().contains("Facebook"));
    }

    #[test]
    fn date_range_is_stored_verbatim() {
        let mut state = FilterState::default();
        state.set_date_range("2024-13-40", "yesterday");
        assert_eq!(state.date_range(), ("2024-13-40", "yesterday"));
    }

    #[test]
    fn search_term_is_not_normalized() {
        let mut state = FilterState::default();
        state.set_global_search_term("  TikTok ");
        assert_eq!(state.global_search(), "  TikTok ");
    }

    #[test]
    fn reset_restores_documented_defaults() {
        let mut state = FilterState::default();
        state.set_period(Period::LastYear);
        state.set_platform_filter(Vec::<String>::new());
        state.set_metric_filter(["Sales"]);
        state.set_date_range("2024-01-01", "2024-02-01");
        state.reset();

        let defaults = FilterState::default();
        assert_eq!(state.period(), defaults.period());
        assert_eq!(state.platforms(), defaults.platforms());
        assert_eq!(state.metrics(), defaults.metrics());
        assert_eq!(state.date_range(), ("", ""));
    }
}
