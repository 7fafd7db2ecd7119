//! Count-up animation for metric cards.
//!
//! A [`CountUp`] is an iterator of display frames. Callers pace it with
//! [`CountUp::interval_ms`] and stop it simply by dropping it, so the
//! animation never holds state the derivation code depends on.

use super::format::format_count;

/// Steps and total duration for the headline value.
pub const VALUE_STEPS: u32 = 60;
pub const VALUE_DURATION_MS: u64 = 2_000;

/// Steps and total duration for the change badge.
pub const CHANGE_STEPS: u32 = 30;
pub const CHANGE_DURATION_MS: u64 = 1_500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameStyle {
    /// Mirrors the source string: optional `$` prefix, `%` suffix, decimals.
    Value {
        currency: bool,
        percent: bool,
        decimals: usize,
    },
    /// Signed percentage with one decimal.
    Change,
}

#[derive(Debug, Clone)]
pub struct CountUp {
    target: f64,
    steps: u32,
    emitted: u32,
    interval_ms: u64,
    style: FrameStyle,
    final_text: String,
}

impl CountUp {
    /// Animates a preformatted value such as `"$1,529,320"` or `"24.3%"`.
    /// Values carrying units (`"2.4M"`, `"4m 32s"`) jump straight to the end.
    pub fn value(display: &str) -> Self {
        let decimals = display
            .split_once('.')
            .map(|(_, tail)| tail.chars().take_while(char::is_ascii_digit).count())
            .unwrap_or(0);
        let steps = if display.chars().any(|c| c.is_ascii_alphabetic()) {
            1
        } else {
            VALUE_STEPS
        };
        Self::new(
            display,
            steps,
            VALUE_DURATION_MS,
            FrameStyle::Value {
                currency: display.contains('$'),
                percent: display.ends_with('%'),
                decimals,
            },
        )
    }

    /// Animates a signed change such as `"+8.2%"`.
    pub fn change(display: &str) -> Self {
        Self::new(display, CHANGE_STEPS, CHANGE_DURATION_MS, FrameStyle::Change)
    }

    fn new(display: &str, steps: u32, duration_ms: u64, style: FrameStyle) -> Self {
        let steps = steps.max(1);
        Self {
            target: numeric_value(display).unwrap_or(0.0),
            steps,
            emitted: 0,
            interval_ms: duration_ms / u64::from(steps),
            style,
            final_text: display.to_string(),
        }
    }

    /// Delay between consecutive frames.
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Frame shown before the first tick.
    pub fn initial_frame(&self) -> String {
        match self.style {
            FrameStyle::Value { .. } => "0".to_string(),
            FrameStyle::Change => "0%".to_string(),
        }
    }

    fn render(&self, current: f64) -> String {
        match self.style {
            FrameStyle::Value {
                currency,
                percent,
                decimals,
            } => {
                let body = if decimals == 0 {
                    format_count(current.round() as u64)
                } else {
                    let fixed = format!("{current:.decimals$}");
                    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
                    let whole: u64 = whole.parse().unwrap_or(0);
                    format!("{}.{frac}", format_count(whole))
                };
                let prefix = if currency { "$" } else { "" };
                let suffix = if percent { "%" } else { "" };
                format!("{prefix}{body}{suffix}")
            }
            FrameStyle::Change => {
                let sign = if current > 0.0 { "+" } else { "" };
                format!("{sign}{current:.1}%")
            }
        }
    }
}

impl Iterator for CountUp {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.emitted >= self.steps {
            return None;
        }
        self.emitted += 1;

        let current = self.target * f64::from(self.emitted) / f64::from(self.steps);
        if self.emitted == self.steps || current >= self.target {
            self.emitted = self.steps;
            return Some(self.final_text.clone());
        }
        Some(self.render(current))
    }
}

/// Digits and the decimal point of a display string, parsed as a number.
pub fn numeric_value(display: &str) -> Option<f64> {
    let cleaned: String = display
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    cleaned.parse().ok()
}
