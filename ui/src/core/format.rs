//! Formatting helpers for presenting metrics.

/// `12500` -> `"12,500"`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole-dollar amount with grouping: `1529320.0` -> `"$1,529,320"`.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}${}", format_count(value.abs().round() as u64))
}

/// Axis-friendly currency: `$1.5M`, `$125K`, `$900`.
pub fn format_currency_compact(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("${:.1}M", value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("${:.0}K", value / 1_000.0)
    } else {
        format!("${value:.0}")
    }
}

pub fn format_percent(value: f64) -> String {
    if value.is_finite() {
        format!("{value}%")
    } else {
        "—".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_grouped_by_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(12_500), "12,500");
        assert_eq!(format_count(1_529_320), "1,529,320");
    }

    #[test]
    fn currency_rounds_to_whole_dollars() {
        assert_eq!(format_currency(1_529_320.0), "$1,529,320");
        assert_eq!(format_currency(4_341.6), "$4,342");
        assert_eq!(format_currency(f64::NAN), "—");
    }

    #[test]
    fn compact_currency_picks_a_unit() {
        assert_eq!(format_currency_compact(1_529_320.0), "$1.5M");
        assert_eq!(format_currency_compact(125_000.0), "$125K");
        assert_eq!(format_currency_compact(900.0), "$900");
    }

    #[test]
    fn percent_keeps_source_precision() {
        assert_eq!(format_percent(1.87), "1.87%");
        assert_eq!(format_percent(58.0), "58%");
    }
}
