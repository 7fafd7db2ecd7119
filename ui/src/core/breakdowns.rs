//! Fixed content for the Analytics and Revenue pages. These figures do not
//! follow the period filter.

use super::dataset::{ChangeType, Metric};

/// One row of a share-of-total list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShareRow {
    pub label: &'static str,
    /// Absolute amount in dollars, when the list shows one.
    pub amount: Option<f64>,
    pub percentage: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyTrend {
    pub month: &'static str,
    pub revenue: f64,
    pub growth: &'static str,
}

const fn share(label: &'static str, amount: Option<f64>, percentage: u8) -> ShareRow {
    ShareRow {
        label,
        amount,
        percentage,
    }
}

const fn positive(title: &'static str, value: &'static str, change: &'static str) -> Metric {
    Metric {
        title,
        value,
        change,
        change_type: ChangeType::Positive,
    }
}

pub const ANALYTICS_METRICS: [Metric; 4] = [
    positive("Total Views", "2.4M", "+15.3%"),
    positive("Engagement Rate", "8.7%", "+2.1%"),
    positive("Conversion Rate", "3.2%", "+0.8%"),
    positive("Avg Session", "4m 32s", "+12%"),
];

pub const TRAFFIC_SOURCES: [ShareRow; 4] = [
    share("Organic Search", None, 45),
    share("Direct Traffic", None, 28),
    share("Social Media", None, 18),
    share("Referral", None, 9),
];

pub const REVENUE_METRICS: [Metric; 4] = [
    positive("Total Revenue", "$1,529,320", "+22%"),
    positive("Monthly Growth", "+18.5%", "+2.3%"),
    positive("Avg Order Value", "$342", "+8.1%"),
    positive("Revenue per User", "$4,342", "+4.1%"),
];

pub const REVENUE_BY_PLATFORM: [ShareRow; 5] = [
    share("TikTok", Some(456_000.0), 30),
    share("Instagram", Some(342_000.0), 22),
    share("Facebook", Some(298_000.0), 19),
    share("YouTube", Some(234_000.0), 15),
    share("Other", Some(199_320.0), 14),
];

pub const REVENUE_TRENDS: [MonthlyTrend; 6] = [
    MonthlyTrend { month: "Jan", revenue: 125_000.0, growth: "+12%" },
    MonthlyTrend { month: "Feb", revenue: 145_000.0, growth: "+16%" },
    MonthlyTrend { month: "Mar", revenue: 167_000.0, growth: "+15%" },
    MonthlyTrend { month: "Apr", revenue: 189_000.0, growth: "+13%" },
    MonthlyTrend { month: "May", revenue: 234_000.0, growth: "+24%" },
    MonthlyTrend { month: "Jun", revenue: 298_000.0, growth: "+27%" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_lists_total_one_hundred_percent() {
        let traffic: u32 = TRAFFIC_SOURCES.iter().map(|r| u32::from(r.percentage)).sum();
        let revenue: u32 = REVENUE_BY_PLATFORM.iter().map(|r| u32::from(r.percentage)).sum();
        assert_eq!(traffic, 100);
        assert_eq!(revenue, 100);
    }

    #[test]
    fn platform_revenue_adds_up_to_the_headline_total() {
        let total: f64 = REVENUE_BY_PLATFORM.iter().filter_map(|r| r.amount).sum();
        assert_eq!(total, 1_529_320.0);
        assert_eq!(REVENUE_METRICS[0].value, "$1,529,320");
    }
}
