//! Campaign list: search, platform/status filters and new-campaign validation.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;
use time::{macros::format_description, Date};

/// Platforms offered by the new-campaign form.
pub const CAMPAIGN_PLATFORMS: [&str; 6] = [
    "Instagram",
    "Facebook",
    "TikTok",
    "YouTube",
    "Twitter",
    "LinkedIn",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum CampaignStatus {
    Active,
    Paused,
    Scheduled,
}

impl CampaignStatus {
    pub const ALL: [CampaignStatus; 3] = [
        CampaignStatus::Active,
        CampaignStatus::Paused,
        CampaignStatus::Scheduled,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CampaignStatus::Active => "Active",
            CampaignStatus::Paused => "Paused",
            CampaignStatus::Scheduled => "Scheduled",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.label() == label)
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Campaign {
    pub id: u32,
    pub name: String,
    pub platform: String,
    pub status: CampaignStatus,
    pub budget: u32,
    pub spent: u32,
    pub clicks: u32,
    pub conversions: u32,
    pub ctr: String,
    pub cpc: String,
    pub start_date: String,
    pub end_date: String,
}

impl Campaign {
    /// Spent share of budget, 0–100.
    pub fn budget_used_pct(&self) -> f64 {
        if self.budget == 0 {
            0.0
        } else {
            f64::from(self.spent) / f64::from(self.budget) * 100.0
        }
    }
}

pub fn seed_campaigns() -> Vec<Campaign> {
    #[allow(clippy::too_many_arguments)]
    fn campaign(
        id: u32,
        name: &str,
        platform: &str,
        status: CampaignStatus,
        (budget, spent): (u32, u32),
        (clicks, conversions): (u32, u32),
        (ctr, cpc): (&str, &str),
        (start_date, end_date): (&str, &str),
    ) -> Campaign {
        Campaign {
            id,
            name: name.into(),
            platform: platform.into(),
            status,
            budget,
            spent,
            clicks,
            conversions,
            ctr: ctr.into(),
            cpc: cpc.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    vec![
        campaign(
            1,
            "Summer Sale Campaign",
            "Instagram",
            CampaignStatus::Active,
            (5_000, 3_200),
            (12_500, 234),
            ("2.1%", "$0.26"),
            ("2024-06-01", "2024-08-31"),
        ),
        campaign(
            2,
            "Product Launch",
            "TikTok",
            CampaignStatus::Active,
            (8_000, 5_600),
            (15_600, 298),
            ("1.9%", "$0.36"),
            ("2024-07-01", "2024-09-30"),
        ),
        campaign(
            3,
            "Brand Awareness",
            "Facebook",
            CampaignStatus::Paused,
            (3_000, 1_800),
            (8_900, 167),
            ("1.9%", "$0.20"),
            ("2024-05-15", "2024-07-15"),
        ),
        campaign(
            4,
            "Holiday Promotion",
            "YouTube",
            CampaignStatus::Scheduled,
            (6_000, 0),
            (0, 0),
            ("0%", "$0.00"),
            ("2024-12-01", "2024-12-31"),
        ),
    ]
}

/// Search plus multi-select filters. Unlike the dashboard's platform filter,
/// an empty selection here means "no restriction".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CampaignFilter {
    pub search: String,
    pub platforms: BTreeSet<String>,
    pub statuses: BTreeSet<CampaignStatus>,
}

impl CampaignFilter {
    pub fn matches(&self, campaign: &Campaign) -> bool {
        let term = self.search.to_lowercase();
        let matches_search = campaign.name.to_lowercase().contains(&term)
            || campaign.platform.to_lowercase().contains(&term)
            || campaign.status.label().to_lowercase().contains(&term);
        let matches_platform =
            self.platforms.is_empty() || self.platforms.contains(&campaign.platform);
        let matches_status = self.statuses.is_empty() || self.statuses.contains(&campaign.status);
        matches_search && matches_platform && matches_status
    }

    pub fn apply<'a>(&self, campaigns: &'a [Campaign]) -> Vec<&'a Campaign> {
        campaigns.iter().filter(|c| self.matches(c)).collect()
    }
}

/// Totals shown above the campaign list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CampaignSummary {
    pub active: usize,
    pub total_budget: u64,
    pub total_spent: u64,
    pub total_conversions: u64,
}

pub fn summarize(campaigns: &[Campaign]) -> CampaignSummary {
    campaigns
        .iter()
        .fold(CampaignSummary::default(), |mut acc, campaign| {
            if campaign.status == CampaignStatus::Active {
                acc.active += 1;
            }
            acc.total_budget += u64::from(campaign.budget);
            acc.total_spent += u64::from(campaign.spent);
            acc.total_conversions += u64::from(campaign.conversions);
            acc
        })
}

/// Platforms present in the list, in first-seen order.
pub fn distinct_platforms(campaigns: &[Campaign]) -> Vec<String> {
    let mut seen = Vec::new();
    for campaign in campaigns {
        if !seen.contains(&campaign.platform) {
            seen.push(campaign.platform.clone());
        }
    }
    seen
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CampaignError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Budget must be a positive whole number")]
    InvalidBudget,
    #[error("Invalid {field} date: {value}")]
    InvalidDate { field: &'static str, value: String },
    #[error("End date must be after the start date")]
    EndBeforeStart,
}

/// Form state for the "New Campaign" dialog; every field is raw input.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCampaign {
    pub name: String,
    pub platform: String,
    pub status: CampaignStatus,
    pub budget: String,
    pub start_date: String,
    pub end_date: String,
}

impl Default for NewCampaign {
    fn default() -> Self {
        Self {
            name: String::new(),
            platform: String::new(),
            status: CampaignStatus::Scheduled,
            budget: String::new(),
            start_date: String::new(),
            end_date: String::new(),
        }
    }
}

impl NewCampaign {
    /// Validates the form and builds the campaign with the next free id.
    pub fn build(&self, existing: &[Campaign]) -> Result<Campaign, CampaignError> {
        let required = [
            ("name", self.name.trim()),
            ("platform", self.platform.as_str()),
            ("budget", self.budget.trim()),
            ("start date", self.start_date.as_str()),
            ("end date", self.end_date.as_str()),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.is_empty()) {
            return Err(CampaignError::MissingField(field));
        }

        let budget = match self.budget.trim().parse::<u32>() {
            Ok(value) if value > 0 => value,
            _ => return Err(CampaignError::InvalidBudget),
        };

        let start = parse_date("start", &self.start_date)?;
        let end = parse_date("end", &self.end_date)?;
        if end <= start {
            return Err(CampaignError::EndBeforeStart);
        }

        let id = existing.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        Ok(Campaign {
            id,
            name: self.name.trim().to_string(),
            platform: self.platform.clone(),
            status: self.status,
            budget,
            spent: 0,
            clicks: 0,
            conversions: 0,
            ctr: "0%".into(),
            cpc: "$0.00".into(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
        })
    }
}

fn parse_date(field: &'static str, value: &str) -> Result<Date, CampaignError> {
    Date::parse(value, format_description!("[year]-[month]-[day]")).map_err(|_| {
        CampaignError::InvalidDate {
            field,
            value: value.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> NewCampaign {
        NewCampaign {
            name: "  Winter Push ".into(),
            platform: "Instagram".into(),
            status: CampaignStatus::Active,
            budget: "2500".into(),
            start_date: "2025-01-01".into(),
            end_date: "2025-02-01".into(),
        }
    }

    #[test]
    fn search_covers_name_platform_and_status() {
        let campaigns = seed_campaigns();
        let filter = CampaignFilter {
            search: "paused".into(),
            ..Default::default()
        };
        let hits = filter.apply(&campaigns);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Brand Awareness");
    }

    #[test]
    fn empty_selections_do_not_restrict() {
        let campaigns = seed_campaigns();
        assert_eq!(CampaignFilter::default().apply(&campaigns).len(), 4);
    }

    #[test]
    fn platform_and_status_filters_combine() {
        let campaigns = seed_campaigns();
        let filter = CampaignFilter {
            search: String::new(),
            platforms: ["TikTok".to_string(), "YouTube".to_string()].into(),
            statuses: [CampaignStatus::Active].into(),
        };
        let names: Vec<_> = filter.apply(&campaigns).iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Product Launch"]);
    }

    #[test]
    fn new_campaign_gets_next_id_and_trimmed_name() {
        let campaigns = seed_campaigns();
        let created = valid_form().build(&campaigns).unwrap();
        assert_eq!(created.id, 5);
        assert_eq!(created.name, "Winter Push");
        assert_eq!(created.spent, 0);
        assert_eq!(created.cpc, "$0.00");
    }

    #[test]
    fn invalid_forms_are_rejected() {
        let campaigns = seed_campaigns();

        let mut form = valid_form();
        form.platform.clear();
        assert_eq!(form.build(&campaigns), Err(CampaignError::MissingField("platform")));

        let mut form = valid_form();
        form.budget = "0".into();
        assert_eq!(form.build(&campaigns), Err(CampaignError::InvalidBudget));

        let mut form = valid_form();
        form.budget = "-20".into();
        assert_eq!(form.build(&campaigns), Err(CampaignError::InvalidBudget));

        let mut form = valid_form();
        form.end_date = "2025-01-01".into();
        assert_eq!(form.build(&campaigns), Err(CampaignError::EndBeforeStart));

        let mut form = valid_form();
        form.start_date = "01/01/2025".into();
        assert!(matches!(
            form.build(&campaigns),
            Err(CampaignError::InvalidDate { field: "start", .. })
        ));
    }

    #[test]
    fn distinct_platforms_keep_first_seen_order() {
        assert_eq!(
            distinct_platforms(&seed_campaigns()),
            ["Instagram", "TikTok", "Facebook", "YouTube"]
        );
    }

    #[test]
    fn summary_totals_the_seed_list() {
        let summary = summarize(&seed_campaigns());
        assert_eq!(
            summary,
            CampaignSummary {
                active: 2,
                total_budget: 22_000,
                total_spent: 10_600,
                total_conversions: 699,
            }
        );
        assert_eq!(summarize(&[]), CampaignSummary::default());
    }

    #[test]
    fn budget_usage_handles_zero_budget() {
        let mut campaign = seed_campaigns().remove(0);
        assert_eq!(campaign.budget_used_pct(), 64.0);
        campaign.budget = 0;
        assert_eq!(campaign.budget_used_pct(), 0.0);
    }
}
