use dioxus::prelude::*;

use crate::core::campaigns::{
    distinct_platforms, seed_campaigns, summarize, Campaign, CampaignFilter, CampaignStatus,
    NewCampaign, CAMPAIGN_PLATFORMS,
};
use crate::core::format::{format_count, format_currency};
use crate::t;

#[component]
pub fn Campaigns() -> Element {
    let mut campaigns = use_signal(seed_campaigns);
    let mut filter = use_signal(CampaignFilter::default);
    let mut form = use_signal(NewCampaign::default);
    let mut dialog_open = use_signal(|| false);
    let mut form_error = use_signal(|| Option::<String>::None);

    let all = campaigns();
    let summary = summarize(&all);
    let visible: Vec<Campaign> = filter().apply(&all).into_iter().cloned().collect();
    let platforms = distinct_platforms(&all);
    let current_filter = filter();
    let draft = form();
    let search_placeholder = t!("campaigns-search-placeholder");

    let create = move |_: MouseEvent| {
        let existing = campaigns();
        match form().build(&existing) {
            Ok(campaign) => {
                tracing::info!(id = campaign.id, name = %campaign.name, "campaign created");
                campaigns.write().push(campaign);
                form.set(NewCampaign::default());
                form_error.set(None);
                dialog_open.set(false);
            }
            Err(err) => {
                tracing::debug!("campaign form rejected: {err}");
                form_error.set(Some(err.to_string()));
            }
        }
    };

    rsx! {
        section { class: "page page-campaigns",
            div { class: "page__header page__header--split",
                div {
                    h1 { {t!("campaigns-title")} }
                    p { class: "page__subtitle", {t!("campaigns-subtitle")} }
                }
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: move |_| dialog_open.set(true),
                    {t!("campaigns-new")}
                }
            }

            section { class: "metric-grid",
                StatCard { title: "Active Campaigns", value: summary.active.to_string() }
                StatCard { title: "Total Budget", value: format_currency(summary.total_budget as f64) }
                StatCard { title: "Total Spent", value: format_currency(summary.total_spent as f64) }
                StatCard { title: "Total Conversions", value: format_count(summary.total_conversions) }
            }

            div { class: "campaign-filters",
                input {
                    class: "input",
                    r#type: "search",
                    placeholder: "{search_placeholder}",
                    value: "{current_filter.search}",
                    oninput: move |evt| filter.write().search = evt.value(),
                }
                fieldset { class: "campaign-filters__group",
                    legend { {t!("header-platforms-label")} }
                    for platform in platforms {
                        label { key: "{platform}", class: "filter-popover__option",
                            input {
                                r#type: "checkbox",
                                checked: current_filter.platforms.contains(&platform),
                                onchange: {
                                    let platform = platform.clone();
                                    move |_| {
                                        let mut f = filter.write();
                                        if !f.platforms.remove(&platform) {
                                            f.platforms.insert(platform.clone());
                                        }
                                    }
                                },
                            }
                            "{platform}"
                        }
                    }
                }
                fieldset { class: "campaign-filters__group",
                    legend { {t!("campaigns-status-label")} }
                    for status in CampaignStatus::ALL {
                        label { key: "{status}", class: "filter-popover__option",
                            input {
                                r#type: "checkbox",
                                checked: current_filter.statuses.contains(&status),
                                onchange: move |_| {
                                    let mut f = filter.write();
                                    if !f.statuses.remove(&status) {
                                        f.statuses.insert(status);
                                    }
                                },
                            }
                            "{status}"
                        }
                    }
                }
            }

            section { class: "table-card",
                div { class: "table-card__header",
                    h2 { class: "table-card__title", {t!("campaigns-list-title")} }
                }
                if visible.is_empty() {
                    p { class: "table-card__placeholder", {t!("campaigns-empty")} }
                } else {
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Campaign" }
                                th { "Platform" }
                                th { "Status" }
                                th { "Budget" }
                                th { "Spent" }
                                th { "Clicks" }
                                th { "Conversions" }
                                th { "CTR" }
                                th { "CPC" }
                            }
                        }
                        tbody {
                            for campaign in visible {
                                CampaignRow { key: "{campaign.id}", campaign }
                            }
                        }
                    }
                }
            }

            if dialog_open() {
                div { class: "dialog-backdrop",
                    div { class: "dialog", role: "dialog", aria_modal: "true",
                        h2 { {t!("campaigns-dialog-title")} }
                        div { class: "dialog__form",
                            label { r#for: "campaign-name", "Campaign Name" }
                            input {
                                id: "campaign-name",
                                class: "input",
                                value: "{draft.name}",
                                oninput: move |evt| form.write().name = evt.value(),
                            }
                            label { r#for: "campaign-platform", "Platform" }
                            select {
                                id: "campaign-platform",
                                class: "select",
                                value: "{draft.platform}",
                                onchange: move |evt| form.write().platform = evt.value(),
                                option { value: "", disabled: true, selected: draft.platform.is_empty(), "Select platform" }
                                for platform in CAMPAIGN_PLATFORMS {
                                    option { key: "{platform}", value: "{platform}", "{platform}" }
                                }
                            }
                            label { r#for: "campaign-status", "Status" }
                            select {
                                id: "campaign-status",
                                class: "select",
                                value: "{draft.status}",
                                onchange: move |evt| {
                                    if let Some(status) = CampaignStatus::from_label(&evt.value()) {
                                        form.write().status = status;
                                    }
                                },
                                for status in CampaignStatus::ALL {
                                    option { key: "{status}", value: "{status}", selected: status == draft.status, "{status}" }
                                }
                            }
                            label { r#for: "campaign-budget", "Budget ($)" }
                            input {
                                id: "campaign-budget",
                                class: "input",
                                r#type: "number",
                                value: "{draft.budget}",
                                oninput: move |evt| form.write().budget = evt.value(),
                            }
                            label { r#for: "campaign-start", "Start Date" }
                            input {
                                id: "campaign-start",
                                class: "input",
                                r#type: "date",
                                value: "{draft.start_date}",
                                oninput: move |evt| form.write().start_date = evt.value(),
                            }
                            label { r#for: "campaign-end", "End Date" }
                            input {
                                id: "campaign-end",
                                class: "input",
                                r#type: "date",
                                value: "{draft.end_date}",
                                oninput: move |evt| form.write().end_date = evt.value(),
                            }
                        }
                        if let Some(message) = form_error() {
                            p { class: "dialog__error", role: "alert", "{message}" }
                        }
                        div { class: "dialog__actions",
                            button {
                                r#type: "button",
                                class: "button button--ghost",
                                onclick: move |_| {
                                    dialog_open.set(false);
                                    form_error.set(None);
                                },
                                {t!("campaigns-cancel")}
                            }
                            button {
                                r#type: "button",
                                class: "button button--primary",
                                onclick: create,
                                {t!("campaigns-create")}
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(title: &'static str, value: String) -> Element {
    rsx! {
        article { class: "metric-card",
            span { class: "metric-card__title", "{title}" }
            strong { class: "metric-card__value", "{value}" }
        }
    }
}

#[component]
fn CampaignRow(campaign: Campaign) -> Element {
    let status_class = match campaign.status {
        CampaignStatus::Active => "badge badge--active",
        CampaignStatus::Paused => "badge badge--paused",
        CampaignStatus::Scheduled => "badge badge--scheduled",
    };
    let used = campaign.budget_used_pct();

    rsx! {
        tr {
            td {
                div { class: "campaign__name", "{campaign.name}" }
                div { class: "campaign__dates", "{campaign.start_date} - {campaign.end_date}" }
            }
            td { span { class: "badge", "{campaign.platform}" } }
            td { span { class: "{status_class}", "{campaign.status}" } }
            td { class: "data-table__num", "{format_currency(f64::from(campaign.budget))}" }
            td { class: "data-table__num",
                "{format_currency(f64::from(campaign.spent))}"
                div { class: "progress progress--thin",
                    div { class: "progress__fill", style: "width: {used:.0}%" }
                }
            }
            td { class: "data-table__num", "{format_count(u64::from(campaign.clicks))}" }
            td { class: "data-table__num", "{campaign.conversions}" }
            td { class: "data-table__num", "{campaign.ctr}" }
            td { class: "data-table__num", "{campaign.cpc}" }
        }
    }
}
