use crate::shared::icons::icon;
use contracts::dashboards::d100_goal_tracking::summary::{
    revenue_status, ticket_status, RevenueStatus, TicketStatus,
};
use contracts::dashboards::d100_goal_tracking::MetricSet;
use leptos::prelude::*;

/// "Status Geral" banner above the KPI grid.
#[component]
pub fn StatusAlert(#[prop(into)] metrics: Signal<MetricSet>) -> impl IntoView {
    let revenue_line = move || {
        let status = metrics.with(revenue_status);
        let class = match status {
            RevenueStatus::Behind { .. } => "status-alert__text",
            RevenueStatus::GoalReached => "status-alert__text status-alert__text--good",
        };
        view! { <span class=class>{status.message()}</span> }
    };

    let ticket_line = move || {
        let status = metrics.with(ticket_status);
        let class = match status {
            TicketStatus::Below { .. } => "status-alert__text status-alert__text--bad",
            TicketStatus::AtOrAbove => "status-alert__text status-alert__text--good",
        };
        view! { <span class=class>{status.message()}</span> }
    };

    view! {
        <div class="status-alert">
            <div class="status-alert__icon">{icon("trending-down")}</div>
            <div>
                <h2 class="status-alert__title">"Status Geral"</h2>
                <p class="status-alert__body">
                    {revenue_line}
                    " "
                    {ticket_line}
                </p>
            </div>
        </div>
    }
}
