use crate::shared::icons::icon;
use contracts::dashboards::d100_goal_tracking::{Metric, MetricKey};
use contracts::shared::number_format::format_fixed;
use leptos::prelude::*;

#[component]
pub fn KpiCard(
    /// Role of the metric (drives the icon)
    metric_key: MetricKey,
    /// Latest committed metric
    #[prop(into)]
    metric: Signal<Metric>,
    /// Entrance animation delay for stagger
    #[prop(optional)]
    delay_ms: u32,
) -> impl IntoView {
    let progress = move || metric.with(|m| m.progress_percent());

    let status_class = move || {
        if metric.with(|m| m.is_goal_met()) {
            "kpi-card kpi-card--done"
        } else {
            "kpi-card"
        }
    };

    let formatted_current = move || metric.with(|m| m.unit.format_display(m.current));
    let formatted_target = move || metric.with(|m| format!("Meta: {}", m.unit.format_display(m.target)));

    let description_view = move || {
        metric.with(|m| m.description.clone()).map(|d| {
            view! { <p class="kpi-card__description">{d}</p> }
        })
    };

    view! {
        <div
            class=status_class
            data-metric=metric_key.as_str()
            style=format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms)
        >
            <div class="kpi-card__head">
                <div>
                    <h3 class="kpi-card__label">{move || metric.with(|m| m.label.clone())}</h3>
                    {description_view}
                </div>
                <div class="kpi-card__icon">{icon(metric_key.icon_name())}</div>
            </div>

            <div class="kpi-card__values">
                <span class="kpi-card__value">{formatted_current}</span>
                <span class="kpi-card__target">{formatted_target}</span>
            </div>

            <div class="progress">
                <div
                    class="progress__bar"
                    style=move || format!("width: {:.2}%;", progress())
                ></div>
            </div>
            <div class="kpi-card__footer">
                <span class="kpi-card__percent">{move || format!("{}%", format_fixed(progress(), 1))}</span>
                <span class="kpi-card__done-label">"Concluído"</span>
            </div>
        </div>
    }
}
