//! SVG gauges: revenue half-arc and drinks share donut.

use contracts::dashboards::d100_goal_tracking::summary::{revenue_gauge, share_donut};
use contracts::dashboards::d100_goal_tracking::MetricSet;
use contracts::shared::number_format::{format_currency, format_fixed, format_share};
use leptos::prelude::*;

const GAUGE_RADIUS: f64 = 90.0;
const DONUT_RADIUS: f64 = 70.0;

/// `stroke-dasharray` drawing `percent` of a path of the given length.
fn dash(percent: f64, length: f64) -> String {
    let filled = (percent.max(0.0) / 100.0 * length).min(length);
    format!("{:.2} {:.2}", filled, length)
}

#[component]
pub fn RevenueGauge(#[prop(into)] metrics: Signal<MetricSet>) -> impl IntoView {
    let arc_length = std::f64::consts::PI * GAUGE_RADIUS;
    let filled = move || metrics.with(|m| revenue_gauge(m).filled);
    let reached = move || metrics.with(|m| format!("{}%", format_fixed(m.revenue.raw_progress_percent(), 1)));
    let current = move || metrics.with(|m| format_currency(m.revenue.current));
    let target = move || metrics.with(|m| format_currency(m.revenue.target));
    let arc = format!("M 10 100 A {r} {r} 0 0 1 190 100", r = GAUGE_RADIUS);

    view! {
        <div class="gauge">
            <div class="gauge__header">
                <h3 class="gauge__title">"Progresso Faturamento"</h3>
                <div class="gauge__meta">
                    <span class="gauge__meta-label">"Meta Total"</span>
                    <span class="gauge__meta-value">{target}</span>
                </div>
            </div>
            <svg class="gauge__svg" viewBox="0 0 200 110" aria-hidden="true">
                <path d=arc.clone() class="gauge__track" fill="none" stroke-width="20"/>
                <path
                    d=arc
                    class="gauge__fill"
                    fill="none"
                    stroke-width="20"
                    stroke-dasharray=move || dash(filled(), arc_length)
                />
            </svg>
            <div class="gauge__center">
                <span class="gauge__caption">"Atingido"</span>
                <span class="gauge__percent">{reached}</span>
                <span class="gauge__amount">{current}</span>
            </div>
            <div class="gauge__scale">
                <span>"R$ 0"</span>
                <span>"100%"</span>
            </div>
        </div>
    }
}

#[component]
pub fn ShareDonut(#[prop(into)] metrics: Signal<MetricSet>) -> impl IntoView {
    let circumference = 2.0 * std::f64::consts::PI * DONUT_RADIUS;
    let slices = move || metrics.with(share_donut);
    let target = move || metrics.with(|m| format!("Meta: {}%", format_share(m.share.target)));
    let current = move || metrics.with(|m| format!("{}%", format_share(m.share.current)));
    let legend = move || {
        let s = slices();
        format!(
            "Drinks {}% · Outros {}%",
            format_fixed(s.filled, 2),
            format_fixed(s.rest, 2)
        )
    };

    view! {
        <div class="donut">
            <div class="donut__header">
                <h3 class="donut__title">"Peso dos Drinks"</h3>
                <span class="donut__meta">{target}</span>
            </div>
            <svg class="donut__svg" viewBox="0 0 200 200" aria-hidden="true">
                <circle cx="100" cy="100" r="70" class="donut__track" fill="none" stroke-width="20"/>
                <circle
                    cx="100"
                    cy="100"
                    r="70"
                    class="donut__fill"
                    fill="none"
                    stroke-width="20"
                    transform="rotate(-90 100 100)"
                    stroke-dasharray=move || dash(slices().filled, circumference)
                />
            </svg>
            <div class="donut__center">
                <span class="donut__value">{current}</span>
                <span class="donut__caption">"Realizado"</span>
            </div>
            <div class="donut__legend">{legend}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dash_is_bounded_by_length() {
        assert_eq!(dash(0.0, 100.0), "0.00 100.00");
        assert_eq!(dash(50.0, 100.0), "50.00 100.00");
        assert_eq!(dash(150.0, 100.0), "100.00 100.00");
        assert_eq!(dash(-10.0, 100.0), "0.00 100.00");
    }
}
