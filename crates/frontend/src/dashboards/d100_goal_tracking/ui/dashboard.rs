use super::edit_modal::{GoalEditorModal, GoalEditorViewModel};
use super::gauges::{RevenueGauge, ShareDonut};
use super::kpi_card::KpiCard;
use super::status_alert::StatusAlert;
use crate::dashboards::d100_goal_tracking::export;
use crate::shared::components::{Button, Panel};
use crate::shared::icons::icon;
use chrono::{Datelike, Local};
use contracts::dashboards::d100_goal_tracking::summary::{
    drinks_volume_caption, revenue_status, share_caption,
};
use contracts::dashboards::d100_goal_tracking::{
    period_label_for_date, DashboardConfig, DashboardState, Metric, MetricKey, MetricSet,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Goal tracking dashboard component
#[component]
pub fn GoalTrackingDashboard() -> impl IntoView {
    let config = use_context::<DashboardConfig>().unwrap_or_default();
    let today = Local::now().date_naive();

    let state = RwSignal::new(DashboardState::new(
        MetricSet::default(),
        period_label_for_date(today),
    ));
    let metrics = Memo::new(move |_| state.with(|s| s.metrics.clone()));
    let period_label = Memo::new(move |_| state.with(|s| s.period_label.clone()));
    let editor = GoalEditorViewModel::new(state);
    let (exporting, set_exporting) = signal(false);

    let metric_signal = move |key: MetricKey| -> Signal<Metric> {
        Signal::derive(move || metrics.with(|m| m.get(key).clone()))
    };

    let export_settings = config.export.clone();
    let on_export = Callback::new(move |_| {
        if exporting.get_untracked() {
            return;
        }
        set_exporting.set(true);
        let settings = export_settings.clone();
        spawn_local(async move {
            match export::export_dashboard_pdf(&settings).await {
                Ok(()) => log::info!("PDF saved as {}", settings.filename),
                Err(e) => {
                    log::error!("Error generating PDF: {}", e);
                    export::alert("Erro ao gerar PDF");
                }
            }
            set_exporting.set(false);
        });
    });

    let on_edit = Callback::new(move |_| editor.open_command());

    let projection = move || metrics.with(|m| revenue_status(m).projection());
    let drinks_caption = move || metrics.with(drinks_volume_caption);
    let share_text = move || metrics.with(share_caption);

    view! {
        <div id=config.export.root_element_id.clone() class="goal-dashboard">
            <header class="goal-header">
                <div class="goal-header__inner">
                    <div class="goal-header__brand">
                        <div class="goal-header__logo">{config.brand.clone()}</div>
                        <span class="goal-header__subtitle">{config.subtitle.clone()}</span>
                    </div>

                    <div class="goal-header__actions">
                        <Button variant="secondary" class="no-print" title="Editar Dados" on_click=on_edit>
                            {icon("edit")}
                            <span class="button__text">"Editar"</span>
                        </Button>
                        <Button
                            class="no-print"
                            title="Baixar PDF"
                            disabled=exporting
                            on_click=on_export
                        >
                            {icon("download")}
                            <span class="button__text">"PDF"</span>
                        </Button>
                        <div class="goal-header__period">{move || period_label.get()}</div>
                    </div>
                </div>
            </header>

            <main class="goal-main">
                <StatusAlert metrics=metrics />

                <div class="kpi-grid">
                    {MetricKey::ALL
                        .into_iter()
                        .enumerate()
                        .map(|(i, key)| {
                            let delay = i as u32 * 80;
                            view! { <KpiCard metric_key=key metric=metric_signal(key) delay_ms=delay /> }
                        })
                        .collect_view()}
                </div>

                <div class="deep-dive">
                    <Panel class="deep-dive__main" delay_ms=320>
                        <RevenueGauge metrics=metrics />
                        <div class="deep-dive__notes">
                            <div class="note note--accent">
                                <span class="note__label">"PROJEÇÃO"</span>
                                <p>{projection}</p>
                            </div>
                            <div class="note">
                                <span class="note__label">"VOLUME DRINKS"</span>
                                <p>{drinks_caption}</p>
                            </div>
                        </div>
                    </Panel>

                    <Panel class="deep-dive__side" delay_ms=400>
                        <ShareDonut metrics=metrics />
                        <div class="deep-dive__hint">
                            {icon("alert")}
                            <p>{share_text}</p>
                        </div>
                    </Panel>
                </div>
            </main>

            <footer class="goal-footer">
                <p>{format!("© {} {} Bar.", today.year(), config.brand)}</p>
            </footer>
        </div>

        <Show when=move || editor.is_open()>
            <GoalEditorModal vm=editor />
        </Show>
    }
}
