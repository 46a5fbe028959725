use super::view_model::GoalEditorViewModel;
use crate::shared::components::Button;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::dashboards::d100_goal_tracking::{MetricField, MetricKey, Unit};
use leptos::prelude::*;
use std::sync::Arc;

/// Form groups in the order they appear in the modal.
const GROUPS: [(MetricKey, &str); 4] = [
    (MetricKey::Revenue, "Faturamento"),
    (MetricKey::Drinks, "Venda de Drinks"),
    (MetricKey::Share, "Participação (Share)"),
    (MetricKey::Ticket, "Ticket Médio"),
];

fn input_mode(unit: Unit) -> &'static str {
    match unit {
        Unit::Currency | Unit::Count => "numeric",
        Unit::Percent => "decimal",
    }
}

fn placeholder(unit: Unit) -> &'static str {
    match unit {
        Unit::Currency => "R$ 0,00",
        Unit::Count => "0",
        Unit::Percent => "0,00",
    }
}

#[component]
fn MetricInput(
    vm: GoalEditorViewModel,
    metric_key: MetricKey,
    field: MetricField,
    label: &'static str,
) -> impl IntoView {
    let unit = metric_key.unit();
    let id = format!(
        "{}-{}",
        metric_key.as_str(),
        match field {
            MetricField::Current => "current",
            MetricField::Target => "target",
        }
    );

    view! {
        <div class="form-group">
            <label for=id.clone()>{label}</label>
            <input
                type="text"
                id=id
                inputmode=input_mode(unit)
                placeholder=placeholder(unit)
                prop:value=move || vm.field_text(metric_key, field)
                on:input=move |ev| vm.set_field(metric_key, field, event_target_value(&ev))
            />
        </div>
    }
}

#[component]
fn MetricGroup(vm: GoalEditorViewModel, metric_key: MetricKey, title: &'static str) -> impl IntoView {
    view! {
        <div class="edit-group">
            <div class="edit-group__title">
                {icon(metric_key.icon_name())}
                <h3>{title}</h3>
            </div>
            <div class="edit-group__fields">
                <MetricInput vm=vm metric_key=metric_key field=MetricField::Current label="Realizado (Atual)" />
                <MetricInput vm=vm metric_key=metric_key field=MetricField::Target label="Meta (Alvo)" />
            </div>
        </div>
    }
}

#[component]
pub fn GoalEditorModal(vm: GoalEditorViewModel) -> impl IntoView {
    let on_close = Callback::new(move |_| vm.cancel_command());
    let footer: ChildrenFn = Arc::new(move || {
        view! {
            <Button variant="ghost" on_click=Callback::new(move |_| vm.cancel_command())>
                "Cancelar"
            </Button>
            <Button on_click=Callback::new(move |_| vm.save_command())>
                {icon("save")}
                "Salvar"
            </Button>
        }
        .into_any()
    });
    let title = "Atualizar Métricas".to_string();

    view! {
        <Modal title=title on_close=on_close footer=footer>
            <div class="form-group">
                <label for="period-label">"Período"</label>
                <input
                    type="text"
                    id="period-label"
                    prop:value=move || vm.period_label()
                    on:input=move |ev| vm.set_period_label(event_target_value(&ev))
                />
            </div>
            {GROUPS
                .into_iter()
                .map(|(key, title)| view! { <MetricGroup vm=vm metric_key=key title=title /> })
                .collect_view()}
        </Modal>
    }
}
