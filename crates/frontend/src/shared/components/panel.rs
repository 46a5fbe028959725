//! Панель: thaw `Card` с анимацией появления `card-appear`

use leptos::prelude::*;
use thaw::Card;

/// Dashboard panel. `delay_ms` staggers the entrance of sibling panels.
#[component]
pub fn Panel(
    #[prop(optional)]
    delay_ms: u32,
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);
    let class = if class.is_empty() {
        "panel".to_string()
    } else {
        format!("panel {}", class)
    };

    view! {
        <Card class=class attr:style=style>
            {children()}
        </Card>
    }
}
