use crate::dashboards::GoalTrackingDashboard;
use contracts::dashboards::d100_goal_tracking::{load_config, DashboardConfig};
use leptos::prelude::*;

/// Id of the optional JSON config block in the host page.
const CONFIG_ELEMENT_ID: &str = "dashboard-config";

/// Reads the host page's config override, falling back to the embedded default.
fn read_host_config() -> DashboardConfig {
    let override_json = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match load_config(override_json.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{:#}; using default dashboard config", e);
            DashboardConfig::default()
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(read_host_config());

    view! {
        <GoalTrackingDashboard />
    }
}
