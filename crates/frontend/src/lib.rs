//! Goal tracking dashboard, client-side rendered with Leptos.

pub mod app;
pub mod dashboards;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

/// Sets up logging and the panic hook, then mounts the app on `<body>`.
pub fn mount_dashboard() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    log::debug!("Mounting goal tracking dashboard");

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    mount_dashboard();
}
