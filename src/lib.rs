use wasm_bindgen::prelude::*;

use crate::domain::logging::{get_logger, LogComponent};

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

/// Wire up panic reporting, the console logger, and the browser clock.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = Box::new(infrastructure::services::ConsoleLogger::new_development());
    domain::logging::init_logger(console_logger);

    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    get_logger().info(LogComponent::Ui("Initialize"), "🚀 dashboard runtime initialized");
}

/// Mount the dashboard with the default configuration.
#[wasm_bindgen]
pub fn mount_dashboard() {
    use leptos::*;
    mount_to_body(|| view! { <app::App/> });
}

/// Mount the dashboard with a JSON configuration object (see
/// `DashboardConfig`); unknown fields fall back to defaults.
#[wasm_bindgen]
pub fn mount_dashboard_with_config(config_json: &str) -> Result<(), JsValue> {
    use leptos::*;
    let config = config::DashboardConfig::from_json(config_json)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    mount_to_body(move || view! { <app::App config/> });
    Ok(())
}
