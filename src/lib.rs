use leptos::*;
use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::config::{DashboardConfig, init_config};
use crate::infrastructure::services::{BrowserTimeProvider, ConsoleLogger};
use crate::presentation::App;

pub mod application;
pub mod domain;
pub mod global_state;
pub mod infrastructure;
pub mod macros;
pub mod presentation;

/// Browser entry point: install logging and configuration, then mount the
/// timeline.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let logger = if cfg!(debug_assertions) {
        ConsoleLogger::new_development()
    } else {
        ConsoleLogger::new_production()
    };
    domain::logging::init_logger(Box::new(logger));
    domain::logging::init_time_provider(Box::new(BrowserTimeProvider::new()));

    let query = gloo::utils::window().location().search().unwrap_or_default();
    let settings = DashboardConfig::default().with_query(&query);
    get_logger().info(
        LogComponent::Presentation("Initialize"),
        &format!(
            "🚀 Chart timeline starting (api: {}, symbol: {})",
            settings.base_url(),
            settings.default_selector()
        ),
    );
    init_config(settings);

    mount_to_body(|| view! { <App /> });
}
