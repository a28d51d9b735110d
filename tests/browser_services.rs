#![cfg(target_arch = "wasm32")]
use chart_timeline_wasm::domain::logging::{LogComponent, LogLevel, Logger, TimeProvider};
use chart_timeline_wasm::infrastructure::services::{BrowserTimeProvider, ConsoleLogger};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn browser_clock_formats_time_of_day() {
    let clock = BrowserTimeProvider::new();
    let now = clock.current_timestamp();
    assert!(now > 0);
    let formatted = clock.format_timestamp(now);
    assert_eq!(formatted.len(), "00:00:00.000".len());
}

#[wasm_bindgen_test]
fn console_logger_writes_every_level() {
    let logger = ConsoleLogger::new(LogLevel::Trace);
    logger.trace(LogComponent::Presentation("Test"), "trace");
    logger.info(LogComponent::Presentation("Test"), "info");
    logger.warn(LogComponent::Presentation("Test"), "warn");
    logger.error(LogComponent::Presentation("Test"), "error");
}
