use once_cell::sync::OnceCell;
use std::str::FromStr;

use crate::domain::gallery::SymbolSelector;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT_MS: u32 = 30_000;

/// Query parameter that picks the initial selector, e.g. `?symbol=all`.
pub const SELECTOR_QUERY_PARAM: &str = "symbol";

/// Runtime settings of the dashboard.
///
/// The API base URL can be baked in at build time through the
/// `CHART_API_BASE_URL` environment variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    base_url: String,
    timeout_ms: u32,
    default_selector: SymbolSelector,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: option_env!("CHART_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL).to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            default_selector: SymbolSelector::default(),
        }
    }
}

impl DashboardConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::default().with_base_url(base_url)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_default_selector(mut self, selector: SymbolSelector) -> Self {
        self.default_selector = selector;
        self
    }

    /// Applies `?symbol=<selector>` from a location query string, if valid.
    pub fn with_query(self, query: &str) -> Self {
        match selector_from_query(query) {
            Some(selector) => self.with_default_selector(selector),
            None => self,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    pub fn default_selector(&self) -> SymbolSelector {
        self.default_selector
    }

    pub fn charts_url(&self, selector: SymbolSelector) -> String {
        format!("{}/charts/{}", self.base_url, selector.as_path())
    }

    /// Resolves a relative image path against the API base URL. Absolute
    /// URLs are returned unchanged.
    pub fn image_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}/{}", self.base_url, path.trim_start_matches('/'))
        }
    }
}

pub fn selector_from_query(query: &str) -> Option<SymbolSelector> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == SELECTOR_QUERY_PARAM)
        .and_then(|(_, value)| SymbolSelector::from_str(value).ok())
}

static CONFIG: OnceCell<DashboardConfig> = OnceCell::new();

/// Install the process-wide configuration. Later calls are ignored.
pub fn init_config(config: DashboardConfig) {
    let _ = CONFIG.set(config);
}

pub fn config() -> &'static DashboardConfig {
    CONFIG.get_or_init(DashboardConfig::default)
}
