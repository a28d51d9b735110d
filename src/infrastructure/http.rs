use futures::FutureExt;
use futures::future::{Either, LocalBoxFuture, select};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde_json::Value;

use crate::domain::errors::{TransportError, TransportResult};
use crate::domain::gallery::{ChartSnapshotRepository, RawSnapshot, SymbolSelector};
use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::config::DashboardConfig;
use crate::log_warn;

/// gloo-net client for the chart backend.
#[derive(Debug, Clone)]
pub struct ChartApiClient {
    config: DashboardConfig,
}

impl ChartApiClient {
    pub fn new(config: DashboardConfig) -> Self {
        Self { config }
    }

    async fn get_json(url: String) -> TransportResult<Value> {
        get_logger().info(
            LogComponent::Infrastructure("ChartApi"),
            &format!("📡 GET {}", url),
        );

        let response = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| TransportError::Request(format!("{:?}", e)))?;

        if !response.ok() {
            return Err(TransportError::Status {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| TransportError::MalformedBody(format!("{:?}", e)))
    }
}

impl ChartSnapshotRepository for ChartApiClient {
    fn fetch_snapshot(
        &self,
        selector: SymbolSelector,
    ) -> LocalBoxFuture<'static, TransportResult<RawSnapshot>> {
        let url = self.config.charts_url(selector);
        let timeout_ms = self.config.timeout_ms();

        async move {
            let request = Self::get_json(url);
            let timeout = TimeoutFuture::new(timeout_ms);
            futures::pin_mut!(request, timeout);

            let result = match select(request, timeout).await {
                Either::Left((body, _)) => {
                    body.and_then(|body| RawSnapshot::from_json(selector, body))
                }
                Either::Right(_) => Err(TransportError::Timeout(timeout_ms)),
            };

            match &result {
                Ok(snapshot) => get_logger().info(
                    LogComponent::Infrastructure("ChartApi"),
                    &format!("✅ '{}' snapshot with {} dates", selector, snapshot.len()),
                ),
                Err(error) => {
                    log_warn!(
                        LogComponent::Infrastructure("ChartApi"),
                        "❌ '{}' fetch failed: {}",
                        selector,
                        error
                    );
                }
            }
            result
        }
        .boxed_local()
    }
}
