use std::sync::atomic::{AtomicU64, Ordering};

use reqwest::{Client, StatusCode};
use scene_engine::{BatchReport, InstructionDispatcher, SceneGraph};
use shared::protocol::{price_text, ConfigurationRequest, ConfigurationResponse};
use thiserror::Error;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{error, info, warn};

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/configure";

/// Text sink showing the configured product's price.
pub trait PriceDisplay {
    fn set_text(&mut self, text: String);
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PriceLabel {
    text: Option<String>,
}

impl PriceLabel {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl PriceDisplay for PriceLabel {
    fn set_text(&mut self, text: String) {
        self.text = Some(text);
    }
}

#[derive(Debug, Error)]
pub enum ConfigureError {
    #[error("configuration request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("configuration request failed with status {0}")]
    Status(StatusCode),
    #[error("failed to parse configuration response: {0}")]
    ResponseParseFailed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigureOutcome {
    Applied {
        request_id: u64,
        report: BatchReport,
        final_price: f64,
    },
    /// A newer configure call was issued before this response arrived.
    Superseded {
        request_id: u64,
        latest_request_id: u64,
    },
}

/// Drives a scene graph and a price display from the configuration service.
pub struct Configurator<G, D> {
    http: Client,
    endpoint: String,
    dispatcher: InstructionDispatcher,
    latest_request_id: AtomicU64,
    scene: Mutex<G>,
    price_display: Mutex<D>,
}

impl<G, D> Configurator<G, D>
where
    G: SceneGraph,
    D: PriceDisplay,
{
    pub fn new(endpoint: impl Into<String>, scene: G, price_display: D) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
            dispatcher: InstructionDispatcher::default(),
            latest_request_id: AtomicU64::new(0),
            scene: Mutex::new(scene),
            price_display: Mutex::new(price_display),
        }
    }

    pub fn with_dispatcher(mut self, dispatcher: InstructionDispatcher) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    pub async fn scene(&self) -> MutexGuard<'_, G> {
        self.scene.lock().await
    }

    pub async fn price_display(&self) -> MutexGuard<'_, D> {
        self.price_display.lock().await
    }

    pub fn into_parts(self) -> (G, D) {
        (self.scene.into_inner(), self.price_display.into_inner())
    }

    /// Sends `selection` to the service and applies the returned instructions.
    ///
    /// Request failures are logged and returned; they leave the scene and the
    /// price untouched. Responses overtaken by a later call are discarded, even
    /// when that later call itself fails.
    pub async fn configure(
        &self,
        selection: &ConfigurationRequest,
    ) -> Result<ConfigureOutcome, ConfigureError> {
        let request_id = self.latest_request_id.fetch_add(1, Ordering::SeqCst) + 1;
        info!(
            "configure: sending request_id={request_id} seat_color={} leg_style={}",
            selection.seat_color, selection.leg_style
        );

        let response = match self.fetch(selection).await {
            Ok(response) => response,
            Err(err) => {
                error!("configure: request_id={request_id} failed: {err}");
                return Err(err);
            }
        };

        let mut scene = self.scene.lock().await;
        let latest_request_id = self.latest_request_id.load(Ordering::SeqCst);
        if latest_request_id != request_id {
            warn!(
                "configure: discarding stale response request_id={request_id} latest={latest_request_id}"
            );
            return Ok(ConfigureOutcome::Superseded {
                request_id,
                latest_request_id,
            });
        }

        let report = self
            .dispatcher
            .apply_batch(&mut *scene, &response.update_list);
        self.price_display
            .lock()
            .await
            .set_text(price_text(response.final_price));
        drop(scene);

        info!(
            "configure: request_id={request_id} applied={} skipped={} final_price={}",
            report.applied,
            report.skipped.len(),
            response.final_price
        );
        Ok(ConfigureOutcome::Applied {
            request_id,
            report,
            final_price: response.final_price,
        })
    }

    async fn fetch(
        &self,
        selection: &ConfigurationRequest,
    ) -> Result<ConfigurationResponse, ConfigureError> {
        let response = self.http.post(self.endpoint.as_str()).json(selection).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ConfigureError::Status(status));
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
