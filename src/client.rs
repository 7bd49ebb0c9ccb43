//! EcoAdvice API client
//!
//! Wraps the three backend endpoints: home-profile creation and fetch
//! (plain JSON), and the streaming advice endpoint (SSE).

use futures::StreamExt;

use crate::config::AdviceConfig;
use crate::error::AdviceError;
use crate::sse::{self, StreamEnd};
use crate::types::{HomeProfile, Recommendation};

/// Client for the EcoAdvice home energy API
#[derive(Debug, Clone)]
pub struct AdviceClient {
    client: reqwest::Client,
    config: AdviceConfig,
}

impl AdviceClient {
    /// Create a client for the given configuration.
    ///
    /// Only a connect timeout is set; the advice stream itself has no
    /// deadline, since the backend emits recommendations for as long as the
    /// model keeps producing them. Callers wanting a bound apply their own
    /// timeout around the invocation.
    pub fn new(config: AdviceConfig) -> Result<Self, AdviceError> {
        let client = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(10))
            .build()?;
        Ok(Self { client, config })
    }

    /// Create a client from the environment and config file.
    pub fn from_env() -> Result<Self, AdviceError> {
        Self::new(AdviceConfig::resolve(None)?)
    }

    pub fn config(&self) -> &AdviceConfig {
        &self.config
    }

    /// Create a home profile; returns the stored profile with its assigned id.
    pub async fn create_home(&self, home: &HomeProfile) -> Result<HomeProfile, AdviceError> {
        let response = self
            .client
            .post(self.config.homes_url())
            .json(home)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response, "Failed to create home profile").await);
        }
        Ok(response.json().await?)
    }

    /// Fetch a stored home profile by id.
    pub async fn get_home(&self, home_id: &str) -> Result<HomeProfile, AdviceError> {
        let response = self.client.get(self.config.home_url(home_id)).send().await?;

        if !response.status().is_success() {
            return Err(api_error(response, "Failed to get home profile").await);
        }
        Ok(response.json().await?)
    }

    /// Stream energy-saving recommendations for a home.
    ///
    /// `on_recommendation` fires once per recommendation, in arrival order,
    /// inline with the processing loop. `on_complete` fires exactly once, as
    /// the final callback on every exit path. `on_error` fires at most once,
    /// always before `on_complete`, when the stream fails — either a
    /// transport problem or an explicit `error` message from the server.
    /// Errors are delivered through the callbacks only; this method never
    /// returns one.
    pub async fn stream_advice<R, C, E>(
        &self,
        home_id: &str,
        mut on_recommendation: R,
        on_complete: C,
        on_error: Option<E>,
    ) where
        R: FnMut(Recommendation),
        C: FnOnce(),
        E: FnOnce(String),
    {
        match self.run_advice_stream(home_id, &mut on_recommendation).await {
            Ok(end) => {
                if end == StreamEnd::Disconnected {
                    tracing::debug!("advice stream closed by server without complete message");
                }
                on_complete();
            }
            Err(err) => {
                tracing::error!("advice stream failed: {}", err);
                if let Some(on_error) = on_error {
                    on_error(err.to_string());
                }
                on_complete();
            }
        }
    }

    async fn run_advice_stream<R>(
        &self,
        home_id: &str,
        on_recommendation: &mut R,
    ) -> Result<StreamEnd, AdviceError>
    where
        R: FnMut(Recommendation),
    {
        let response = self
            .client
            .post(self.config.advice_url(home_id))
            .header("Accept", "text/event-stream")
            .header("Cache-Control", "no-cache")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response, "Failed to get advice").await);
        }

        let chunks = response
            .bytes_stream()
            .map(|item| item.map_err(AdviceError::from));
        sse::drive(Box::pin(chunks), on_recommendation).await
    }
}

/// Build an [`AdviceError::Api`] from a non-success response.
///
/// Prefers the `detail` field of a JSON error body (the backend's error
/// shape), falling back to the HTTP status.
async fn api_error(response: reqwest::Response, context: &str) -> AdviceError {
    let status = response.status();
    let detail = response
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|body| {
            body.get("detail")
                .and_then(|d| d.as_str())
                .map(str::to_string)
        });

    AdviceError::Api {
        status: status.as_u16(),
        message: detail.unwrap_or_else(|| format!("{}: HTTP {}", context, status)),
    }
}
