use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;

use super::error::BackendError;
use super::public::{BackendInfo, ChatReply, ChatRequest, DatabasePreview};
use crate::chat::SessionMode;
use crate::core::AppConfig;

/// Anything that can answer a chat prompt on behalf of a session.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn send(
        &self,
        mode: SessionMode,
        request: &ChatRequest,
    ) -> Result<ChatReply, BackendError>;
}

#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
    timeout: Option<Duration>,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.backend_url).timeout(config.request_timeout)
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint_url(&self, mode: SessionMode) -> String {
        format!("{}{}", self.base_url, mode.endpoint_path())
    }

    /// Fetch the backend's welcome document from `GET /`.
    pub async fn info(&self) -> Result<BackendInfo> {
        let url = format!("{}/", self.base_url);
        let info = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to reach backend at {}", url))?
            .error_for_status()?
            .json()
            .await
            .context("Backend info was not valid JSON")?;
        Ok(info)
    }

    /// Fetch the non-sensitive customer summary from `GET /database/preview`.
    pub async fn database_preview(&self) -> Result<DatabasePreview> {
        let url = format!("{}/database/preview", self.base_url);
        let preview = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to reach backend at {}", url))?
            .error_for_status()?
            .json()
            .await
            .context("Database preview was not valid JSON")?;
        Ok(preview)
    }
}

#[async_trait]
impl ChatBackend for HttpBackend {
    async fn send(
        &self,
        mode: SessionMode,
        request: &ChatRequest,
    ) -> Result<ChatReply, BackendError> {
        let url = self.endpoint_url(mode);
        tracing::debug!("POST {}", url);

        let mut builder = self.client.post(&url).json(request);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        // Only a failure to get a response at all, or an elapsed
        // timeout, counts as transport. The status code is not
        // inspected: an error status with a well formed reply body is
        // still a reply.
        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                BackendError::Transport(e)
            } else {
                BackendError::InvalidResponse(e.to_string())
            }
        })?;

        let reply = serde_json::from_slice::<ChatReply>(&body).inspect_err(|e| {
            tracing::warn!("Unparseable reply from {} ({}): {}", url, status, e)
        })?;

        Ok(reply)
    }
}
