use std::env;
use std::time::Duration;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_USER: &str = "Alice";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub backend_url: String,
    pub user: String,
    /// `None` means requests wait on the backend indefinitely.
    pub request_timeout: Option<Duration>,
}

impl AppConfig {
    pub fn with_backend_url(mut self, backend_url: Option<String>) -> Self {
        if let Some(url) = backend_url {
            self.backend_url = url;
        }
        self
    }
}

fn parse_timeout(raw: &str) -> Option<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(0) => None,
        Ok(secs) => Some(Duration::from_secs(secs)),
        Err(e) => {
            tracing::warn!("Ignoring invalid FIREWALL_CHAT_TIMEOUT_SECS {:?}: {}", raw, e);
            None
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let backend_url = env::var("FIREWALL_CHAT_BACKEND_URL")
            .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
        let user = env::var("FIREWALL_CHAT_USER").unwrap_or_else(|_| DEFAULT_USER.to_string());
        let request_timeout = env::var("FIREWALL_CHAT_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| parse_timeout(&raw));

        Self {
            backend_url,
            user,
            request_timeout,
        }
    }
}
