use std::sync::Arc;

use anyhow::{Result, bail};
use serde_json::json;

use crate::backend::{ChatBackend, HttpBackend};
use crate::chat::{ChatSession, SessionMode, render};
use crate::core::AppConfig;

/// Two independent sessions sharing nothing but the HTTP client, the
/// way the storefront page hosts a standard and a protected widget.
pub fn sessions(config: &AppConfig, backend: Arc<dyn ChatBackend>) -> (ChatSession, ChatSession) {
    let standard = ChatSession::builder(SessionMode::Standard, Arc::clone(&backend))
        .user(&config.user)
        .build();
    let protected = ChatSession::builder(SessionMode::Protected, backend)
        .user(&config.user)
        .build();
    (standard, protected)
}

pub async fn run(config: &AppConfig, prompt: &str, json: bool) -> Result<()> {
    if prompt.trim().is_empty() {
        bail!("Prompt must not be empty");
    }

    let backend = Arc::new(HttpBackend::from_config(config));
    let (standard, protected) = sessions(config, backend);

    tokio::join!(standard.submit(prompt), protected.submit(prompt));

    if json {
        let out = json!({
            "standard": standard.snapshot(),
            "protected": protected.snapshot(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", render::conversation(&standard.messages(), standard.mode()));
        println!("\n{}\n", "-".repeat(40));
        println!("{}", render::conversation(&protected.messages(), protected.mode()));
    }

    Ok(())
}
