mod config;
pub mod logging;

pub use config::{AppConfig, DEFAULT_BACKEND_URL, DEFAULT_USER};
