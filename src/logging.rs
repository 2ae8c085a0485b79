//! # Structured Logging Module
//!
//! Environment-aware structured logging for applications embedding presenters.
//! Library code only emits `tracing` events; installing a subscriber is left
//! to the host, which can call [`init_structured_logging`] once at startup.

use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging with environment-specific configuration
pub fn init_structured_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = get_environment();
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(get_log_level(&environment)));

        let layer = if use_json_format() {
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_ansi(false)
                .json()
                .with_filter(filter)
                .boxed()
        } else {
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_filter(filter)
                .boxed()
        };

        // A host application may already own the global subscriber
        if tracing_subscriber::registry().with(layer).try_init().is_err() {
            tracing::debug!("Global tracing subscriber already initialized - continuing with existing subscriber");
        }

        tracing::info!(environment = %environment, "Structured logging initialized");
    });
}

const ENVIRONMENT_VARS: [&str; 4] = ["GIFT_WRAP_ENV", "RAILS_ENV", "RACK_ENV", "APP_ENV"];

/// Get current environment from environment variables
fn get_environment() -> String {
    detect_environment(|name| std::env::var(name).ok())
}

/// First environment variable that is set wins
fn detect_environment(lookup: impl Fn(&str) -> Option<String>) -> String {
    ENVIRONMENT_VARS
        .iter()
        .find_map(|name| lookup(*name))
        .unwrap_or_else(|| "development".to_string())
}

/// Get log level based on environment
fn get_log_level(environment: &str) -> &'static str {
    match environment {
        "production" => "info",
        _ => "debug",
    }
}

fn use_json_format() -> bool {
    std::env::var("GIFT_WRAP_LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}
