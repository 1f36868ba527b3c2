//! Application configuration module

use std::path::PathBuf;

use clap::Parser;

use crate::config::{api::ApiConfig, logging::LoggingConfig};

pub mod api;
pub mod logging;

pub use api::{DEFAULT_RANDOM_IMAGE_URL, DEFAULT_SUBMIT_URL};
pub use logging::LogFormat;

/// Paw-Mate session configuration
#[derive(Debug, Parser)]
#[command(name = "pawmate", about = "Paw-Mate pet storefront session", long_about = None)]
pub struct AppConfig {
    /// Outbound API settings.
    #[command(flatten)]
    pub api: ApiConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Read session commands from this file instead of standard input
    #[arg(long, env = "PAWMATE_SCRIPT")]
    pub script: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
