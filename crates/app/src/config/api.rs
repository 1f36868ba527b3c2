//! Outbound API Config

use std::time::Duration;

use clap::Args;
use reqwest::Client;

/// Mock REST endpoint that receives submitted pets.
pub const DEFAULT_SUBMIT_URL: &str = "https://reqres.in/api/users";

/// Endpoint serving a random dog image.
pub const DEFAULT_RANDOM_IMAGE_URL: &str = "https://dog.ceo/api/breeds/image/random";

/// Outbound API settings.
#[derive(Debug, Args)]
pub struct ApiConfig {
    /// API key sent with pet submissions
    #[arg(long, env = "REQRES_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Endpoint pets are submitted to
    #[arg(long, env = "PAWMATE_SUBMIT_URL", default_value = DEFAULT_SUBMIT_URL)]
    pub submit_url: String,

    /// Endpoint serving random images
    #[arg(long, env = "PAWMATE_RANDOM_IMAGE_URL", default_value = DEFAULT_RANDOM_IMAGE_URL)]
    pub random_image_url: String,

    /// Request timeout in seconds; the transport default applies when unset
    #[arg(long, env = "PAWMATE_HTTP_TIMEOUT_SECONDS")]
    pub http_timeout_seconds: Option<u64>,
}

impl ApiConfig {
    /// Build the HTTP client shared by both outbound services.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn http_client(&self) -> Result<Client, reqwest::Error> {
        let mut builder = Client::builder();

        if let Some(seconds) = self.http_timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }

        builder.build()
    }
}
