//! Random image client.

use async_trait::async_trait;
use mockall::automock;
use reqwest::Client;
use serde::Deserialize;

use crate::api::errors::FetchError;

/// Remote endpoint that serves a random dog image.
#[automock]
#[async_trait]
pub trait ImagesApi: Send + Sync {
    /// Fetch the URI of a random image.
    async fn random_image(&self) -> Result<String, FetchError>;
}

/// Fetches random images from a dog.ceo-style endpoint returning `{ "message": <uri> }`.
#[derive(Debug, Clone)]
pub struct DogCeoClient {
    http: Client,
    url: String,
}

impl DogCeoClient {
    /// Create a client fetching from `url`.
    #[must_use]
    pub fn new(http: Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }
}

#[async_trait]
impl ImagesApi for DogCeoClient {
    async fn random_image(&self) -> Result<String, FetchError> {
        let response = self.http.get(&self.url).send().await?.error_for_status()?;

        let parsed: RandomImageResponse = response.json().await?;

        parsed
            .message
            .filter(|uri| !uri.trim().is_empty())
            .ok_or(FetchError::MissingImage)
    }
}

#[derive(Debug, Deserialize)]
struct RandomImageResponse {
    message: Option<String>,
}
