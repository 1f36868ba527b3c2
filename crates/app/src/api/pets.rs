//! Pet submission client.

use async_trait::async_trait;
use mockall::automock;
use num_traits::ToPrimitive;
use pawmate::pets::NewPet;
use reqwest::{Client, header::CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::errors::SubmissionError;

/// Header carrying the caller-supplied API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// JSON body sent when a pet is submitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitPetRequest {
    /// Pet name
    pub pet_name: String,

    /// Breed
    pub breed: String,

    /// Age in years
    pub age: u32,

    /// Adoption price
    pub price: f64,

    /// Image URI
    pub image: String,
}

impl From<&NewPet> for SubmitPetRequest {
    fn from(pet: &NewPet) -> Self {
        Self {
            pet_name: pet.name.clone(),
            breed: pet.breed.clone(),
            age: pet.age,
            price: pet.price.to_f64().unwrap_or_default(),
            image: pet.image.clone(),
        }
    }
}

/// Remote endpoint that accepts new pet records.
#[automock]
#[async_trait]
pub trait PetsApi: Send + Sync {
    /// Submit a pet record. Any 2xx response is success; the response body is ignored.
    async fn submit_pet(&self, pet: &SubmitPetRequest) -> Result<(), SubmissionError>;
}

/// Posts pet records to a reqres-style mock REST endpoint.
#[derive(Debug, Clone)]
pub struct ReqresClient {
    http: Client,
    url: String,
    api_key: Option<String>,
}

impl ReqresClient {
    /// Create a client posting to `url`, sending `api_key` when one is configured.
    #[must_use]
    pub fn new(http: Client, url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http,
            url: url.into(),
            api_key,
        }
    }
}

#[async_trait]
impl PetsApi for ReqresClient {
    async fn submit_pet(&self, pet: &SubmitPetRequest) -> Result<(), SubmissionError> {
        let mut request = self
            .http
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .json(pet);

        if let Some(api_key) = &self.api_key {
            request = request.header(API_KEY_HEADER, api_key);
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            debug!(%status, "pet submission accepted");

            return Ok(());
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(|body| body.error);

        Err(SubmissionError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}
