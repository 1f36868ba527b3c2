//! App Context

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use thiserror::Error;

use crate::{
    api::{DogCeoClient, ImagesApi, PetsApi, ReqresClient},
    config::api::ApiConfig,
    flows::{AddPetFlow, FeaturedFlow},
};

/// Errors raised while building the application context.
#[derive(Debug, Error)]
pub enum AppInitError {
    /// The HTTP client could not be built.
    #[error("failed to build http client")]
    HttpClient(#[source] reqwest::Error),
}

/// The outbound services a session depends on.
#[derive(Clone)]
pub struct AppContext {
    /// Pet submission endpoint
    pub pets: Arc<dyn PetsApi>,

    /// Random image endpoint
    pub images: Arc<dyn ImagesApi>,
}

impl AppContext {
    /// Build the context from API configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn from_config(config: &ApiConfig) -> Result<Self, AppInitError> {
        let http = config.http_client().map_err(AppInitError::HttpClient)?;

        Ok(Self {
            pets: Arc::new(ReqresClient::new(
                http.clone(),
                config.submit_url.clone(),
                config.api_key.clone(),
            )),
            images: Arc::new(DogCeoClient::new(http, config.random_image_url.clone())),
        })
    }

    /// Flow for adding pets through the configured submission endpoint.
    pub fn add_pet_flow(&self) -> AddPetFlow {
        AddPetFlow::new(Arc::clone(&self.pets))
    }

    /// Flow for loading the featured image.
    pub fn featured_flow(&self) -> FeaturedFlow {
        FeaturedFlow::new(Arc::clone(&self.images))
    }
}

impl Debug for AppContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}
