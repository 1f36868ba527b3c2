//! Featured image flow.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use pawmate::display::FeaturedImage;
use rand::seq::SliceRandom;
use tracing::{debug, warn};

use crate::api::ImagesApi;

/// Image shown when the random image cannot be fetched.
pub const FALLBACK_IMAGE: &str =
    "https://images.dog.ceo/breeds/retriever-golden/n02099601_3004.jpg";

/// Captions shown on the featured entry.
pub const QUOTES: [&str; 4] = [
    "Every paw has a story 🐾",
    "A home is better with a pet ❤️",
    "Small paws, big love 🐶",
    "Your new best friend awaits 💛",
];

/// Loads the featured showcase entry. Every call issues a new request.
#[derive(Clone)]
pub struct FeaturedFlow {
    api: Arc<dyn ImagesApi>,
}

impl FeaturedFlow {
    /// Create a flow fetching through `api`.
    pub fn new(api: Arc<dyn ImagesApi>) -> Self {
        Self { api }
    }

    /// Fetch a random image with a random caption, substituting [`FALLBACK_IMAGE`] on failure.
    pub async fn load(&self) -> FeaturedImage {
        let caption = random_quote();

        match self.api.random_image().await {
            Ok(image) => {
                debug!(%image, "featured image loaded");

                FeaturedImage::new(image, caption)
            }
            Err(error) => {
                warn!(%error, "featured image fetch failed, using fallback");

                FeaturedImage::fallback(FALLBACK_IMAGE, caption)
            }
        }
    }
}

impl Debug for FeaturedFlow {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("FeaturedFlow").finish_non_exhaustive()
    }
}

fn random_quote() -> &'static str {
    QUOTES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or("Every paw has a story 🐾")
}

#[cfg(test)]
mod tests {
    use crate::api::{FetchError, MockImagesApi};

    use super::*;

    #[tokio::test]
    async fn fetched_image_is_used() {
        let mut api = MockImagesApi::new();

        api.expect_random_image()
            .times(1)
            .returning(|| Ok("https://images.dog.ceo/breeds/pug/n02110958_1.jpg".to_string()));

        let featured = FeaturedFlow::new(Arc::new(api)).load().await;

        assert_eq!(
            featured.image,
            "https://images.dog.ceo/breeds/pug/n02110958_1.jpg"
        );
        assert!(!featured.fallback);
        assert!(QUOTES.contains(&featured.caption.as_str()));
    }

    #[tokio::test]
    async fn failed_fetch_falls_back() {
        let mut api = MockImagesApi::new();

        api.expect_random_image()
            .times(1)
            .returning(|| Err(FetchError::MissingImage));

        let featured = FeaturedFlow::new(Arc::new(api)).load().await;

        assert_eq!(featured.image, FALLBACK_IMAGE);
        assert!(featured.fallback);
    }

    #[tokio::test]
    async fn every_load_issues_a_request() {
        let mut api = MockImagesApi::new();

        api.expect_random_image()
            .times(2)
            .returning(|| Ok("https://example.com/dog.jpg".to_string()));

        let flow = FeaturedFlow::new(Arc::new(api));

        flow.load().await;
        flow.load().await;
    }
}
