//! Add-pet flow.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use pawmate::{
    catalog::PetCatalog,
    pets::Pet,
    validation::{PetForm, ValidationErrors, validate},
};
use thiserror::Error;
use tracing::{info, warn};

use crate::api::{PetsApi, SubmissionError, SubmitPetRequest};

/// Image used when a pet is added without one.
pub const PLACEHOLDER_IMAGE: &str = "https://images.dog.ceo/breeds/mix/n02107574_1024.jpg";

/// Why a pet was not added. The catalog is unchanged in every case.
#[derive(Debug, Error)]
pub enum AddPetError {
    /// The form failed validation; nothing was sent.
    #[error("invalid pet details: {0}")]
    Validation(#[from] ValidationErrors),

    /// The remote endpoint did not accept the record.
    #[error("failed to submit pet")]
    Submission(#[from] SubmissionError),
}

impl AddPetError {
    /// The banner message for a failed submission, or the joined field messages.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(errors) => errors.to_string(),
            Self::Submission(error) => error.user_message(),
        }
    }
}

/// Validates a form, submits it, and lists the pet once the submission succeeds.
#[derive(Clone)]
pub struct AddPetFlow {
    api: Arc<dyn PetsApi>,
}

impl AddPetFlow {
    /// Create a flow submitting through `api`.
    pub fn new(api: Arc<dyn PetsApi>) -> Self {
        Self { api }
    }

    /// Validate `form`, submit it with `image` (or the placeholder), then add it to `catalog`.
    ///
    /// The catalog identifier is always generated locally; anything the server assigns is
    /// discarded.
    ///
    /// # Errors
    ///
    /// - [`AddPetError::Validation`]: one or more fields are invalid.
    /// - [`AddPetError::Submission`]: the remote call failed.
    pub async fn submit(
        &self,
        catalog: &mut PetCatalog,
        form: &PetForm,
        image: Option<String>,
    ) -> Result<Pet, AddPetError> {
        let validated = validate(form)?;
        let new_pet = validated.with_image(image.unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()));

        if let Err(error) = self.api.submit_pet(&SubmitPetRequest::from(&new_pet)).await {
            warn!(%error, name = %new_pet.name, "pet submission failed");

            return Err(error.into());
        }

        let pet = catalog.add(new_pet);

        info!(id = %pet.id, name = %pet.name, "pet added to catalog");

        Ok(pet)
    }
}

impl Debug for AddPetFlow {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AddPetFlow").finish_non_exhaustive()
    }
}
