//! Outbound HTTP services.

pub mod errors;
pub mod images;
pub mod pets;

pub use errors::{FetchError, SubmissionError};
pub use images::{DogCeoClient, ImagesApi, MockImagesApi};
pub use pets::{MockPetsApi, PetsApi, ReqresClient, SubmitPetRequest};
