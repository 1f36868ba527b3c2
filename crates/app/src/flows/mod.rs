//! User-facing flows that combine the stores with the outbound services.

pub mod add_pet;
pub mod featured;

pub use add_pet::{AddPetError, AddPetFlow, PLACEHOLDER_IMAGE};
pub use featured::{FALLBACK_IMAGE, FeaturedFlow, QUOTES};
