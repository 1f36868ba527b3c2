//! Pets

use std::fmt::{Display, Formatter, Result as FmtResult};

use rust_decimal::Decimal;
use uuid::Uuid;

/// Image shown for the pet every catalog starts with.
pub const SEED_PET_IMAGE: &str =
    "https://images.dog.ceo/breeds/terrier-yorkshire/n02094433_7702.jpg";

/// Pet Identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PetId(String);

impl PetId {
    /// Wrap an existing identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh, time-ordered identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PetId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<&str> for PetId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PetId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A pet listed for adoption.
#[derive(Debug, Clone, PartialEq)]
pub struct Pet {
    /// Catalog identifier
    pub id: PetId,

    /// Display name
    pub name: String,

    /// Breed
    pub breed: String,

    /// Age in years
    pub age: u32,

    /// Adoption price
    pub price: Decimal,

    /// Image URI
    pub image: String,
}

impl Pet {
    /// Attach an identifier to a validated pet record.
    pub fn from_new(id: PetId, pet: NewPet) -> Self {
        let NewPet {
            name,
            breed,
            age,
            price,
            image,
        } = pet;

        Self {
            id,
            name,
            breed,
            age,
            price,
            image,
        }
    }
}

/// A validated pet record that has not been given a catalog identifier yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPet {
    /// Display name
    pub name: String,

    /// Breed
    pub breed: String,

    /// Age in years
    pub age: u32,

    /// Adoption price
    pub price: Decimal,

    /// Image URI
    pub image: String,
}

/// The pet every catalog is seeded with.
#[must_use]
pub fn seed_pet() -> Pet {
    Pet {
        id: PetId::new("1"),
        name: "Buddy".to_string(),
        breed: "Yorkshire Terrier".to_string(),
        age: 2,
        price: Decimal::from(500),
        image: SEED_PET_IMAGE.to_string(),
    }
}
