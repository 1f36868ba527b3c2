//! Paw-Mate prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartLine},
    catalog::PetCatalog,
    display::{DisplayItem, FeaturedImage, availability_label, home_items},
    observers::{Subscribers, SubscriptionKey},
    pets::{NewPet, Pet, PetId, seed_pet},
    pricing::{line_total, total_price},
    receipt::{ReceiptError, write_cart},
    validation::{
        FieldError, FormValue, PetField, PetForm, ValidatedPet, ValidationErrors, validate,
    },
};
