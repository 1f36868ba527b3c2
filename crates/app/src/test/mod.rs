//! Shared test fixtures

use pawmate::validation::{FormValue, PetForm};

/// A form that passes every validation rule.
pub(crate) fn valid_form() -> PetForm {
    PetForm {
        pet_name: Some("Luna".to_string()),
        breed: Some("Husky".to_string()),
        age: Some(FormValue::from("2")),
        price: Some(FormValue::from("750")),
    }
}
