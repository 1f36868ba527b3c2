//! Validation
//!
//! Checks a raw add-pet form before anything is submitted or stored. Every field is checked
//! independently so one submission can report several problems at once, each field carrying at
//! most one error: the first rule it fails.

use std::{
    collections::BTreeMap,
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::pets::NewPet;

/// Minimum trimmed length of the name and breed fields.
pub const MIN_TEXT_LENGTH: usize = 2;

/// A form value as entered: either free text or an already numeric value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    /// A numeric value
    Number(f64),

    /// Raw text that still has to be coerced
    Text(String),
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FormValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FormValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for FormValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

/// Raw add-pet form input. Absent fields are `None`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetForm {
    /// Pet name
    pub pet_name: Option<String>,

    /// Breed
    pub breed: Option<String>,

    /// Age in years
    pub age: Option<FormValue>,

    /// Adoption price
    pub price: Option<FormValue>,
}

/// Form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PetField {
    /// `petName`
    PetName,

    /// `breed`
    Breed,

    /// `age`
    Age,

    /// `price`
    Price,
}

impl PetField {
    /// Form key of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PetName => "petName",
            Self::Breed => "breed",
            Self::Age => "age",
            Self::Price => "price",
        }
    }
}

impl Display for PetField {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Missing, empty or whitespace-only.
    Required,

    /// Shorter than `min` characters after trimming.
    TooShort {
        /// Required minimum length
        min: usize,
    },

    /// Text that does not parse as a number.
    NotANumber,

    /// Zero or negative.
    NotPositive,

    /// Has a fractional part where a whole number is needed.
    NotWholeNumber,

    /// A whole number too large to store.
    OutOfRange,
}

impl FieldError {
    /// Human-readable message for this error on `field`.
    pub fn message(self, field: PetField) -> String {
        match (self, field) {
            (Self::Required, PetField::PetName) => "Pet name is required".to_string(),
            (Self::TooShort { min }, PetField::PetName) => {
                format!("Name must be at least {min} characters")
            }
            (Self::TooShort { min }, _) => {
                format!("{} must be at least {min} characters", label(field))
            }
            (Self::Required, _) => format!("{} is required", label(field)),
            (Self::NotANumber, _) => format!("{} must be a number", label(field)),
            (Self::NotPositive, _) => format!("{} must be positive", label(field)),
            (Self::NotWholeNumber, _) => format!("{} must be a whole number", label(field)),
            (Self::OutOfRange, _) => format!("{} is too large", label(field)),
        }
    }
}

fn label(field: PetField) -> &'static str {
    match field {
        PetField::PetName => "Pet name",
        PetField::Breed => "Breed",
        PetField::Age => "Age",
        PetField::Price => "Price",
    }
}

/// Every field that failed validation, with one error each.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<PetField, FieldError>);

impl ValidationErrors {
    /// The error recorded for a field.
    pub fn get(&self, field: PetField) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    /// The message for a field's error.
    pub fn message(&self, field: PetField) -> Option<String> {
        self.get(field).map(|error| error.message(field))
    }

    /// Iterate over failed fields in form order.
    pub fn iter(&self) -> impl Iterator<Item = (PetField, FieldError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }

    /// Field name to message, in form order.
    pub fn messages(&self) -> BTreeMap<&'static str, String> {
        self.iter()
            .map(|(field, error)| (field.as_str(), error.message(field)))
            .collect()
    }

    /// Number of failed fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether every field passed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn check<T>(&mut self, field: PetField, result: Result<T, FieldError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.0.insert(field, error);
                None
            }
        }
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut first = true;

        for (field, error) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }

            write!(f, "{field}: {}", error.message(field))?;
            first = false;
        }

        Ok(())
    }
}

impl Error for ValidationErrors {}

/// A form that passed validation: text trimmed, numbers coerced.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedPet {
    /// Trimmed name
    pub name: String,

    /// Trimmed breed
    pub breed: String,

    /// Age in whole years
    pub age: u32,

    /// Price
    pub price: Decimal,
}

impl ValidatedPet {
    /// Complete the record with an image URI.
    pub fn with_image(self, image: impl Into<String>) -> NewPet {
        NewPet {
            name: self.name,
            breed: self.breed,
            age: self.age,
            price: self.price,
            image: image.into(),
        }
    }
}

/// Validate a raw form.
///
/// # Errors
///
/// Returns [`ValidationErrors`] holding one error for every field that failed.
pub fn validate(form: &PetForm) -> Result<ValidatedPet, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = errors.check(PetField::PetName, validate_text(form.pet_name.as_deref()));
    let breed = errors.check(PetField::Breed, validate_text(form.breed.as_deref()));
    let age = errors.check(PetField::Age, validate_age(form.age.as_ref()));
    let price = errors.check(PetField::Price, validate_price(form.price.as_ref()));

    match (name, breed, age, price) {
        (Some(name), Some(breed), Some(age), Some(price)) => Ok(ValidatedPet {
            name,
            breed,
            age,
            price,
        }),
        _ => Err(errors),
    }
}

fn validate_text(value: Option<&str>) -> Result<String, FieldError> {
    let trimmed = value.map(str::trim).unwrap_or_default();

    if trimmed.is_empty() {
        return Err(FieldError::Required);
    }

    if trimmed.chars().count() < MIN_TEXT_LENGTH {
        return Err(FieldError::TooShort {
            min: MIN_TEXT_LENGTH,
        });
    }

    Ok(trimmed.to_string())
}

fn validate_age(value: Option<&FormValue>) -> Result<u32, FieldError> {
    let age = positive_number(value)?;

    if !age.fract().is_zero() {
        return Err(FieldError::NotWholeNumber);
    }

    age.to_u32().ok_or(FieldError::OutOfRange)
}

fn validate_price(value: Option<&FormValue>) -> Result<Decimal, FieldError> {
    positive_number(value)
}

fn positive_number(value: Option<&FormValue>) -> Result<Decimal, FieldError> {
    let number = coerce_number(value)?;

    if number <= Decimal::ZERO {
        return Err(FieldError::NotPositive);
    }

    Ok(number)
}

/// Empty or whitespace-only text counts as missing rather than zero.
fn coerce_number(value: Option<&FormValue>) -> Result<Decimal, FieldError> {
    match value {
        None => Err(FieldError::Required),
        Some(FormValue::Number(number)) if number.is_nan() => Err(FieldError::NotANumber),
        Some(FormValue::Number(number)) => {
            Decimal::from_f64(*number).ok_or_else(|| unrepresentable(*number))
        }
        Some(FormValue::Text(text)) => {
            let text = text.trim();

            if text.is_empty() {
                return Err(FieldError::Required);
            }

            // Digit separators are valid Rust literals but not form numbers.
            if text.contains('_') {
                return Err(FieldError::NotANumber);
            }

            Decimal::from_str(text)
                .or_else(|_| Decimal::from_scientific(text))
                .or_else(|_| match text.parse::<f64>() {
                    Ok(number) if !number.is_nan() && text.contains(|c: char| c.is_ascii_digit()) => {
                        Err(unrepresentable(number))
                    }
                    _ => Err(FieldError::NotANumber),
                })
        }
    }
}

/// A well-formed number outside what [`Decimal`] holds: too large, or so small it rounds to zero.
fn unrepresentable(number: f64) -> FieldError {
    if number < 1.0 {
        FieldError::NotPositive
    } else {
        FieldError::OutOfRange
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn form(name: &str, breed: &str, age: impl Into<FormValue>, price: impl Into<FormValue>) -> PetForm {
        PetForm {
            pet_name: Some(name.to_string()),
            breed: Some(breed.to_string()),
            age: Some(age.into()),
            price: Some(price.into()),
        }
    }

    #[test]
    fn valid_form_is_normalised() -> TestResult {
        let pet = validate(&form("  Rex ", " Boxer", "4", "199.99"))?;

        assert_eq!(pet.name, "Rex");
        assert_eq!(pet.breed, "Boxer");
        assert_eq!(pet.age, 4);
        assert_eq!(pet.price, Decimal::new(19_999, 2));

        Ok(())
    }

    #[test]
    fn numeric_inputs_are_accepted() -> TestResult {
        let pet = validate(&form("Rex", "Boxer", 3, 10.5))?;

        assert_eq!(pet.age, 3);
        assert_eq!(pet.price, Decimal::new(105, 1));

        Ok(())
    }

    #[test]
    fn short_name_only_fails_name() {
        let errors = validate(&form("A", "Lab", 3, 10)).err().unwrap_or_default();

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(PetField::PetName),
            Some(FieldError::TooShort { min: 2 })
        );
        assert_eq!(
            errors.message(PetField::PetName).as_deref(),
            Some("Name must be at least 2 characters")
        );
    }

    #[test]
    fn every_field_is_reported_together() {
        let raw = PetForm {
            pet_name: Some(String::new()),
            breed: None,
            age: Some("".into()),
            price: Some((-5).into()),
        };

        let errors = validate(&raw).err().unwrap_or_default();

        assert_eq!(errors.get(PetField::PetName), Some(FieldError::Required));
        assert_eq!(errors.get(PetField::Breed), Some(FieldError::Required));
        assert_eq!(errors.get(PetField::Age), Some(FieldError::Required));
        assert_eq!(errors.get(PetField::Price), Some(FieldError::NotPositive));
        assert_eq!(
            errors.message(PetField::Price).as_deref(),
            Some("Price must be positive")
        );
    }

    #[test]
    fn non_numeric_text_is_a_type_error() {
        let errors = validate(&form("Rex", "Boxer", "three", "cheap"))
            .err()
            .unwrap_or_default();

        assert_eq!(errors.get(PetField::Age), Some(FieldError::NotANumber));
        assert_eq!(errors.get(PetField::Price), Some(FieldError::NotANumber));
        assert_eq!(
            errors.message(PetField::Age).as_deref(),
            Some("Age must be a number")
        );
    }

    #[test]
    fn fractional_age_is_rejected_but_fractional_price_is_not() {
        let errors = validate(&form("Rex", "Boxer", "2.5", "0.5"))
            .err()
            .unwrap_or_default();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(PetField::Age), Some(FieldError::NotWholeNumber));
    }

    #[test]
    fn negative_fractional_age_reports_positive_first() {
        let errors = validate(&form("Rex", "Boxer", "-1.5", "10"))
            .err()
            .unwrap_or_default();

        assert_eq!(errors.get(PetField::Age), Some(FieldError::NotPositive));
    }

    #[test]
    fn zero_is_not_positive() {
        let errors = validate(&form("Rex", "Boxer", 0, "0"))
            .err()
            .unwrap_or_default();

        assert_eq!(errors.get(PetField::Age), Some(FieldError::NotPositive));
        assert_eq!(errors.get(PetField::Price), Some(FieldError::NotPositive));
    }

    #[test]
    fn whitespace_name_is_required_not_short() {
        let errors = validate(&form("   ", "Boxer", 1, 1))
            .err()
            .unwrap_or_default();

        assert_eq!(errors.get(PetField::PetName), Some(FieldError::Required));
    }

    #[test]
    fn huge_age_is_out_of_range() {
        let errors = validate(&form("Rex", "Boxer", "1e12", 1))
            .err()
            .unwrap_or_default();

        assert_eq!(errors.get(PetField::Age), Some(FieldError::OutOfRange));
    }

    #[test]
    fn digit_separators_are_not_numbers() {
        let errors = validate(&form("Rex", "Boxer", "1_0", "1_000"))
            .err()
            .unwrap_or_default();

        assert_eq!(errors.get(PetField::Age), Some(FieldError::NotANumber));
        assert_eq!(errors.get(PetField::Price), Some(FieldError::NotANumber));
    }

    #[test]
    fn numbers_too_large_to_hold_are_out_of_range() {
        for price in [
            FormValue::from("1e30"),
            FormValue::from("1000000000000000000000000000000"),
            FormValue::from(1e30),
            FormValue::from("1e400"),
        ] {
            let errors = validate(&form("Rex", "Boxer", 1, price.clone()))
                .err()
                .unwrap_or_default();

            assert_eq!(
                errors.get(PetField::Price),
                Some(FieldError::OutOfRange),
                "price {price:?}"
            );
            assert_eq!(
                errors.message(PetField::Price).as_deref(),
                Some("Price is too large")
            );
        }
    }

    #[test]
    fn numbers_too_small_to_hold_are_not_positive() {
        for price in [FormValue::from("1e-30"), FormValue::from(1e-30), FormValue::from("-1e30")] {
            let errors = validate(&form("Rex", "Boxer", 1, price.clone()))
                .err()
                .unwrap_or_default();

            assert_eq!(
                errors.get(PetField::Price),
                Some(FieldError::NotPositive),
                "price {price:?}"
            );
        }
    }

    #[test]
    fn whitespace_numbers_are_required_not_zero() {
        let errors = validate(&form("Rex", "Boxer", "  ", "\t"))
            .err()
            .unwrap_or_default();

        assert_eq!(errors.get(PetField::Age), Some(FieldError::Required));
        assert_eq!(errors.get(PetField::Price), Some(FieldError::Required));
    }

    #[test]
    fn form_deserialises_from_mixed_json() -> TestResult {
        let raw: PetForm = serde_json::from_str(
            r#"{"petName": "Milo", "breed": "Pug", "age": "3", "price": 120}"#,
        )?;

        assert_eq!(raw.age, Some(FormValue::Text("3".to_string())));
        assert_eq!(raw.price, Some(FormValue::Number(120.0)));
        assert!(validate(&raw).is_ok());

        Ok(())
    }

    #[test]
    fn display_joins_messages_in_form_order() {
        let errors = validate(&PetForm::default()).err().unwrap_or_default();

        assert_eq!(
            errors.to_string(),
            "petName: Pet name is required; breed: Breed is required; \
             age: Age is required; price: Price is required"
        );
    }
}
