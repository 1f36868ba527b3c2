//! Paw-Mate
//!
//! Paw-Mate is the domain core of a small pet adoption storefront: a pet catalog, a cart with
//! per-pet quantities, and the validation rules a new pet must pass before it is listed.

pub mod cart;
pub mod catalog;
pub mod display;
pub mod observers;
pub mod pets;
pub mod prelude;
pub mod pricing;
pub mod receipt;
pub mod validation;
