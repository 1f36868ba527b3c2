//! Receipt

use std::io;

use rust_decimal::Decimal;
use rusty_money::{Money, iso};
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::cart::{Cart, CartLine};

/// Errors that can occur while writing a cart receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Writing to the output failed.
    #[error("failed to write receipt")]
    Io(#[from] io::Error),
}

/// Format an amount as Indian rupees.
pub fn format_price(amount: Decimal) -> String {
    Money::from_decimal(amount.round_dp(2), iso::INR).to_string()
}

/// Write the cart as a table followed by the item count and total.
///
/// # Errors
///
/// Returns [`ReceiptError::Io`] if the output cannot be written.
pub fn write_cart(cart: &Cart, mut out: impl io::Write) -> Result<(), ReceiptError> {
    if cart.is_empty() {
        writeln!(out, "Your cart is empty")?;
        writeln!(out, "Add some furry friends from the pet list")?;

        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record(["Pet", "Breed", "Price", "Qty", "Line Total"]);

    for line in cart.iter() {
        builder.push_record(line_record(line));
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(2..5), Alignment::right());

    writeln!(out, "{table}")?;
    writeln!(out, "Items: {}", cart.item_count())?;
    writeln!(out, "Total: {}", format_price(cart.total_price()))?;

    Ok(())
}

fn line_record(line: &CartLine) -> [String; 5] {
    let pet = line.pet();

    [
        pet.name.clone(),
        pet.breed.clone(),
        format_price(pet.price),
        line.quantity().to_string(),
        format_price(line.line_total()),
    ]
}
