//! Pricing

use std::num::NonZeroU32;

use rust_decimal::Decimal;

use crate::cart::CartLine;

/// Price of `quantity` units at `price` each.
pub fn line_total(price: Decimal, quantity: NonZeroU32) -> Decimal {
    price.saturating_mul(Decimal::from(quantity.get()))
}

/// Sum of every line's total. Zero when there are no lines.
pub fn total_price(lines: &[CartLine]) -> Decimal {
    lines
        .iter()
        .map(CartLine::line_total)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}
