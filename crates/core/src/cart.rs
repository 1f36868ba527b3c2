//! Cart

use std::num::NonZeroU32;

use rust_decimal::Decimal;

use crate::{
    observers::{Subscribers, SubscriptionKey},
    pets::{Pet, PetId},
    pricing,
};

/// A pet snapshot held in the cart together with how many were selected.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pet: Pet,
    quantity: NonZeroU32,
}

impl CartLine {
    /// Create a line with a quantity of one.
    pub fn new(pet: Pet) -> Self {
        Self {
            pet,
            quantity: NonZeroU32::MIN,
        }
    }

    /// The pet as it was when first added.
    pub fn pet(&self) -> &Pet {
        &self.pet
    }

    /// Selected quantity, always at least one.
    pub fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    /// Price multiplied by quantity.
    pub fn line_total(&self) -> Decimal {
        pricing::line_total(self.pet.price, self.quantity)
    }

    fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }
}

/// Cart
///
/// Holds at most one line per pet, in the order pets were first added. Every operation accepts
/// unknown identifiers and treats them as no-ops.
#[derive(Debug, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    subscribers: Subscribers<[CartLine]>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one of `pet`, creating a line if the pet is not in the cart yet.
    pub fn add_item(&mut self, pet: &Pet) {
        if let Some(line) = self.line_mut(&pet.id) {
            line.increment();
        } else {
            self.lines.push(CartLine::new(pet.clone()));
        }

        self.notify();
    }

    /// Increase the quantity of a line by one.
    pub fn increase(&mut self, id: &PetId) {
        let Some(line) = self.line_mut(id) else {
            return;
        };

        line.increment();

        self.notify();
    }

    /// Decrease the quantity of a line by one, removing the line instead of leaving it at zero.
    pub fn decrease(&mut self, id: &PetId) {
        let Some(index) = self.position(id) else {
            return;
        };

        let Some(line) = self.lines.get_mut(index) else {
            return;
        };

        match NonZeroU32::new(line.quantity.get() - 1) {
            Some(quantity) => line.quantity = quantity,
            None => {
                self.lines.remove(index);
            }
        }

        self.notify();
    }

    /// Remove a line regardless of its quantity.
    pub fn remove_item(&mut self, id: &PetId) {
        let Some(index) = self.position(id) else {
            return;
        };

        self.lines.remove(index);

        self.notify();
    }

    /// Sum of price times quantity over every line, computed on each call.
    pub fn total_price(&self) -> Decimal {
        pricing::total_price(&self.lines)
    }

    /// Total number of pets across all lines, as shown on the cart badge.
    pub fn item_count(&self) -> u64 {
        self.lines
            .iter()
            .map(|line| u64::from(line.quantity()))
            .sum()
    }

    /// The line for a pet, if present.
    pub fn get(&self, id: &PetId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.pet.id == *id)
    }

    /// Whether the pet has a line in the cart.
    pub fn contains(&self, id: &PetId) -> bool {
        self.get(id).is_some()
    }

    /// All lines, in the order they were created.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Iterate over the lines.
    pub fn iter(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Register a callback invoked with every line after each change.
    pub fn subscribe(&mut self, callback: impl FnMut(&[CartLine]) + 'static) -> SubscriptionKey {
        self.subscribers.subscribe(callback)
    }

    /// Remove a previously registered callback.
    pub fn unsubscribe(&mut self, key: SubscriptionKey) -> bool {
        self.subscribers.unsubscribe(key)
    }

    fn position(&self, id: &PetId) -> Option<usize> {
        self.lines.iter().position(|line| line.pet.id == *id)
    }

    fn line_mut(&mut self, id: &PetId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.pet.id == *id)
    }

    fn notify(&mut self) {
        self.subscribers.notify(&self.lines);
    }
}
