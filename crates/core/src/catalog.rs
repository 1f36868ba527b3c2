//! Catalog

use crate::{
    observers::{Subscribers, SubscriptionKey},
    pets::{NewPet, Pet, PetId, seed_pet},
};

/// Insertion-ordered collection of every known pet.
#[derive(Debug, Default)]
pub struct PetCatalog {
    pets: Vec<Pet>,
    subscribers: Subscribers<[Pet]>,
}

impl PetCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding the default seed pet.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            pets: vec![seed_pet()],
            subscribers: Subscribers::new(),
        }
    }

    /// All pets, in insertion order.
    pub fn list(&self) -> &[Pet] {
        &self.pets
    }

    /// Look up a pet by identifier.
    pub fn get(&self, id: &PetId) -> Option<&Pet> {
        self.pets.iter().find(|pet| pet.id == *id)
    }

    /// Whether a pet with this identifier is listed.
    pub fn contains(&self, id: &PetId) -> bool {
        self.get(id).is_some()
    }

    /// Add a validated pet under a newly generated identifier and return the stored pet.
    pub fn add(&mut self, pet: NewPet) -> Pet {
        let mut id = PetId::generate();

        while self.contains(&id) {
            id = PetId::generate();
        }

        let pet = Pet::from_new(id, pet);

        self.pets.push(pet.clone());
        self.subscribers.notify(&self.pets);

        pet
    }

    /// Remove the pet with the given identifier. Unknown identifiers are ignored.
    pub fn remove(&mut self, id: &PetId) {
        let before = self.pets.len();

        self.pets.retain(|pet| pet.id != *id);

        if self.pets.len() != before {
            self.subscribers.notify(&self.pets);
        }
    }

    /// Number of listed pets.
    pub fn len(&self) -> usize {
        self.pets.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }

    /// Register a callback invoked with the full pet list after every change.
    pub fn subscribe(&mut self, callback: impl FnMut(&[Pet]) + 'static) -> SubscriptionKey {
        self.subscribers.subscribe(callback)
    }

    /// Remove a previously registered callback.
    pub fn unsubscribe(&mut self, key: SubscriptionKey) -> bool {
        self.subscribers.unsubscribe(key)
    }
}
