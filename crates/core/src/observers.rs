//! Observers

use std::fmt::{Debug, Formatter, Result as FmtResult};

use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Subscription Key
    pub struct SubscriptionKey;
}

type Callback<T> = Box<dyn FnMut(&T)>;

/// Callbacks invoked synchronously with a store's state after each mutation.
pub struct Subscribers<T: ?Sized> {
    callbacks: SlotMap<SubscriptionKey, Callback<T>>,
}

impl<T: ?Sized> Subscribers<T> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            callbacks: SlotMap::with_key(),
        }
    }

    /// Register a callback, returning the key used to remove it again.
    pub fn subscribe(&mut self, callback: impl FnMut(&T) + 'static) -> SubscriptionKey {
        self.callbacks.insert(Box::new(callback))
    }

    /// Remove a callback. Returns `false` if the key was not registered.
    pub fn unsubscribe(&mut self, key: SubscriptionKey) -> bool {
        self.callbacks.remove(key).is_some()
    }

    /// Invoke every registered callback with `state`.
    pub fn notify(&mut self, state: &T) {
        for callback in self.callbacks.values_mut() {
            callback(state);
        }
    }

    /// Number of registered callbacks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Whether no callbacks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl<T: ?Sized> Default for Subscribers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Debug for Subscribers<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Subscribers")
            .field("len", &self.callbacks.len())
            .finish()
    }
}
