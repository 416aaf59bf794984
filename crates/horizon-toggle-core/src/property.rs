//! Property system for Horizon Toggle.
//!
//! Properties hold component state behind interior mutability so that the
//! component handle and its event listeners (which must be `Send + Sync`)
//! observe the same value.
//!
//! # Example
//!
//! ```
//! use horizon_toggle_core::{Property, Signal};
//!
//! struct Switch {
//!     value: Property<bool>,
//!     toggled: Signal<bool>,
//! }
//!
//! impl Switch {
//!     fn set_value(&self, value: bool) {
//!         if self.value.set(value) {
//!             self.toggled.emit(value);
//!         }
//!     }
//! }
//!
//! let switch = Switch { value: Property::new(false), toggled: Signal::new() };
//! switch.set_value(true);
//! assert!(switch.value.get());
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A shared value that tracks changes.
///
/// `set()` compares the new value with the current one and returns whether
/// the value actually changed, so callers can decide whether to notify.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Access the value through a closure without cloning.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }

    /// Set the value without reporting whether it changed.
    pub fn set_silent(&self, value: T) {
        *self.value.write() = value;
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }

    /// Set the value, returning the old value if it changed.
    pub fn replace(&self, value: T) -> Option<T> {
        let mut current = self.value.write();
        if *current != value {
            Some(std::mem::replace(&mut *current, value))
        } else {
            None
        }
    }
}

impl Property<bool> {
    /// Invert the value under a single write lock and return the new value.
    pub fn toggle(&self) -> bool {
        let mut current = self.value.write();
        *current = !*current;
        *current
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}

/// A read-only view of a property.
///
/// Useful for exposing state publicly while keeping the setter private.
pub struct ReadOnlyProperty<'a, T> {
    inner: &'a Property<T>,
}

impl<'a, T: Clone> ReadOnlyProperty<'a, T> {
    /// Create a read-only view of a property.
    pub fn new(property: &'a Property<T>) -> Self {
        Self { inner: property }
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.inner.get()
    }

    /// Access the value through a closure.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        self.inner.with(f)
    }
}

static_assertions::assert_impl_all!(Property<bool>: Send, Sync);
