//! Observable value cell shared between a setting and whatever binds to it.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

type Listener<T> = Rc<dyn Fn(&T)>;

/// A single-threaded observable value.
///
/// Cloning a `ValueProperty` hands out another handle to the *same* value;
/// writes through any handle are seen by all of them and notify every
/// listener registered with [`ValueProperty::connect_changed`].
pub struct ValueProperty<T> {
    value: Rc<RefCell<T>>,
    listeners: Rc<RefCell<Vec<Listener<T>>>>,
}

impl<T: Clone> ValueProperty<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Returns a copy of the current value.
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Replaces the value and notifies listeners.
    ///
    /// Listeners are called after the borrow is released, so a listener may
    /// read the property (or even set it again) without panicking.
    pub fn set(&self, value: T) {
        *self.value.borrow_mut() = value;

        let snapshot = self.get();
        let listeners: Vec<Listener<T>> = self.listeners.borrow().clone();
        for listener in listeners {
            listener(&snapshot);
        }
    }

    /// Registers a callback fired with the new value on every `set`.
    pub fn connect_changed<F>(&self, f: F)
    where
        F: Fn(&T) + 'static,
    {
        self.listeners.borrow_mut().push(Rc::new(f));
    }

    /// Returns a property with the same current value but its own storage
    /// and no listeners.
    pub fn detached(&self) -> Self {
        Self::new(self.get())
    }

    /// True when both handles point at the same storage.
    pub fn shares_storage(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.value, &other.value)
    }
}

impl<T> Clone for ValueProperty<T> {
    fn clone(&self) -> Self {
        Self {
            value: Rc::clone(&self.value),
            listeners: Rc::clone(&self.listeners),
        }
    }
}

impl<T: Clone + Default> Default for ValueProperty<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for ValueProperty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ValueProperty")
            .field(&*self.value.borrow())
            .finish()
    }
}
