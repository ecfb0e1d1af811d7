//! A minimal observable value cell.

use std::cell::RefCell;
use std::rc::Rc;

type Watcher<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: T,
    watchers: Vec<Watcher<T>>,
}

/// Single-threaded observable cell.
///
/// Watchers are invoked synchronously after the value actually changes.
/// Used by the controller to expose its phase and mount state without
/// handing out mutable access.
pub struct ValueCell<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T: Clone + PartialEq + 'static> ValueCell<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                watchers: Vec::new(),
            })),
        }
    }

    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Set the value, notifying watchers only when it changed.
    pub fn set(&self, value: T) {
        let watchers = {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return;
            }
            inner.value = value;
            inner.watchers.clone()
        };
        let current = self.get();
        for watcher in watchers {
            watcher(&current);
        }
    }

    /// Register a watcher invoked on every change. Watchers live as long as
    /// the cell does.
    pub fn watch(&self, watcher: impl Fn(&T) + 'static) {
        self.inner.borrow_mut().watchers.push(Rc::new(watcher));
    }
}

impl<T> Clone for ValueCell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ValueCell<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ValueCell")
            .field(&self.inner.borrow().value)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn set_notifies_only_on_change() {
        let cell = ValueCell::new(0_u32);
        let seen = Rc::new(Cell::new(0_u32));
        let seen_in_watcher = Rc::clone(&seen);
        cell.watch(move |value| seen_in_watcher.set(seen_in_watcher.get() + value));

        cell.set(0);
        assert_eq!(seen.get(), 0, "no notification for an unchanged value");

        cell.set(3);
        assert_eq!(seen.get(), 3);
        assert_eq!(cell.get(), 3);
    }
}
