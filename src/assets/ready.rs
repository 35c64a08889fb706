use std::{cell::RefCell, fmt, rc::Rc};

use crate::foundation::error::{BoothError, BoothResult};

type Waiter<T> = Box<dyn FnOnce(&T)>;

struct Slot<T> {
    value: Option<Rc<T>>,
    waiters: Vec<Waiter<T>>,
}

/// Shared handle to a resource that becomes available asynchronously (a decoded logo, a font).
///
/// Clones share state: the loader keeps one clone and calls [`Deferred::fulfill`], the overlay
/// keeps another and only asks [`Deferred::is_ready`] at capture time. Single-threaded.
pub struct Deferred<T> {
    inner: Rc<RefCell<Slot<T>>>,
}

impl<T> Clone for Deferred<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Default for Deferred<T> {
    fn default() -> Self {
        Self::pending()
    }
}

impl<T> fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = self.inner.borrow();
        f.debug_struct("Deferred")
            .field("ready", &slot.value.is_some())
            .field("waiters", &slot.waiters.len())
            .finish()
    }
}

impl<T> Deferred<T> {
    /// A handle with no value yet.
    pub fn pending() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Slot {
                value: None,
                waiters: Vec::new(),
            })),
        }
    }

    /// A handle that is already fulfilled.
    pub fn ready(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Slot {
                value: Some(Rc::new(value)),
                waiters: Vec::new(),
            })),
        }
    }

    /// `true` once the value is available.
    pub fn is_ready(&self) -> bool {
        self.inner.borrow().value.is_some()
    }

    /// The value, if available.
    pub fn get(&self) -> Option<Rc<T>> {
        self.inner.borrow().value.clone()
    }

    /// The value, or [`BoothError::ResourceNotReady`] naming `what`.
    pub fn require(&self, what: &str) -> BoothResult<Rc<T>> {
        self.get()
            .ok_or_else(|| BoothError::not_ready(format!("{what} is not loaded yet")))
    }

    /// Store the value and notify waiters. A handle can only be fulfilled once.
    pub fn fulfill(&self, value: T) -> BoothResult<()> {
        let value = Rc::new(value);
        let waiters = {
            let mut slot = self.inner.borrow_mut();
            if slot.value.is_some() {
                return Err(BoothError::validation("deferred resource already fulfilled"));
            }
            slot.value = Some(Rc::clone(&value));
            std::mem::take(&mut slot.waiters)
        };
        // Borrow is released so waiters may inspect or clone this handle.
        for waiter in waiters {
            waiter(&value);
        }
        Ok(())
    }

    /// Run `f` once the value is available; immediately if it already is.
    pub fn when_ready(&self, f: impl FnOnce(&T) + 'static) {
        let ready = self.get();
        match ready {
            Some(value) => f(&value),
            None => self.inner.borrow_mut().waiters.push(Box::new(f)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/ready.rs"]
mod tests;
