use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Listener<T> = Rc<dyn Fn(&T)>;

struct ListenerSet<T: ?Sized> {
    next_id: u64,
    entries: Vec<(u64, Listener<T>)>,
}

/// Single-threaded registry of listeners for values of type `T`.
///
/// Cloning yields another handle to the same registry.
pub struct Listeners<T: ?Sized> {
    inner: Rc<RefCell<ListenerSet<T>>>,
}

impl<T: ?Sized> Clone for Listeners<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: ?Sized> Default for Listeners<T> {
    fn default() -> Self {
        Self {
            inner: Rc::new(RefCell::new(ListenerSet {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }
}

impl<T: ?Sized + 'static> Listeners<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        let listener: Listener<T> = Rc::new(listener);
        let id = {
            let mut set = self.inner.borrow_mut();
            let id = set.next_id;
            set.next_id += 1;
            set.entries.push((id, listener));
            id
        };

        let registry: Weak<RefCell<ListenerSet<T>>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry.borrow_mut().entries.retain(|(entry, _)| *entry != id);
            }
        })
    }

    /// Calls every listener registered at the time of the call, in
    /// registration order. Listeners may subscribe or unsubscribe while
    /// being called.
    pub fn emit(&self, value: &T) {
        let snapshot: Vec<Listener<T>> = self
            .inner
            .borrow()
            .entries
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in snapshot {
            listener(value);
        }
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Keeps a listener registered until dropped.
#[must_use = "dropping a Subscription unregisters its listener immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing to release.
    pub fn empty() -> Self {
        Self { release: None }
    }

    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn listeners_receive_values_in_registration_order() {
        let listeners = Listeners::<u32>::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let first = {
            let seen = seen.clone();
            listeners.subscribe(move |v| seen.borrow_mut().push(("first", *v)))
        };
        let second = {
            let seen = seen.clone();
            listeners.subscribe(move |v| seen.borrow_mut().push(("second", *v)))
        };

        listeners.emit(&7);
        assert_eq!(*seen.borrow(), vec![("first", 7), ("second", 7)]);
        drop((first, second));
    }

    #[test]
    fn dropping_subscription_unregisters() {
        let listeners = Listeners::<u32>::new();
        let calls = Rc::new(Cell::new(0));

        let subscription = {
            let calls = calls.clone();
            listeners.subscribe(move |_| calls.set(calls.get() + 1))
        };
        listeners.emit(&1);
        assert_eq!(listeners.len(), 1);

        drop(subscription);
        listeners.emit(&2);
        assert_eq!(calls.get(), 1);
        assert!(listeners.is_empty());
    }

    #[test]
    fn dropping_after_registry_is_gone_is_harmless() {
        let listeners = Listeners::<u32>::new();
        let subscription = listeners.subscribe(|_| {});
        drop(listeners);
        subscription.unsubscribe();
    }

    #[test]
    fn listener_may_subscribe_during_emit() {
        let listeners = Listeners::<u32>::new();
        let late = Rc::new(RefCell::new(Vec::new()));

        let _outer = {
            let listeners = listeners.clone();
            let late = late.clone();
            listeners.clone().subscribe(move |_| {
                late.borrow_mut().push(listeners.subscribe(|_| {}));
            })
        };

        listeners.emit(&1);
        assert_eq!(listeners.len(), 2);
    }
}
