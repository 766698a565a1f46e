use crate::error::StorageError;
use crate::subscription::{Listeners, Subscription};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageChange {
    pub key: String,
    pub new_value: Option<String>,
}

/// Session-scoped key/value storage with change notifications.
pub trait PreferenceStorage {
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Calls `on_change` whenever one of `keys` changes, whether the write
    /// happened here or in another tab sharing the session.
    fn watch(&self, keys: &[&str], on_change: Box<dyn Fn(&StorageChange)>) -> Subscription;
}

/// Wraps a watch callback so it only sees changes to `keys`.
pub fn filter_keys(
    keys: &[&str],
    on_change: Box<dyn Fn(&StorageChange)>,
) -> impl Fn(&StorageChange) + 'static {
    let keys: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
    move |change: &StorageChange| {
        if keys.iter().any(|k| *k == change.key) {
            on_change(change);
        }
    }
}

#[derive(Default)]
struct MemoryStorageInner {
    items: RefCell<HashMap<String, String>>,
    changes: Listeners<StorageChange>,
    fail_writes: Cell<bool>,
}

/// In-memory [`PreferenceStorage`]. Clones share the same items, so two
/// clones behave like two tabs of one session.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    inner: Rc<MemoryStorageInner>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .inner
            .items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    /// Makes every following `set_item` fail, like a full or disabled store.
    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.fail_writes.set(fail);
    }

    pub fn watcher_count(&self) -> usize {
        self.inner.changes.len()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.inner.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.inner.fail_writes.get() {
            return Err(StorageError::Write {
                key: key.to_string(),
            });
        }
        self.inner
            .items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.inner.changes.emit(&StorageChange {
            key: key.to_string(),
            new_value: Some(value.to_string()),
        });
        Ok(())
    }

    fn watch(&self, keys: &[&str], on_change: Box<dyn Fn(&StorageChange)>) -> Subscription {
        self.inner.changes.subscribe(filter_keys(keys, on_change))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watchers_only_see_their_keys() {
        let storage = MemoryStorage::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _watch = {
            let seen = seen.clone();
            storage.watch(
                &["wanted"],
                Box::new(move |change| seen.borrow_mut().push(change.clone())),
            )
        };

        storage.set_item("other", "1").unwrap();
        storage.set_item("wanted", "2").unwrap();

        assert_eq!(
            *seen.borrow(),
            vec![StorageChange {
                key: "wanted".to_string(),
                new_value: Some("2".to_string()),
            }]
        );
    }

    #[test]
    fn clones_share_items_and_watchers() {
        let tab_a = MemoryStorage::new();
        let tab_b = tab_a.clone();
        let _watch = tab_a.watch(&["k"], Box::new(|_| {}));

        tab_b.set_item("k", "v").unwrap();
        assert_eq!(tab_a.get_item("k").as_deref(), Some("v"));
        assert_eq!(tab_b.watcher_count(), 1);
    }

    #[test]
    fn failed_write_leaves_value_untouched() {
        let storage = MemoryStorage::with_item("k", "old");
        storage.set_fail_writes(true);
        assert!(storage.set_item("k", "new").is_err());
        assert_eq!(storage.get_item("k").as_deref(), Some("old"));
    }
}
