use recommended_videos::storage::filter_keys;
use recommended_videos::{Listeners, PreferenceStorage, StorageChange, StorageError, Subscription};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Storage, StorageEvent};

fn session_storage() -> Option<Storage> {
    window().and_then(|w| w.session_storage().ok()).flatten()
}

/// `window.sessionStorage` with change notifications.
///
/// Browsers only fire `storage` events in *other* documents, so writes made
/// through this handle are announced to local watchers directly.
pub struct BrowserSessionStorage {
    changes: Listeners<StorageChange>,
    on_storage_event: Option<Closure<dyn Fn(StorageEvent)>>,
}

impl BrowserSessionStorage {
    pub fn new() -> Self {
        let changes = Listeners::<StorageChange>::new();

        let on_storage_event = window().and_then(|window| {
            let changes = changes.clone();
            let closure = Closure::<dyn Fn(StorageEvent)>::new(move |event: StorageEvent| {
                // A `null` key means the whole area was cleared.
                if let Some(key) = event.key() {
                    changes.emit(&StorageChange {
                        key,
                        new_value: event.new_value(),
                    });
                }
            });
            match window
                .add_event_listener_with_callback("storage", closure.as_ref().unchecked_ref())
            {
                Ok(()) => Some(closure),
                Err(_) => {
                    log::warn!("Could not listen to storage events from other tabs");
                    None
                }
            }
        });

        Self {
            changes,
            on_storage_event,
        }
    }

    pub fn remove_item(&self, key: &str) {
        if let Some(storage) = session_storage() {
            if storage.remove_item(key).is_ok() {
                self.changes.emit(&StorageChange {
                    key: key.to_string(),
                    new_value: None,
                });
            }
        }
    }
}

impl Default for BrowserSessionStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStorage for BrowserSessionStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        session_storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = session_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::Write {
                key: key.to_string(),
            })?;
        self.changes.emit(&StorageChange {
            key: key.to_string(),
            new_value: Some(value.to_string()),
        });
        Ok(())
    }

    fn watch(&self, keys: &[&str], on_change: Box<dyn Fn(&StorageChange)>) -> Subscription {
        self.changes.subscribe(filter_keys(keys, on_change))
    }
}

impl Drop for BrowserSessionStorage {
    fn drop(&mut self) {
        if let (Some(window), Some(closure)) = (window(), self.on_storage_event.as_ref()) {
            let _ = window
                .remove_event_listener_with_callback("storage", closure.as_ref().unchecked_ref());
        }
    }
}
