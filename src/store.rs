//! Persistent key-value storage behind a trait, so state logic can be
//! exercised in tests without a browser.

/// String key-value store. Reads return `None` for missing keys; writes are
/// best effort and never report failure.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// The browser's `localStorage`. Degrades to a no-op store when the window
/// or storage is unavailable (e.g. storage disabled by the user agent).
#[derive(Clone, Copy, Default)]
pub struct LocalStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

#[cfg(test)]
pub struct MemStore(std::cell::RefCell<std::collections::HashMap<String, String>>);

#[cfg(test)]
impl MemStore {
    pub fn new() -> Self {
        Self(std::cell::RefCell::new(std::collections::HashMap::new()))
    }

    pub fn with(pairs: &[(&str, &str)]) -> Self {
        let store = Self::new();
        for (k, v) in pairs {
            store.set(k, v);
        }
        store
    }
}

#[cfg(test)]
impl KeyValueStore for MemStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
    }
}
