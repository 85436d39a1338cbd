//! Sidebar Preference
//!
//! Collapsed/expanded sidebar flag persisted under one storage key.
//! The store is injected so the browser's local storage and an in-memory
//! map are interchangeable.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::PortalResult;

/// Stored value meaning "sidebar collapsed"
pub const TOGGLED_VALUE: &str = "toggled";
/// Class set on `<body>` while collapsed
pub const BODY_TOGGLED_CLASS: &str = "sidebar-toggled";
/// Class set on the sidebar element while collapsed
pub const SIDEBAR_TOGGLED_CLASS: &str = "toggled";

/// String key-value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> PortalResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> PortalResult<()>;
    fn remove(&self, key: &str) -> PortalResult<()>;
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> PortalResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> PortalResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> PortalResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> PortalResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> PortalResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> PortalResult<()> {
        (**self).remove(key)
    }
}

pub struct SidebarPreference<S> {
    store: S,
    key: String,
    /// Value stored before the last collapse; `None` means the key was absent
    expanded_value: Mutex<Option<String>>,
}

impl<S: KeyValueStore> SidebarPreference<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            expanded_value: Mutex::new(None),
        }
    }

    fn expanded_value(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.expanded_value.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Stored flag; unreadable storage counts as "not toggled"
    pub fn load(&self) -> bool {
        match self.store.get(&self.key) {
            Ok(value) => value.as_deref() == Some(TOGGLED_VALUE),
            Err(e) => {
                log::warn!("Failed to read sidebar state: {}", e);
                false
            }
        }
    }

    /// Flip `current`, persist and return the new flag.
    /// Expanding writes back whatever was stored before the collapse
    /// (absent key, `""`), or clears the key when nothing was recorded.
    pub fn toggle(&self, current: bool) -> PortalResult<bool> {
        let toggled = !current;
        if toggled {
            let previous = self.store.get(&self.key)?;
            if previous.as_deref() != Some(TOGGLED_VALUE) {
                *self.expanded_value() = previous;
            }
            self.store.set(&self.key, TOGGLED_VALUE)?;
        } else {
            match self.expanded_value().take() {
                Some(value) => self.store.set(&self.key, &value)?,
                None => self.store.remove(&self.key)?,
            }
        }
        Ok(toggled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "sidebarState";

    #[test]
    fn test_missing_key_is_expanded() {
        let store = MemoryStore::new();
        assert!(!SidebarPreference::new(&store, KEY).load());
    }

    #[test]
    fn test_toggle_persists() {
        let store = MemoryStore::new();
        let pref = SidebarPreference::new(&store, KEY);
        assert!(pref.toggle(false).unwrap());
        assert_eq!(store.get(KEY).unwrap().as_deref(), Some("toggled"));
        assert!(SidebarPreference::new(&store, KEY).load());
    }

    #[test]
    fn test_double_toggle_restores_storage() {
        let store = MemoryStore::new();
        let pref = SidebarPreference::new(&store, KEY);
        let before = store.get(KEY).unwrap();
        let once = pref.toggle(pref.load()).unwrap();
        pref.toggle(once).unwrap();
        assert_eq!(store.get(KEY).unwrap(), before);

        store.set(KEY, TOGGLED_VALUE).unwrap();
        let once = pref.toggle(pref.load()).unwrap();
        assert!(!once);
        pref.toggle(once).unwrap();
        assert_eq!(store.get(KEY).unwrap().as_deref(), Some("toggled"));
    }

    #[test]
    fn test_double_toggle_keeps_empty_value() {
        let store = MemoryStore::new();
        store.set(KEY, "").unwrap();
        let pref = SidebarPreference::new(&store, KEY);
        assert!(!pref.load());

        let once = pref.toggle(pref.load()).unwrap();
        assert_eq!(store.get(KEY).unwrap().as_deref(), Some("toggled"));
        pref.toggle(once).unwrap();
        assert_eq!(store.get(KEY).unwrap().as_deref(), Some(""));
    }

    #[test]
    fn test_unexpected_value_is_expanded() {
        let store = MemoryStore::new();
        store.set(KEY, "yes").unwrap();
        assert!(!SidebarPreference::new(&store, KEY).load());
    }
}
