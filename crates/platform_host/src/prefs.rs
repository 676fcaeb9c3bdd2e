//! Visitor preference storage (selected skin, selected language).
//!
//! Values are stored as JSON text per key. Nothing in the window registry goes through here; the
//! registry is session-only.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};

/// Preference key for the last selected desktop skin.
pub const SKIN_PREF_KEY: &str = "vibecafe.skin.v1";
/// Preference key for the last selected content language.
pub const LANGUAGE_PREF_KEY: &str = "vibecafe.language.v1";

/// Object-safe boxed future returned by [`PrefsStore`] methods.
pub type PrefsStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for small JSON preference values keyed by string.
pub trait PrefsStore {
    /// Loads the raw JSON stored under `key`, if any.
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>>;

    /// Stores raw JSON under `key`, replacing any previous value.
    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Store that remembers nothing; used on native targets.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_pref<'a>(
        &'a self,
        _key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async { Ok(None) })
    }

    fn save_pref<'a>(
        &'a self,
        _key: &'a str,
        _raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// Shared in-memory store. Clones see the same entries.
pub struct MemoryPrefsStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPrefsStore {
    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns `true` when nothing has been saved.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { Ok(self.entries.borrow().get(key).cloned()) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), raw_json.to_string());
            Ok(())
        })
    }
}

/// Loads and deserializes a typed preference.
///
/// # Errors
///
/// Returns an error when the store fails or the stored JSON does not match `T`.
pub async fn load_pref_with<S: PrefsStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, String> {
    let Some(raw) = store.load_pref(key).await? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| format!("pref `{key}` is malformed: {e}"))
}

/// Serializes and saves a typed preference.
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub async fn save_pref_with<S: PrefsStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
    store.save_pref(key, &raw).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn memory_store_shares_entries_between_clones() {
        let store = MemoryPrefsStore::default();
        let other = store.clone();

        block_on(save_pref_with(&store, SKIN_PREF_KEY, &"windows")).expect("save");

        let loaded: Option<String> =
            block_on(load_pref_with(&other, SKIN_PREF_KEY)).expect("load");
        assert_eq!(loaded.as_deref(), Some("windows"));
        assert_eq!(other.len(), 1);
    }

    #[test]
    fn malformed_pref_reports_the_key() {
        let store = MemoryPrefsStore::default();
        block_on(store.save_pref(LANGUAGE_PREF_KEY, "not json")).expect("save raw");

        let err = block_on(load_pref_with::<_, String>(&store, LANGUAGE_PREF_KEY))
            .expect_err("malformed value");
        assert!(err.contains(LANGUAGE_PREF_KEY));
    }

    #[test]
    fn noop_store_never_returns_values() {
        let store = NoopPrefsStore;
        let store_obj: &dyn PrefsStore = &store;
        block_on(store_obj.save_pref("k", "1")).expect("save");
        assert_eq!(block_on(store_obj.load_pref("k")).expect("load"), None);
    }
}
