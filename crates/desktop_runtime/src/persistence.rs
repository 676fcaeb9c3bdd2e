//! Skin and language preference persistence.
//!
//! Only visitor preferences are stored. The window registry is rebuilt from configuration on
//! every visit.

use leptos::logging;
use platform_host::{load_pref_with, save_pref_with, PrefsStore, LANGUAGE_PREF_KEY, SKIN_PREF_KEY};
use site_content::Language;

use crate::model::DesktopSkin;

/// Loads the stored skin. Unknown ids and storage failures read as "no preference".
pub async fn load_skin(store: &dyn PrefsStore) -> Option<DesktopSkin> {
    match load_pref_with::<_, String>(store, SKIN_PREF_KEY).await {
        Ok(Some(id)) => {
            let skin = DesktopSkin::from_id(&id);
            if skin.is_none() {
                logging::warn!("ignoring unknown stored skin `{id}`");
            }
            skin
        }
        Ok(None) => None,
        Err(err) => {
            logging::warn!("skin preference load failed: {err}");
            None
        }
    }
}

/// Loads the stored language. Storage failures read as "no preference".
pub async fn load_language(store: &dyn PrefsStore) -> Option<Language> {
    match load_pref_with::<_, String>(store, LANGUAGE_PREF_KEY).await {
        Ok(code) => code.as_deref().and_then(Language::from_code),
        Err(err) => {
            logging::warn!("language preference load failed: {err}");
            None
        }
    }
}

/// Stores the skin id.
///
/// # Errors
///
/// Returns the store error message.
pub async fn persist_skin(store: &dyn PrefsStore, skin: DesktopSkin) -> Result<(), String> {
    save_pref_with(store, SKIN_PREF_KEY, &skin.id()).await
}

/// Stores the language code.
///
/// # Errors
///
/// Returns the store error message.
pub async fn persist_language(store: &dyn PrefsStore, language: Language) -> Result<(), String> {
    save_pref_with(store, LANGUAGE_PREF_KEY, &language.code()).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::MemoryPrefsStore;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn skin_round_trips_through_stable_id() {
        let store = MemoryPrefsStore::default();
        block_on(persist_skin(&store, DesktopSkin::Windows95)).expect("save skin");
        assert_eq!(
            block_on(store.load_pref(SKIN_PREF_KEY)).expect("raw"),
            Some("\"windows\"".to_string())
        );
        assert_eq!(block_on(load_skin(&store)), Some(DesktopSkin::Windows95));
    }

    #[test]
    fn unknown_or_malformed_values_read_as_missing() {
        let store = MemoryPrefsStore::default();
        block_on(store.save_pref(SKIN_PREF_KEY, "\"beos\"")).expect("seed");
        block_on(store.save_pref(LANGUAGE_PREF_KEY, "not json")).expect("seed");
        assert_eq!(block_on(load_skin(&store)), None);
        assert_eq!(block_on(load_language(&store)), None);
    }

    #[test]
    fn language_round_trips() {
        let store = MemoryPrefsStore::default();
        assert_eq!(block_on(load_language(&store)), None);
        block_on(persist_language(&store, Language::En)).expect("save language");
        assert_eq!(block_on(load_language(&store)), Some(Language::En));
    }
}
