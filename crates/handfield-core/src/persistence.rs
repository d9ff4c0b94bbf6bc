//! Whether the hand CTA has already been shown, and where that is kept.

use crate::constants::HAND_CTA_SHOWN_VALUE;
use crate::error::CoreResult;
use fnv::FnvHashMap;

/// String key/value storage, shaped like the browser's `localStorage`.
pub trait FlagStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str) -> CoreResult<()>;
}

/// Decide whether the shown flag is persisted at all.
///
/// `"0"` forces it off and `"1"` forces it on, whatever the default says.
/// Without an override the environment default applies: absent or
/// `"true"` enables, anything else disables.
pub fn resolve_persist_hand_cta(query_override: Option<&str>, env_default: Option<&str>) -> bool {
    match query_override {
        Some("0") => false,
        Some("1") => true,
        _ => env_default.unwrap_or("true") == "true",
    }
}

/// Initial "has shown" value. A missing store reads as not shown.
pub fn initial_has_shown<S: FlagStore + ?Sized>(
    persist: bool,
    storage: Option<&S>,
    key: &str,
) -> bool {
    if !persist {
        return false;
    }
    match storage {
        Some(store) => store.get_item(key).as_deref() == Some(HAND_CTA_SHOWN_VALUE),
        None => false,
    }
}

/// In-process store for tests and headless runs.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: FnvHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, key: &str, value: &str) -> Self {
        self.items.insert(key.to_owned(), value.to_owned());
        self
    }
}

impl FlagStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> CoreResult<()> {
        self.items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

impl<S: FlagStore + ?Sized> FlagStore for Box<S> {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> CoreResult<()> {
        (**self).set_item(key, value)
    }
}
