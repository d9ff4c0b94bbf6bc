use handfield_core::{CoreError, CoreResult, FlagStore};
use web_sys as web;

/// `window.localStorage` as a flag store.
pub struct LocalStorageStore {
    storage: web::Storage,
}

impl LocalStorageStore {
    /// Fails when storage is disabled or blocked (private mode, sandboxed
    /// iframes).
    pub fn open() -> CoreResult<Self> {
        let window = web::window().ok_or_else(|| CoreError::StoreUnavailable("no window".into()))?;
        let storage = window
            .local_storage()
            .map_err(|e| CoreError::StoreUnavailable(format!("{e:?}")))?
            .ok_or_else(|| CoreError::StoreUnavailable("localStorage is null".into()))?;
        Ok(Self { storage })
    }
}

impl FlagStore for LocalStorageStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set_item(&mut self, key: &str, value: &str) -> CoreResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| CoreError::StoreWrite {
                key: key.to_owned(),
                reason: format!("{e:?}"),
            })
    }
}
