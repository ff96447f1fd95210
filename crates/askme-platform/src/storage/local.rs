//! `window.localStorage` session store.
//! Persistent across page reloads under a single fixed key.

use askme_core::ports::SessionStore;
use askme_types::{AskError, Result};
use web_sys::Storage;

use crate::js::describe;

pub struct LocalSessionStore {
    storage: Storage,
    key: String,
}

impl LocalSessionStore {
    /// Open local storage. Fails when the browser blocks it (e.g. some private modes).
    pub fn open(key: impl Into<String>) -> Result<Self> {
        let storage = gloo_utils::window()
            .local_storage()
            .map_err(|e| AskError::Storage(describe(&e)))?
            .ok_or_else(|| AskError::Storage("localStorage not available".to_string()))?;
        Ok(Self {
            storage,
            key: key.into(),
        })
    }
}

impl SessionStore for LocalSessionStore {
    fn load(&self) -> Result<Option<String>> {
        self.storage
            .get_item(&self.key)
            .map(|v| v.filter(|s| !s.is_empty()))
            .map_err(|e| AskError::Storage(describe(&e)))
    }

    fn save(&self, session_id: &str) -> Result<()> {
        self.storage
            .set_item(&self.key, session_id)
            .map_err(|e| AskError::Storage(describe(&e)))
    }

    fn backend_name(&self) -> &str {
        "localStorage"
    }
}
