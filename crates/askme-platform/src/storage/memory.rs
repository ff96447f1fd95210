//! In-memory session store.
//! Used when local storage is unavailable; forgets the session on reload.

use std::cell::RefCell;
use askme_core::ports::SessionStore;
use askme_types::Result;

pub struct MemorySessionStore {
    value: RefCell<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self {
            value: RefCell::new(None),
        }
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.value.borrow().clone())
    }

    fn save(&self, session_id: &str) -> Result<()> {
        *self.value.borrow_mut() = Some(session_id.to_string());
        Ok(())
    }

    fn backend_name(&self) -> &str {
        "memory"
    }
}
