//! Pick the best available session store.
//!
//! Priority: localStorage → Memory (fallback)

use std::rc::Rc;
use askme_core::ports::SessionStore;
use super::{LocalSessionStore, MemorySessionStore};

/// Returns a trait object so callers are backend-agnostic.
pub fn auto_detect_session_store(key: &str) -> Rc<dyn SessionStore> {
    match LocalSessionStore::open(key) {
        Ok(local) => {
            log::info!("Session store: localStorage (key {:?})", key);
            Rc::new(local)
        }
        Err(e) => {
            log::warn!("localStorage unavailable ({}), falling back to memory", e);
            Rc::new(MemorySessionStore::new())
        }
    }
}
