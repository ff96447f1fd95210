pub mod memory;
pub mod local;
pub mod auto;

pub use memory::MemorySessionStore;
pub use local::LocalSessionStore;
pub use auto::auto_detect_session_store;
