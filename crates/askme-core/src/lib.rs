//! AskMe Pro client core.
//!
//! Everything here is plain Rust: the controller talks to the browser only
//! through the traits in [`ports`], so it runs natively under `cargo test`.

pub mod ports;
pub mod event_bus;
pub mod busy;
pub mod controller;
