pub mod api;
pub mod message;
pub mod event;
pub mod config;
pub mod error;

#[cfg(test)]
mod tests;

pub use error::{AskError, VoiceError};
pub type Result<T> = std::result::Result<T, AskError>;
