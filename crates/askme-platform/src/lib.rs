//! Browser adapters for the AskMe Pro client.

pub mod http;
pub mod storage;
pub mod speech;
pub mod file_picker;

mod js;
