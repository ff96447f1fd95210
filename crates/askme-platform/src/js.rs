//! Small helpers shared by the JS-facing adapters.

use wasm_bindgen::JsValue;
use askme_types::AskError;

/// Best-effort human-readable message from a thrown JS value.
pub(crate) fn describe(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    let message = js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string());
    message.unwrap_or_else(|| format!("{:?}", value))
}

/// `name` property of a thrown DOMException, e.g. `InvalidStateError`.
pub(crate) fn error_name(value: &JsValue) -> Option<String> {
    js_sys::Reflect::get(value, &JsValue::from_str("name"))
        .ok()
        .and_then(|n| n.as_string())
}

pub(crate) fn interop(value: JsValue) -> AskError {
    AskError::JsInterop(describe(&value))
}
