//! Error type for the push handler.

use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Errors raised while handling a push event.
///
/// None of these are recovered locally. They are thrown back into the
/// worker's event listener and surface on the browser's default error path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PushError {
    /// Push data was absent, was not JSON, or lacked a string `title`/`message`.
    #[error("Malformed push payload: {0}")]
    MalformedPayload(String),
    /// A browser API call threw.
    #[error("Platform call failed: {0}")]
    Platform(String),
}

impl PushError {
    /// Wrap a thrown JS value, keeping whatever description it carries.
    pub(crate) fn platform(context: &str, value: &JsValue) -> Self {
        let detail = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|e| String::from(e.message()))
            })
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Platform(format!("{context}: {detail}"))
    }
}

impl From<serde_json::Error> for PushError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedPayload(err.to_string())
    }
}

impl From<PushError> for JsValue {
    fn from(err: PushError) -> Self {
        JsError::new(&err.to_string()).into()
    }
}
