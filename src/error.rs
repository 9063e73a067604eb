use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures raised by browser glue. Public surfaces turn these into safe
/// defaults (bool / placeholder) instead of handing them to callers.
#[derive(Debug, Error)]
pub enum UiError {
    #[error("no global `window` available")]
    NoWindow,
    #[error("browser API not available: {0}")]
    Unsupported(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        let msg = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        UiError::Js(msg)
    }
}

pub type UiResult<T> = Result<T, UiError>;
