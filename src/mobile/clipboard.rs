//! Clipboard writes and the Web Share API, both awaited and folded into a
//! plain result for the UI.

use crate::error::{UiError, UiResult};
use crate::util::{await_promise, call_method, to_js};
use serde::Serialize;
use wasm_bindgen::JsValue;

fn navigator_member(name: &'static str) -> UiResult<JsValue> {
    let window = web_sys::window().ok_or(UiError::NoWindow)?;
    let member = js_sys::Reflect::get(&window.navigator(), &JsValue::from_str(name))?;
    if member.is_undefined() || member.is_null() {
        return Err(UiError::Unsupported(name));
    }
    Ok(member)
}

async fn write_text(text: &str) -> UiResult<()> {
    let clipboard = navigator_member("clipboard")?;
    await_promise(call_method(&clipboard, "writeText", &[JsValue::from_str(text)])?).await?;
    Ok(())
}

/// Copy `text`; `false` (and a console error) when the write is refused.
pub async fn copy_to_clipboard(text: &str) -> bool {
    match write_text(text).await {
        Ok(()) => true,
        Err(e) => {
            log::error!("copy to clipboard failed: {}", e);
            false
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShareData {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ShareData {
    /// What lands on the clipboard when native sharing is unavailable.
    pub fn fallback_text(&self) -> String {
        match (&self.text, &self.url) {
            (_, Some(url)) => url.clone(),
            (Some(text), None) => text.clone(),
            (None, None) => self.title.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Copied,
    Failed,
}

async fn native_share(data: &ShareData) -> UiResult<()> {
    navigator_member("share")?;
    let nav: JsValue = web_sys::window().ok_or(UiError::NoWindow)?.navigator().into();
    await_promise(call_method(&nav, "share", &[to_js(data)?])?).await?;
    Ok(())
}

/// Native share sheet when available, clipboard otherwise.
pub async fn share_or_copy(data: &ShareData) -> ShareOutcome {
    match native_share(data).await {
        Ok(()) => ShareOutcome::Shared,
        Err(UiError::Unsupported(_)) => {
            if copy_to_clipboard(&data.fallback_text()).await {
                ShareOutcome::Copied
            } else {
                ShareOutcome::Failed
            }
        }
        Err(e) => {
            // includes the user closing the share sheet
            log::warn!("share failed: {}", e);
            ShareOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(text: Option<&str>, url: Option<&str>) -> ShareData {
        ShareData {
            title: "Give clean water".into(),
            text: text.map(Into::into),
            url: url.map(Into::into),
        }
    }

    #[test]
    fn fallback_prefers_url() {
        let d = data(Some("Help us"), Some("https://example.org/donate"));
        assert_eq!(d.fallback_text(), "https://example.org/donate");
        assert_eq!(data(Some("Help us"), None).fallback_text(), "Help us");
        assert_eq!(data(None, None).fallback_text(), "Give clean water");
    }

    #[test]
    fn absent_fields_are_not_serialized() {
        let raw = serde_json::to_string(&data(None, Some("https://example.org"))).unwrap();
        assert_eq!(raw, r#"{"title":"Give clean water","url":"https://example.org"}"#);
    }
}
