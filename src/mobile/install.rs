//! PWA install prompt capture.
//!
//! The browser fires `beforeinstallprompt` once it considers the site
//! installable. We suppress the mini-infobar, keep the event, and replay it
//! when the visitor presses our own install button.

use crate::error::{UiError, UiResult};
use crate::mobile::detect::is_standalone;
use crate::util::{EventListener, await_promise, call_method, listen};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys::Event;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstallOutcome {
    Accepted,
    Dismissed,
}

impl InstallOutcome {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "accepted" => Some(InstallOutcome::Accepted),
            "dismissed" => Some(InstallOutcome::Dismissed),
            _ => None,
        }
    }
}

async fn show_prompt(event: &Event) -> UiResult<InstallOutcome> {
    call_method(event, "prompt", &[])?;
    let choice = js_sys::Reflect::get(event, &JsValue::from_str("userChoice"))?;
    let result = await_promise(choice).await?;
    let outcome = js_sys::Reflect::get(&result, &JsValue::from_str("outcome"))?
        .as_string()
        .unwrap_or_default();
    InstallOutcome::parse(&outcome).ok_or_else(|| UiError::Js(format!("unexpected install outcome `{}`", outcome)))
}

#[derive(Clone)]
pub struct InstallPrompt {
    pub can_install: bool,
    pub installed: bool,
    deferred: Rc<RefCell<Option<Event>>>,
    can_install_handle: UseStateHandle<bool>,
    installed_handle: UseStateHandle<bool>,
}

impl PartialEq for InstallPrompt {
    fn eq(&self, other: &Self) -> bool {
        self.can_install == other.can_install
            && self.installed == other.installed
            && Rc::ptr_eq(&self.deferred, &other.deferred)
    }
}

impl InstallPrompt {
    /// Show the captured prompt. `true` only when the visitor accepted.
    pub async fn prompt(&self) -> bool {
        let Some(event) = self.deferred.borrow_mut().take() else {
            return false;
        };
        // a deferred prompt can be shown once
        self.can_install_handle.set(false);
        match show_prompt(&event).await {
            Ok(InstallOutcome::Accepted) => {
                log::info!("install prompt accepted");
                self.installed_handle.set(true);
                true
            }
            Ok(InstallOutcome::Dismissed) => {
                log::info!("install prompt dismissed");
                false
            }
            Err(e) => {
                log::warn!("install prompt failed: {}", e);
                false
            }
        }
    }
}

#[hook]
pub fn use_install_prompt() -> InstallPrompt {
    let deferred = use_mut_ref(|| None::<Event>);
    let can_install = use_state_eq(|| false);
    let installed = use_state_eq(is_standalone);
    {
        let deferred = deferred.clone();
        let can_install = can_install.clone();
        let installed = installed.clone();
        use_effect_with((), move |_| {
            let mut guards: Vec<EventListener> = Vec::new();
            if let Some(window) = web_sys::window() {
                guards.extend({
                    let deferred = deferred.clone();
                    let can_install = can_install.clone();
                    listen(&window, "beforeinstallprompt", move |e: Event| {
                        e.prevent_default();
                        *deferred.borrow_mut() = Some(e);
                        can_install.set(true);
                        log::debug!("install prompt captured");
                    })
                });
                guards.extend(listen(&window, "appinstalled", move |_| {
                    deferred.borrow_mut().take();
                    can_install.set(false);
                    installed.set(true);
                }));
            }
            move || drop(guards)
        });
    }
    InstallPrompt {
        can_install: *can_install,
        installed: *installed,
        deferred,
        can_install_handle: can_install,
        installed_handle: installed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_user_choice_outcomes() {
        assert_eq!(InstallOutcome::parse("accepted"), Some(InstallOutcome::Accepted));
        assert_eq!(InstallOutcome::parse("dismissed"), Some(InstallOutcome::Dismissed));
        assert_eq!(InstallOutcome::parse(""), None);
        assert_eq!(InstallOutcome::parse("Accepted"), None);
    }

    #[test]
    fn page_ships_an_installable_manifest() {
        let html = include_str!("../../index.html");
        assert!(html.contains(r#"rel="manifest" href="/manifest.webmanifest""#));
        assert!(html.contains(r#"rel="copy-file" href="manifest.webmanifest""#));

        let manifest: serde_json::Value =
            serde_json::from_str(include_str!("../../manifest.webmanifest")).unwrap();
        assert!(!manifest["name"].as_str().unwrap_or_default().is_empty());
        assert_eq!(manifest["start_url"], "/");
        assert_eq!(manifest["display"], "standalone");
        let icons = manifest["icons"].as_array().unwrap();
        assert!(icons.iter().any(|i| i["src"] == "/icon.svg"));
        assert!(html.contains(r#"rel="copy-file" href="icon.svg""#));
    }
}
