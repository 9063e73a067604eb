// Connectivity: online/offline events plus the (non-standard)
// navigator.connection object where the browser exposes it.
use crate::util::{EventListener, listen};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::EventTarget;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NetworkStatus {
    pub online: bool,
    /// `effectiveType` of the connection: "slow-2g", "2g", "3g" or "4g".
    pub effective_type: Option<String>,
    pub save_data: bool,
}

impl Default for NetworkStatus {
    fn default() -> Self {
        Self {
            online: true,
            effective_type: None,
            save_data: false,
        }
    }
}

impl NetworkStatus {
    pub fn is_slow(&self) -> bool {
        self.save_data || matches!(self.effective_type.as_deref(), Some("slow-2g") | Some("2g"))
    }

    pub fn read() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let navigator = window.navigator();
        let connection = connection(&navigator);
        let prop = |name: &str| {
            connection
                .as_ref()
                .and_then(|c| js_sys::Reflect::get(c, &JsValue::from_str(name)).ok())
        };
        Self {
            online: navigator.on_line(),
            effective_type: prop("effectiveType").and_then(|v| v.as_string()),
            save_data: prop("saveData").and_then(|v| v.as_bool()).unwrap_or(false),
        }
    }
}

fn connection(navigator: &web_sys::Navigator) -> Option<JsValue> {
    js_sys::Reflect::get(navigator, &JsValue::from_str("connection"))
        .ok()
        .filter(|c| !c.is_undefined() && !c.is_null())
}

#[hook]
pub fn use_network_status() -> NetworkStatus {
    let status = use_state_eq(NetworkStatus::read);
    {
        let status = status.clone();
        use_effect_with((), move |_| {
            let mut guards: Vec<EventListener> = Vec::new();
            if let Some(window) = web_sys::window() {
                for event in ["online", "offline"] {
                    let status = status.clone();
                    guards.extend(listen(&window, event, move |_| {
                        let next = NetworkStatus::read();
                        log::info!("network {}", if next.online { "online" } else { "offline" });
                        status.set(next);
                    }));
                }
                if let Some(conn) = connection(&window.navigator()).and_then(|c| c.dyn_into::<EventTarget>().ok()) {
                    guards.extend(listen(&conn, "change", move |_| status.set(NetworkStatus::read())));
                }
            }
            move || drop(guards)
        });
    }
    (*status).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_type(t: &str) -> NetworkStatus {
        NetworkStatus {
            effective_type: Some(t.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn slow_connection_types() {
        assert!(with_type("2g").is_slow());
        assert!(with_type("slow-2g").is_slow());
        assert!(!with_type("3g").is_slow());
        assert!(!with_type("4g").is_slow());
    }

    #[test]
    fn save_data_counts_as_slow() {
        let s = NetworkStatus {
            save_data: true,
            ..with_type("4g")
        };
        assert!(s.is_slow());
    }

    #[test]
    fn unknown_connection_defaults_to_online_and_fast() {
        let s = NetworkStatus::default();
        assert!(s.online);
        assert!(!s.is_slow());
    }
}
