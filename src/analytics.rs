//! Thin analytics pass-through.
//!
//! Events go to whichever of the two global reporters the page loaded:
//! Google's `gtag` and Plausible's `plausible`. Neither is required; with
//! none present every call is a silent no-op. The globals are looked up at
//! call time because their scripts load asynchronously.

use crate::config::use_site_config;
use crate::error::{UiError, UiResult};
use crate::util::to_js;
use serde::Serialize;
use serde_json::{Value, json};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;
use yew::prelude::*;

pub trait TrackingSink {
    fn name(&self) -> &'static str;
    fn send(&self, event: &str, props: &Value);
}

fn global_fn(window: &Window, name: &str) -> Option<js_sys::Function> {
    js_sys::Reflect::get(window, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()
}

fn failure_message(sink: &str, event: &str, err: &UiError) -> String {
    format!("{} dropped `{}`: {}", sink, event, err)
}

// Reporter failures never reach callers; they only show up in debug logs.
fn report(sink: &str, event: &str, result: UiResult<()>) {
    if let Err(e) = result {
        log::debug!("{}", failure_message(sink, event, &e));
    }
}

/// `gtag('event', name, props)`
pub struct GtagSink(js_sys::Function);

impl GtagSink {
    pub fn from_window(window: &Window) -> Option<Self> {
        global_fn(window, "gtag").map(Self)
    }
}

impl TrackingSink for GtagSink {
    fn name(&self) -> &'static str {
        "gtag"
    }

    fn send(&self, event: &str, props: &Value) {
        let result = to_js(props).and_then(|props| {
            self.0
                .call3(&JsValue::NULL, &JsValue::from_str("event"), &JsValue::from_str(event), &props)
                .map(drop)
                .map_err(UiError::from)
        });
        report(self.name(), event, result);
    }
}

/// `plausible(name, { props })`
pub struct PlausibleSink(js_sys::Function);

impl PlausibleSink {
    pub fn from_window(window: &Window) -> Option<Self> {
        global_fn(window, "plausible").map(Self)
    }
}

impl TrackingSink for PlausibleSink {
    fn name(&self) -> &'static str {
        "plausible"
    }

    fn send(&self, event: &str, props: &Value) {
        let result = to_js(&json!({ "props": props })).and_then(|options| {
            self.0
                .call2(&JsValue::NULL, &JsValue::from_str(event), &options)
                .map(drop)
                .map_err(UiError::from)
        });
        report(self.name(), event, result);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DonationFrequency {
    OneTime,
    Monthly,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DonationEvent {
    pub amount: f64,
    pub currency: String,
    pub frequency: DonationFrequency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign: Option<String>,
}

#[derive(Default)]
pub struct Analytics {
    sinks: Vec<Box<dyn TrackingSink>>,
}

impl Analytics {
    pub fn new(sinks: Vec<Box<dyn TrackingSink>>) -> Self {
        Self { sinks }
    }

    /// Sinks for the reporters currently present on `window`.
    pub fn from_window() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let mut sinks: Vec<Box<dyn TrackingSink>> = Vec::new();
        if let Some(s) = GtagSink::from_window(&window) {
            sinks.push(Box::new(s));
        }
        if let Some(s) = PlausibleSink::from_window(&window) {
            sinks.push(Box::new(s));
        }
        Self { sinks }
    }

    pub fn sink_names(&self) -> Vec<&'static str> {
        self.sinks.iter().map(|s| s.name()).collect()
    }

    pub fn track(&self, event: &str, props: Value) {
        log::debug!("track `{}` -> {:?}", event, self.sink_names());
        for sink in &self.sinks {
            sink.send(event, &props);
        }
    }

    pub fn track_donation(&self, donation: &DonationEvent) {
        let props = serde_json::to_value(donation).unwrap_or(Value::Null);
        self.track("donation", props);
    }

    pub fn track_page_view(&self, path: &str) {
        self.track("page_view", json!({ "path": path }));
    }

    pub fn track_cta_click(&self, label: &str) {
        self.track("cta_click", json!({ "label": label }));
    }
}

pub fn track(event: &str, props: Value) {
    Analytics::from_window().track(event, props);
}

pub fn track_donation(amount: f64, currency: &str, frequency: DonationFrequency) {
    Analytics::from_window().track_donation(&DonationEvent {
        amount,
        currency: currency.to_string(),
        frequency,
        campaign: None,
    });
}

/// Config-aware front door for components.
#[derive(Clone, Debug, PartialEq)]
pub struct Tracker {
    pub enabled: bool,
    pub currency: String,
}

impl Tracker {
    fn analytics(&self) -> Analytics {
        if self.enabled {
            Analytics::from_window()
        } else {
            Analytics::default()
        }
    }

    pub fn track(&self, event: &str, props: Value) {
        self.analytics().track(event, props);
    }

    pub fn donation(&self, amount: f64, frequency: DonationFrequency, campaign: Option<String>) {
        self.analytics().track_donation(&DonationEvent {
            amount,
            currency: self.currency.clone(),
            frequency,
            campaign,
        });
    }

    pub fn page_view(&self, path: &str) {
        self.analytics().track_page_view(path);
    }

    pub fn cta_click(&self, label: &str) {
        self.analytics().track_cta_click(label);
    }
}

#[hook]
pub fn use_tracker() -> Tracker {
    let cfg = use_site_config();
    Tracker {
        enabled: cfg.analytics.enabled,
        currency: cfg.analytics.currency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Calls = Rc<RefCell<Vec<(String, Value)>>>;

    struct RecordingSink(Calls);

    impl TrackingSink for RecordingSink {
        fn name(&self) -> &'static str {
            "recording"
        }

        fn send(&self, event: &str, props: &Value) {
            self.0.borrow_mut().push((event.to_string(), props.clone()));
        }
    }

    fn recorder() -> (Calls, Analytics) {
        let calls: Calls = Rc::default();
        let a = Analytics::new(vec![
            Box::new(RecordingSink(calls.clone())),
            Box::new(RecordingSink(calls.clone())),
        ]);
        (calls, a)
    }

    #[test]
    fn track_without_reporters_is_a_no_op() {
        let a = Analytics::default();
        a.track("x", json!({}));
        assert!(a.sink_names().is_empty());
    }

    #[test]
    fn track_reaches_every_sink() {
        let (calls, a) = recorder();
        a.track("signup", json!({ "source": "footer" }));
        let calls = calls.borrow();
        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|(e, p)| e == "signup" && p["source"] == "footer"));
    }

    #[test]
    fn donation_payload_shape() {
        let (calls, a) = recorder();
        a.track_donation(&DonationEvent {
            amount: 25.0,
            currency: "EUR".into(),
            frequency: DonationFrequency::Monthly,
            campaign: None,
        });
        let (event, props) = calls.borrow()[0].clone();
        assert_eq!(event, "donation");
        assert_eq!(props, json!({ "amount": 25.0, "currency": "EUR", "frequency": "monthly" }));
    }

    #[test]
    fn campaign_is_forwarded_when_set() {
        let (calls, a) = recorder();
        a.track_donation(&DonationEvent {
            amount: 10.0,
            currency: "USD".into(),
            frequency: DonationFrequency::OneTime,
            campaign: Some("winter-appeal".into()),
        });
        let props = calls.borrow()[0].1.clone();
        assert_eq!(props["frequency"], "one_time");
        assert_eq!(props["campaign"], "winter-appeal");
    }

    #[test]
    fn reporter_failures_name_sink_and_event() {
        let msg = failure_message("plausible", "donation", &UiError::Unsupported("plausible"));
        assert_eq!(msg, "plausible dropped `donation`: browser API not available: plausible");
        // successful sends stay quiet
        report("gtag", "page_view", Ok(()));
    }

    #[test]
    fn page_view_and_cta_events() {
        let (calls, a) = recorder();
        a.track_page_view("/donate");
        a.track_cta_click("hero-donate");
        let calls = calls.borrow();
        assert_eq!(calls[0].0, "page_view");
        assert_eq!(calls[0].1["path"], "/donate");
        assert_eq!(calls[2].0, "cta_click");
        assert_eq!(calls[2].1["label"], "hero-donate");
    }
}
