// Small browser helpers shared by the hooks and components.
use crate::error::{UiError, UiResult};
use serde::Serialize;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, EventTarget, Window};

/// Event subscription that removes itself when dropped.
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new<F>(target: &EventTarget, event: &'static str, f: F) -> UiResult<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        log::debug!("subscribed to `{}`", event);
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        log::debug!("unsubscribed from `{}`", self.event);
    }
}

/// Like [`EventListener::new`] but logs and swallows registration failures.
pub fn listen<F>(target: &EventTarget, event: &'static str, f: F) -> Option<EventListener>
where
    F: FnMut(Event) + 'static,
{
    match EventListener::new(target, event, f) {
        Ok(l) => Some(l),
        Err(e) => {
            log::warn!("could not subscribe to `{}`: {}", event, e);
            None
        }
    }
}

/// Trailing-edge debounce over `setTimeout`. Pending timer is cleared on drop.
pub struct Debouncer {
    window: Window,
    delay_ms: i32,
    pending: Rc<Cell<Option<i32>>>,
    fire: Closure<dyn FnMut()>,
}

impl Debouncer {
    pub fn new<F>(window: &Window, delay_ms: u32, mut f: F) -> Self
    where
        F: FnMut() + 'static,
    {
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let fire = {
            let pending = pending.clone();
            Closure::wrap(Box::new(move || {
                pending.set(None);
                f();
            }) as Box<dyn FnMut()>)
        };
        Self {
            window: window.clone(),
            delay_ms: delay_ms.min(i32::MAX as u32) as i32,
            pending,
            fire,
        }
    }

    pub fn schedule(&self) {
        if let Some(id) = self.pending.take() {
            self.window.clear_timeout_with_handle(id);
        }
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                self.fire.as_ref().unchecked_ref(),
                self.delay_ms,
            ) {
            Ok(id) => self.pending.set(Some(id)),
            Err(e) => log::warn!("setTimeout failed: {:?}", e),
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Some(id) = self.pending.take() {
            self.window.clear_timeout_with_handle(id);
        }
    }
}

/// Window listeners funnelled through one debouncer. Dropping it unsubscribes.
pub struct Subscription {
    _listeners: Vec<EventListener>,
    _debouncer: Rc<Debouncer>,
}

pub fn debounced_window_events<F>(events: &[&'static str], delay_ms: u32, mut f: F) -> Option<Subscription>
where
    F: FnMut(&Window) + 'static,
{
    let window = web_sys::window()?;
    let debouncer = {
        let w = window.clone();
        Rc::new(Debouncer::new(&window, delay_ms, move || f(&w)))
    };
    let listeners = events
        .iter()
        .filter_map(|&event| {
            let debouncer = debouncer.clone();
            listen(&window, event, move |_| debouncer.schedule())
        })
        .collect();
    Some(Subscription {
        _listeners: listeners,
        _debouncer: debouncer,
    })
}

/// Call `target[name](...args)`. `Unsupported` when the method is missing.
pub fn call_method(target: &JsValue, name: &'static str, args: &[JsValue]) -> UiResult<JsValue> {
    let func = js_sys::Reflect::get(target, &JsValue::from_str(name))?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| UiError::Unsupported(name))?;
    let argv: js_sys::Array = args.iter().collect();
    Ok(func.apply(target, &argv)?)
}

pub async fn await_promise(value: JsValue) -> UiResult<JsValue> {
    let promise = value.dyn_into::<js_sys::Promise>()?;
    Ok(wasm_bindgen_futures::JsFuture::from(promise).await?)
}

/// Serialize through JSON into a plain JS object.
pub fn to_js<T: Serialize>(value: &T) -> UiResult<JsValue> {
    let raw = serde_json::to_string(value)?;
    Ok(js_sys::JSON::parse(&raw)?)
}

/// Format a donation amount for buttons and summaries.
pub fn format_amount(amount: f64, currency: &str) -> String {
    let symbol = match currency {
        "EUR" => "€",
        "USD" => "$",
        "GBP" => "£",
        _ => "",
    };
    let value = if amount.fract() == 0.0 {
        format!("{}", amount as i64)
    } else {
        format!("{:.2}", amount)
    };
    if symbol.is_empty() {
        format!("{} {}", value, currency)
    } else {
        format!("{}{}", symbol, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_amounts_drop_decimals() {
        assert_eq!(format_amount(25.0, "EUR"), "€25");
        assert_eq!(format_amount(100.0, "USD"), "$100");
    }

    #[test]
    fn fractional_amounts_keep_cents() {
        assert_eq!(format_amount(12.5, "GBP"), "£12.50");
    }

    #[test]
    fn unknown_currency_is_suffixed() {
        assert_eq!(format_amount(40.0, "CHF"), "40 CHF");
    }
}
