//! Device and browser feature detection.
//!
//! Predicates are evaluated against a [`DeviceSnapshot`] of the browser
//! globals so they stay pure. The zero-argument forms capture a fresh
//! snapshot and answer `false` when there is no `window`.

use crate::config::Breakpoints;
use crate::mobile::safe_area;
use serde::Serialize;
use wasm_bindgen::JsValue;

/// Screens at least this tall (CSS px, long edge) are notched iPhones.
const NOTCH_MIN_LONG_EDGE: u32 = 812;
/// Status bar alone reports a 20px inset on pre-notch devices.
const NOTCH_MIN_INSET_TOP: i32 = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct DeviceSnapshot {
    pub width: u32,
    pub height: u32,
    pub screen_long_edge: u32,
    pub user_agent: String,
    pub platform: String,
    pub max_touch_points: i32,
    pub has_touch_start: bool,
    pub safe_area_top: i32,
    pub standalone: bool,
}

impl DeviceSnapshot {
    pub fn capture() -> Option<Self> {
        let window = web_sys::window()?;
        let navigator = window.navigator();
        let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32;
        let screen_long_edge = window
            .screen()
            .ok()
            .map(|s| s.width().unwrap_or(0).max(s.height().unwrap_or(0)).max(0) as u32)
            .unwrap_or(0);
        let standalone = window
            .match_media("(display-mode: standalone)")
            .ok()
            .flatten()
            .map(|m| m.matches())
            .unwrap_or(false)
            || js_sys::Reflect::get(&navigator, &JsValue::from_str("standalone"))
                .ok()
                .and_then(|v| v.as_bool())
                .unwrap_or(false);
        Some(Self {
            width: dim(window.inner_width()),
            height: dim(window.inner_height()),
            screen_long_edge,
            user_agent: navigator.user_agent().unwrap_or_default(),
            platform: navigator.platform().unwrap_or_default(),
            max_touch_points: navigator.max_touch_points(),
            has_touch_start: js_sys::Reflect::has(&window, &JsValue::from_str("ontouchstart")).unwrap_or(false),
            safe_area_top: safe_area::read_insets(&window).top,
            standalone,
        })
    }

    pub fn is_touch_device(&self) -> bool {
        self.has_touch_start || self.max_touch_points > 0
    }

    pub fn is_mobile(&self, bp: &Breakpoints) -> bool {
        self.width <= bp.mobile_max || self.is_touch_device()
    }

    pub fn is_tablet(&self, bp: &Breakpoints) -> bool {
        self.width > bp.mobile_max && self.width <= bp.tablet_max
    }

    pub fn is_desktop(&self, bp: &Breakpoints) -> bool {
        self.width > bp.tablet_max
    }

    pub fn is_ios(&self) -> bool {
        let ua = &self.user_agent;
        ua.contains("iPad") || ua.contains("iPhone") || ua.contains("iPod")
            // iPadOS 13+ reports itself as a Mac
            || (self.platform == "MacIntel" && self.max_touch_points > 1)
    }

    pub fn is_android(&self) -> bool {
        self.user_agent.to_ascii_lowercase().contains("android")
    }

    pub fn has_notch(&self) -> bool {
        self.is_ios() && (self.safe_area_top > NOTCH_MIN_INSET_TOP || self.screen_long_edge >= NOTCH_MIN_LONG_EDGE)
    }

    pub fn orientation(&self) -> Orientation {
        if self.width > self.height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

/// Device descriptor mirrored into component state by `use_device_info`.
#[derive(Clone, Debug, PartialEq, Default, Serialize)]
pub struct DeviceInfo {
    pub is_mobile: bool,
    pub is_tablet: bool,
    pub is_desktop: bool,
    pub is_touch: bool,
    pub is_ios: bool,
    pub is_android: bool,
    pub has_notch: bool,
    pub is_standalone: bool,
    pub width: u32,
    pub height: u32,
    pub orientation: Orientation,
}

impl DeviceInfo {
    pub fn from_snapshot(s: &DeviceSnapshot, bp: &Breakpoints) -> Self {
        Self {
            is_mobile: s.is_mobile(bp),
            is_tablet: s.is_tablet(bp),
            is_desktop: s.is_desktop(bp),
            is_touch: s.is_touch_device(),
            is_ios: s.is_ios(),
            is_android: s.is_android(),
            has_notch: s.has_notch(),
            is_standalone: s.standalone,
            width: s.width,
            height: s.height,
            orientation: s.orientation(),
        }
    }

    pub fn detect(bp: &Breakpoints) -> Self {
        DeviceSnapshot::capture()
            .map(|s| Self::from_snapshot(&s, bp))
            .unwrap_or_default()
    }
}

fn check(pred: impl Fn(&DeviceSnapshot, &Breakpoints) -> bool) -> bool {
    DeviceSnapshot::capture().is_some_and(|s| pred(&s, &Breakpoints::default()))
}

pub fn is_mobile() -> bool {
    check(DeviceSnapshot::is_mobile)
}

pub fn is_tablet() -> bool {
    check(DeviceSnapshot::is_tablet)
}

pub fn is_desktop() -> bool {
    check(DeviceSnapshot::is_desktop)
}

pub fn is_touch_device() -> bool {
    check(|s, _| s.is_touch_device())
}

pub fn is_ios() -> bool {
    check(|s, _| s.is_ios())
}

pub fn is_android() -> bool {
    check(|s, _| s.is_android())
}

pub fn has_notch() -> bool {
    check(|s, _| s.has_notch())
}

pub fn is_standalone() -> bool {
    check(|s, _| s.standalone)
}
