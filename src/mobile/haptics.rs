use serde::Serialize;
use wasm_bindgen::JsValue;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum HapticPattern {
    Light,
    Medium,
    Heavy,
    Selection,
    Success,
    Error,
}

impl HapticPattern {
    /// Alternating vibrate / pause durations in ms.
    pub fn durations(self) -> &'static [u32] {
        match self {
            HapticPattern::Light => &[10],
            HapticPattern::Medium => &[20],
            HapticPattern::Heavy => &[30],
            HapticPattern::Selection => &[5],
            HapticPattern::Success => &[10, 50, 10],
            HapticPattern::Error => &[50, 100, 50],
        }
    }
}

fn vibration_supported() -> bool {
    web_sys::window()
        .map(|w| js_sys::Reflect::has(&w.navigator(), &JsValue::from_str("vibrate")).unwrap_or(false))
        .unwrap_or(false)
}

/// Fire a vibration pattern. `false` when unsupported or refused.
pub fn vibrate(pattern: HapticPattern) -> bool {
    if !vibration_supported() {
        return false;
    }
    let Some(window) = web_sys::window() else {
        return false;
    };
    let navigator = window.navigator();
    match pattern.durations() {
        [single] => navigator.vibrate_with_duration(*single),
        many => {
            let arr = js_sys::Array::new();
            for d in many {
                arr.push(&JsValue::from(*d));
            }
            navigator.vibrate_with_pattern(&arr)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HapticFeedback {
    pub supported: bool,
}

impl HapticFeedback {
    pub fn trigger(&self, pattern: HapticPattern) -> bool {
        self.supported && vibrate(pattern)
    }
}

#[hook]
pub fn use_haptic_feedback() -> HapticFeedback {
    let supported = use_memo((), |_| vibration_supported());
    HapticFeedback { supported: *supported }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_pulses_scale_with_intensity() {
        let d = |p: HapticPattern| p.durations()[0];
        assert!(d(HapticPattern::Selection) < d(HapticPattern::Light));
        assert!(d(HapticPattern::Light) < d(HapticPattern::Medium));
        assert!(d(HapticPattern::Medium) < d(HapticPattern::Heavy));
    }

    #[test]
    fn notification_patterns_alternate_pulse_and_pause() {
        assert_eq!(HapticPattern::Success.durations(), &[10, 50, 10]);
        assert_eq!(HapticPattern::Error.durations().len() % 2, 1);
    }

    #[test]
    fn unsupported_feedback_never_triggers() {
        let h = HapticFeedback { supported: false };
        assert!(!h.trigger(HapticPattern::Heavy));
    }
}
