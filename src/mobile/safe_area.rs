// Safe-area insets. The stylesheet binds --sat/--sar/--sab/--sal to
// env(safe-area-inset-*) so computed style exposes them as px strings.
use crate::util::debounced_window_events;
use serde::Serialize;
use web_sys::Window;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
pub struct SafeAreaInsets {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

pub fn parse_px(raw: &str) -> i32 {
    let raw = raw.trim();
    let num = raw.strip_suffix("px").unwrap_or(raw).trim();
    num.parse::<f64>().map(|v| v.round() as i32).unwrap_or(0)
}

pub fn read_insets(window: &Window) -> SafeAreaInsets {
    let style = window
        .document()
        .and_then(|d| d.document_element())
        .and_then(|root| window.get_computed_style(&root).ok().flatten());
    let Some(style) = style else {
        return SafeAreaInsets::default();
    };
    let prop = |name: &str| parse_px(&style.get_property_value(name).unwrap_or_default());
    SafeAreaInsets {
        top: prop("--sat"),
        right: prop("--sar"),
        bottom: prop("--sab"),
        left: prop("--sal"),
    }
}

#[hook]
pub fn use_safe_area() -> SafeAreaInsets {
    let cfg = crate::config::use_site_config();
    let insets = use_state_eq(|| web_sys::window().map(|w| read_insets(&w)).unwrap_or_default());
    {
        let insets = insets.clone();
        use_effect_with(cfg.resize_debounce_ms, move |delay| {
            let sub = debounced_window_events(&["resize", "orientationchange"], *delay, move |w| {
                insets.set(read_insets(w))
            });
            move || drop(sub)
        });
    }
    *insets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_computed_px_values() {
        assert_eq!(parse_px("44px"), 44);
        assert_eq!(parse_px(" 34px "), 34);
        assert_eq!(parse_px("20.6px"), 21);
        assert_eq!(parse_px("0"), 0);
    }

    #[test]
    fn unresolved_values_read_as_zero() {
        assert_eq!(parse_px(""), 0);
        assert_eq!(parse_px("env(safe-area-inset-top)"), 0);
    }
}
