use crate::config::use_site_config;
use crate::mobile::detect::DeviceInfo;
use crate::util::debounced_window_events;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Window};
use yew::prelude::*;

/// `--vh` custom property value for a given inner height.
pub fn vh_value(inner_height: f64) -> String {
    format!("{:.2}px", inner_height.max(0.0) * 0.01)
}

/// Mobile browsers count the collapsing URL bar in `100vh`; expose the real
/// height as `--vh` so styles can use `calc(var(--vh) * 100)`.
pub fn sync_viewport_height_var(window: &Window) {
    let Some(height) = window.inner_height().ok().and_then(|v| v.as_f64()) else {
        return;
    };
    let root = window
        .document()
        .and_then(|d| d.document_element())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if let Some(root) = root {
        let _ = root.style().set_property("--vh", &vh_value(height));
    }
}

/// Device descriptor kept in sync with resize / orientation changes.
#[hook]
pub fn use_device_info() -> DeviceInfo {
    let cfg = use_site_config();
    let bp = cfg.breakpoints;
    let info = use_state_eq(|| DeviceInfo::detect(&bp));
    {
        let info = info.clone();
        use_effect_with((bp, cfg.resize_debounce_ms), move |(bp, delay)| {
            let bp = *bp;
            if let Some(w) = web_sys::window() {
                sync_viewport_height_var(&w);
            }
            let sub = debounced_window_events(&["resize", "orientationchange"], *delay, move |w| {
                sync_viewport_height_var(w);
                let next = DeviceInfo::detect(&bp);
                log::debug!("viewport {}x{} ({:?})", next.width, next.height, next.orientation);
                info.set(next);
            });
            move || drop(sub)
        });
    }
    (*info).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vh_is_one_percent_of_inner_height() {
        assert_eq!(vh_value(800.0), "8.00px");
        assert_eq!(vh_value(667.0), "6.67px");
        assert_eq!(vh_value(-5.0), "0.00px");
    }
}
