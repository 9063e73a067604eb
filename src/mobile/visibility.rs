use crate::util::listen;
use yew::prelude::*;

fn page_visible() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .map(|d| !d.hidden())
        .unwrap_or(true)
}

/// `true` while the tab is in the foreground.
#[hook]
pub fn use_page_visibility() -> bool {
    let visible = use_state_eq(page_visible);
    {
        let visible = visible.clone();
        use_effect_with((), move |_| {
            let guard = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| listen(&doc, "visibilitychange", move |_| visible.set(page_visible())));
            move || drop(guard)
        });
    }
    *visible
}
