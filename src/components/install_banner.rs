use crate::analytics::use_tracker;
use crate::mobile::{SafeAreaInsets, use_install_prompt};
use serde_json::json;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct InstallBannerProps {
    pub insets: SafeAreaInsets,
}

#[function_component]
pub fn InstallBanner(props: &InstallBannerProps) -> Html {
    let prompt = use_install_prompt();
    let tracker = use_tracker();
    let dismissed = use_state(|| false);

    if !prompt.can_install || prompt.installed || *dismissed {
        return html! {};
    }

    let install_cb = {
        let prompt = prompt.clone();
        Callback::from(move |_| {
            let prompt = prompt.clone();
            let tracker = tracker.clone();
            spawn_local(async move {
                let accepted = prompt.prompt().await;
                tracker.track("pwa_install", json!({ "accepted": accepted }));
            });
        })
    };
    let dismiss_cb = {
        let dismissed = dismissed.clone();
        Callback::from(move |_| dismissed.set(true))
    };

    let bottom = 12 + props.insets.bottom;
    html! {
        <div class="bg-ink-900 text-ink-50 animate-slide-up" style={format!("position:fixed; left:12px; right:12px; bottom:{}px; border-radius:14px; padding:12px 16px; display:flex; align-items:center; gap:12px; z-index:40;", bottom)}>
            <span style="flex:1; font-size:14px;">{"Add us to your home screen to follow our projects."}</span>
            <button onclick={install_cb} class="bg-brand-500" style="border:none; border-radius:8px; padding:8px 12px; color:#fff; font-weight:600;">{"Install"}</button>
            <button onclick={dismiss_cb} style="background:none; border:none; color:inherit; opacity:0.7;">{"Not now"}</button>
        </div>
    }
}
