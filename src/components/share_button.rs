use crate::analytics::use_tracker;
use crate::mobile::{HapticPattern, ShareData, ShareOutcome, share_or_copy, use_haptic_feedback};
use serde_json::json;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ShareButtonProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub text: Option<AttrValue>,
    /// Defaults to the current page.
    #[prop_or_default]
    pub url: Option<AttrValue>,
}

fn label(outcome: Option<ShareOutcome>) -> &'static str {
    match outcome {
        None | Some(ShareOutcome::Shared) => "Share this cause",
        Some(ShareOutcome::Copied) => "Link copied!",
        Some(ShareOutcome::Failed) => "Could not share",
    }
}

#[function_component]
pub fn ShareButton(props: &ShareButtonProps) -> Html {
    let tracker = use_tracker();
    let haptics = use_haptic_feedback();
    let outcome = use_state(|| None::<ShareOutcome>);

    let onclick = {
        let outcome = outcome.clone();
        let data = ShareData {
            title: props.title.to_string(),
            text: props.text.as_ref().map(|t| t.to_string()),
            url: props
                .url
                .as_ref()
                .map(|u| u.to_string())
                .or_else(|| web_sys::window().and_then(|w| w.location().href().ok())),
        };
        Callback::from(move |_| {
            haptics.trigger(HapticPattern::Light);
            let outcome = outcome.clone();
            let data = data.clone();
            let tracker = tracker.clone();
            spawn_local(async move {
                let result = share_or_copy(&data).await;
                tracker.track("share", json!({ "outcome": format!("{:?}", result).to_lowercase() }));
                outcome.set(Some(result));
            });
        })
    };

    html! {
        <button {onclick} class="bg-hope-600 text-ink-50" style="border:none; border-radius:999px; padding:10px 18px; font-weight:600;">
            { label(*outcome) }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_follows_outcome() {
        assert_eq!(label(None), "Share this cause");
        assert_eq!(label(Some(ShareOutcome::Copied)), "Link copied!");
        assert_eq!(label(Some(ShareOutcome::Failed)), "Could not share");
    }
}
