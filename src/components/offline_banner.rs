use crate::mobile::NetworkStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct OfflineBannerProps {
    pub status: NetworkStatus,
}

#[function_component]
pub fn OfflineBanner(props: &OfflineBannerProps) -> Html {
    let (text, class) = if !props.status.online {
        ("You are offline. Donations will open again once you reconnect.", "bg-heart-600 text-ink-50")
    } else if props.status.is_slow() {
        ("Slow connection: images load as you scroll.", "bg-ink-100 text-ink-700")
    } else {
        return html! {};
    };
    html! {
        <div role="status" class={classes!(class, "animate-fade-in")} style="padding:8px 12px; text-align:center; font-size:13px;">
            { text }
        </div>
    }
}
