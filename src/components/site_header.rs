use crate::analytics::use_tracker;
use crate::mobile::{DeviceInfo, ScrollDirection, use_scroll_direction};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SiteHeaderProps {
    pub device: DeviceInfo,
    pub donate_anchor: AttrValue,
}

#[function_component]
pub fn SiteHeader(props: &SiteHeaderProps) -> Html {
    let scroll = use_scroll_direction();
    let tracker = use_tracker();
    // out of the way while reading down, back as soon as the visitor scrolls up
    let hidden = !scroll.at_top && scroll.direction == Some(ScrollDirection::Down);

    let cta = Callback::from(move |_| tracker.cta_click("header-donate"));
    let links = if props.device.is_mobile && !props.device.is_tablet {
        html! {}
    } else {
        html! {
            <nav style="display:flex; gap:18px; font-size:15px;">
                <a href="#projects" class="text-ink-700">{"Projects"}</a>
                <a href="#impact" class="text-ink-700">{"Impact"}</a>
                <a href="#about" class="text-ink-700">{"About us"}</a>
            </nav>
        }
    };

    html! {
        <header class={classes!("site-header", "bg-ink-50", hidden.then_some("is-hidden"))} style="z-index:30; box-shadow:0 1px 0 rgba(15,23,42,0.08);">
            <div style="display:flex; align-items:center; justify-content:space-between; gap:16px; padding:12px 16px;">
                <strong class="text-brand-600" style="font-size:18px;">{"Hope Wells"}</strong>
                { links }
                <a href={props.donate_anchor.clone()} onclick={cta} class="bg-cta" style="color:#fff; padding:8px 14px; border-radius:999px; font-weight:600; text-decoration:none;">
                    {"Donate"}
                    <span class="animate-heart-beat" style="display:inline-block; margin-left:6px;">{"♥"}</span>
                </a>
            </div>
        </header>
    }
}
