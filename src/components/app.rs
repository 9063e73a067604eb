use super::{
    donate_panel::DonatePanel, install_banner::InstallBanner, lazy_image::LazyImage,
    offline_banner::OfflineBanner, share_button::ShareButton, site_header::SiteHeader,
};
use crate::analytics::use_tracker;
use crate::config::SiteConfig;
use crate::mobile::{Orientation, use_device_info, use_network_status, use_page_visibility, use_safe_area};
use crate::theme::Theme;
use wasm_bindgen::JsCast;
use yew::prelude::*;

const THEME_STYLE_ID: &str = "theme-tokens";
const CHECKOUT_URL: &str = "https://give.hopewells.org/checkout";

struct Project {
    title: &'static str,
    blurb: &'static str,
    image: &'static str,
}

const PROJECTS: &[Project] = &[
    Project {
        title: "A well for Kasese",
        blurb: "Clean water for 1,200 people within walking distance of the school.",
        image: "/img/projects/kasese-well.jpg",
    },
    Project {
        title: "Rain tanks in Turkana",
        blurb: "Harvesting the short rains so families make it through the dry season.",
        image: "/img/projects/turkana-tanks.jpg",
    },
    Project {
        title: "Hygiene kits for Gulu",
        blurb: "Soap, filters and training for 300 households.",
        image: "/img/projects/gulu-kits.jpg",
    },
    Project {
        title: "School latrines in Mbale",
        blurb: "Separate, safe latrines keep girls in class.",
        image: "/img/projects/mbale-latrines.jpg",
    },
];

/// Mount the token stylesheet once per document.
fn inject_theme_stylesheet() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.get_element_by_id(THEME_STYLE_ID).is_some() {
        return;
    }
    let style = document
        .create_element("style")
        .ok()
        .and_then(|el| el.dyn_into::<web_sys::HtmlStyleElement>().ok());
    let (Some(style), Some(head)) = (style, document.head()) else {
        log::warn!("could not mount theme stylesheet");
        return;
    };
    style.set_id(THEME_STYLE_ID);
    style.set_text_content(Some(&Theme::default().stylesheet()));
    let _ = head.append_child(&style);
}

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: SiteConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    use_effect_with((), |_| {
        inject_theme_stylesheet();
        || ()
    });
    html! {
        <ContextProvider<SiteConfig> context={props.config.clone()}>
            <Page />
        </ContextProvider<SiteConfig>>
    }
}

#[function_component(Page)]
fn page() -> Html {
    let device = use_device_info();
    let insets = use_safe_area();
    let network = use_network_status();
    let visible = use_page_visibility();
    let tracker = use_tracker();
    let page_view_sent = use_mut_ref(|| false);

    // first time the page is actually seen, not when a background tab loads it
    {
        let tracker = tracker.clone();
        use_effect_with(visible, move |visible| {
            if *visible && !*page_view_sent.borrow() {
                *page_view_sent.borrow_mut() = true;
                let path = web_sys::window()
                    .and_then(|w| w.location().pathname().ok())
                    .unwrap_or_else(|| "/".to_string());
                tracker.page_view(&path);
            }
            || ()
        });
    }

    let columns = if device.is_desktop {
        4
    } else if device.is_tablet || device.orientation == Orientation::Landscape {
        2
    } else {
        1
    };
    // slow or save-data connections only start fetching when the card is on screen
    let root_margin: AttrValue = if network.is_slow() { "0px".into() } else { "200px".into() };

    let cards = PROJECTS.iter().map(|p| {
        let tracker = tracker.clone();
        let title = p.title;
        let on_error = Callback::from(move |_: ()| {
            tracker.track("image_error", serde_json::json!({ "project": title }))
        });
        html! {
            <article class="bg-card" style="border-radius:14px; overflow:hidden; box-shadow:0 4px 14px rgba(15,23,42,0.08);">
                <LazyImage
                    src={p.image}
                    alt={p.title}
                    root_margin={root_margin.clone()}
                    {on_error}
                    class="project-image"
                />
                <div style="padding:12px 14px;">
                    <h4 class="text-ink-900" style="margin:0 0 6px;">{ p.title }</h4>
                    <p class="text-ink-500" style="margin:0; font-size:14px;">{ p.blurb }</p>
                </div>
            </article>
        }
    });

    html! {
        <div id="root" class="text-ink-900" style={format!("padding-bottom:{}px;", insets.bottom)}>
            <OfflineBanner status={network.clone()} />
            <SiteHeader device={device.clone()} donate_anchor="#donate" />
            <section class="bg-hero full-height" style="display:flex; flex-direction:column; justify-content:center; gap:20px; padding:24px 16px;">
                <h1 class="animate-fade-in" style="color:#fff; font-size:clamp(28px, 6vw, 52px); margin:0;">{"Clean water changes everything."}</h1>
                <p style="color:#fff; opacity:0.9; max-width:560px; margin:0;">{"Every gift funds wells, tanks and hygiene training in East Africa."}</p>
                <div id="donate" style="max-width:460px; width:100%;">
                    <DonatePanel checkout_url={CHECKOUT_URL} campaign={Some(AttrValue::from("clean-water-2026"))} />
                </div>
            </section>
            <section id="projects" style="padding:24px 16px;">
                <div style="display:flex; justify-content:space-between; align-items:center; margin-bottom:16px;">
                    <h2 style="margin:0;">{"Our projects"}</h2>
                    <ShareButton title="Hope Wells" text={Some(AttrValue::from("Help bring clean water to East Africa"))} />
                </div>
                <div style={format!("display:grid; grid-template-columns:repeat({}, minmax(0, 1fr)); gap:16px;", columns)}>
                    { for cards }
                </div>
            </section>
            <InstallBanner {insets} />
        </div>
    }
}
