use crate::analytics::{DonationFrequency, use_tracker};
use crate::mobile::{HapticPattern, SwipeOptions, use_haptic_feedback, use_swipe};
use crate::util::format_amount;
use yew::prelude::*;

pub const PRESET_AMOUNTS: [f64; 4] = [10.0, 25.0, 50.0, 100.0];

/// Checkout link carrying the chosen amount and frequency.
pub fn checkout_href(base: &str, amount: f64, frequency: DonationFrequency, campaign: Option<&str>) -> String {
    let sep = if base.contains('?') { '&' } else { '?' };
    let freq = match frequency {
        DonationFrequency::OneTime => "one_time",
        DonationFrequency::Monthly => "monthly",
    };
    let mut href = format!("{}{}amount={}&frequency={}", base, sep, amount, freq);
    if let Some(c) = campaign {
        let c: String = js_sys::encode_uri_component(c).into();
        href.push_str(&format!("&campaign={}", c));
    }
    href
}

fn step(index: usize, forward: bool) -> usize {
    if forward {
        (index + 1).min(PRESET_AMOUNTS.len() - 1)
    } else {
        index.saturating_sub(1)
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct DonatePanelProps {
    pub checkout_url: AttrValue,
    #[prop_or_default]
    pub campaign: Option<AttrValue>,
}

#[function_component]
pub fn DonatePanel(props: &DonatePanelProps) -> Html {
    let tracker = use_tracker();
    let haptics = use_haptic_feedback();
    let selected = use_state(|| 1usize);
    let frequency = use_state(|| DonationFrequency::OneTime);

    // swipe across the amount row to step between presets
    let swipe = {
        let next = {
            let selected = selected.clone();
            Callback::from(move |_| selected.set(step(*selected, true)))
        };
        let prev = {
            let selected = selected.clone();
            Callback::from(move |_| selected.set(step(*selected, false)))
        };
        use_swipe(SwipeOptions {
            on_swipe_left: Some(next),
            on_swipe_right: Some(prev),
            ..Default::default()
        })
    };

    let amount = PRESET_AMOUNTS[*selected];
    let currency = tracker.currency.clone();

    let toggle_frequency = {
        let frequency = frequency.clone();
        Callback::from(move |_| {
            haptics.trigger(HapticPattern::Selection);
            frequency.set(match *frequency {
                DonationFrequency::OneTime => DonationFrequency::Monthly,
                DonationFrequency::Monthly => DonationFrequency::OneTime,
            });
        })
    };

    let donate = {
        let tracker = tracker.clone();
        let freq = *frequency;
        let base = props.checkout_url.clone();
        let campaign = props.campaign.clone();
        Callback::from(move |_| {
            haptics.trigger(HapticPattern::Success);
            tracker.donation(amount, freq, campaign.as_ref().map(|c| c.to_string()));
            if let Some(win) = web_sys::window() {
                let href = checkout_href(&base, amount, freq, campaign.as_deref());
                if let Err(e) = win.location().set_href(&href) {
                    log::error!("cannot open checkout: {:?}", e);
                }
            }
        })
    };

    let amount_buttons = PRESET_AMOUNTS.iter().enumerate().map(|(i, a)| {
        let selected_handle = selected.clone();
        let onclick = Callback::from(move |_| selected_handle.set(i));
        let class = if i == *selected { "bg-brand-500 text-ink-50" } else { "bg-ink-100 text-ink-900" };
        html! {
            <button {onclick} class={class} style="flex:1; padding:12px 0; border:none; border-radius:10px; font-weight:600; font-size:16px;">
                { format_amount(*a, &currency) }
            </button>
        }
    });

    html! {
        <div class="bg-card animate-slide-up" style="border-radius:16px; padding:20px; display:flex; flex-direction:column; gap:14px; box-shadow:0 8px 24px rgba(15,23,42,0.12);">
            <h3 class="text-ink-900" style="margin:0; font-size:20px;">{"Choose your gift"}</h3>
            <div
                style="display:flex; gap:8px; touch-action:pan-y;"
                ontouchstart={swipe.on_touch_start}
                ontouchend={swipe.on_touch_end}
                ontouchcancel={swipe.on_touch_cancel}
            >
                { for amount_buttons }
            </div>
            <label class="text-ink-700" style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                <input type="checkbox" checked={*frequency == DonationFrequency::Monthly} onclick={toggle_frequency} />
                <span>{"Make it monthly"}</span>
            </label>
            <button onclick={donate} class="bg-cta animate-pulse-soft" style="border:none; border-radius:12px; padding:14px; color:#fff; font-size:18px; font-weight:700;">
                { format!("Donate {}{}", format_amount(amount, &currency), if *frequency == DonationFrequency::Monthly { " / month" } else { "" }) }
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkout_link_carries_amount_and_frequency() {
        assert_eq!(
            checkout_href("https://give.example.org/checkout", 25.0, DonationFrequency::Monthly, None),
            "https://give.example.org/checkout?amount=25&frequency=monthly"
        );
        assert_eq!(
            checkout_href("/checkout?lang=en", 10.5, DonationFrequency::OneTime, None),
            "/checkout?lang=en&amount=10.5&frequency=one_time"
        );
    }

    #[test]
    fn preset_stepping_clamps_at_the_ends() {
        assert_eq!(step(0, false), 0);
        assert_eq!(step(0, true), 1);
        assert_eq!(step(PRESET_AMOUNTS.len() - 1, true), PRESET_AMOUNTS.len() - 1);
    }
}
