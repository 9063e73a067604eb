use crate::config::use_site_config;
use crate::error::UiResult;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Light grey 4:3 box, inlined so it never costs a request.
pub const DEFAULT_PLACEHOLDER: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 4 3'%3E%3Crect width='4' height='3' fill='%23e2e8f0'/%3E%3C/svg%3E";

#[derive(Clone, Debug, PartialEq)]
pub struct LazyImageState {
    pub target: AttrValue,
    pub placeholder: AttrValue,
    pub current_src: AttrValue,
    /// Set on first intersection; the observer is gone after that.
    pub in_view: bool,
    pub loaded: bool,
    pub error: bool,
}

pub enum LazyImageAction {
    Intersected,
    Loaded,
    Failed,
    Reset { src: AttrValue, placeholder: AttrValue },
}

impl LazyImageState {
    pub fn new(src: AttrValue, placeholder: AttrValue) -> Self {
        Self {
            target: src,
            current_src: placeholder.clone(),
            placeholder,
            in_view: false,
            loaded: false,
            error: false,
        }
    }

    pub fn showing_placeholder(&self) -> bool {
        self.current_src == self.placeholder
    }

    fn status_class(&self) -> &'static str {
        if self.error {
            "is-error"
        } else if self.loaded {
            "is-loaded"
        } else {
            "is-pending"
        }
    }
}

impl Reducible for LazyImageState {
    type Action = LazyImageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use LazyImageAction::*;
        match action {
            Intersected => {
                if self.in_view {
                    return self;
                }
                let mut new = (*self).clone();
                new.in_view = true;
                new.current_src = new.target.clone();
                Rc::new(new)
            }
            Loaded => {
                if self.showing_placeholder() || self.loaded {
                    return self;
                }
                let mut new = (*self).clone();
                new.loaded = true;
                Rc::new(new)
            }
            Failed => {
                let mut new = (*self).clone();
                new.error = true;
                new.loaded = false;
                new.current_src = new.placeholder.clone();
                Rc::new(new)
            }
            Reset { src, placeholder } => {
                if self.target == src && self.placeholder == placeholder {
                    return self;
                }
                if self.target != src {
                    return Rc::new(LazyImageState::new(src, placeholder));
                }
                // same image, new placeholder: keep progress, the observer
                // may already be gone
                let mut new = (*self).clone();
                if new.showing_placeholder() {
                    new.current_src = placeholder.clone();
                }
                new.placeholder = placeholder;
                Rc::new(new)
            }
        }
    }
}

/// Live IntersectionObserver; disconnects when dropped.
struct Observation {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn intersection_observer_supported() -> bool {
    web_sys::window()
        .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

fn observe<F>(target: &Element, threshold: f64, root_margin: &str, on_visible: F) -> UiResult<Observation>
where
    F: Fn() + 'static,
{
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        let visible = entries.iter().any(|entry| {
            entry
                .dyn_into::<IntersectionObserverEntry>()
                .map(|e| e.is_intersecting())
                .unwrap_or(false)
        });
        if visible {
            observer.disconnect();
            on_visible();
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    init.set_root_margin(root_margin);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(target);
    Ok(Observation {
        observer,
        _callback: callback,
    })
}

#[derive(Properties, PartialEq, Clone)]
pub struct LazyImageProps {
    pub src: AttrValue,
    #[prop_or(AttrValue::Static(DEFAULT_PLACEHOLDER))]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Visible fraction that counts as "in view"; site config when unset.
    #[prop_or_default]
    pub threshold: Option<f64>,
    #[prop_or_default]
    pub root_margin: Option<AttrValue>,
    #[prop_or_default]
    pub on_load: Option<Callback<()>>,
    #[prop_or_default]
    pub on_error: Option<Callback<()>>,
}

#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let cfg = use_site_config();
    let img_ref = use_node_ref();
    let state = {
        let (src, placeholder) = (props.src.clone(), props.placeholder.clone());
        use_reducer_eq(move || LazyImageState::new(src, placeholder))
    };
    let threshold = props.threshold.unwrap_or(cfg.lazy_image.threshold);
    let root_margin = props
        .root_margin
        .clone()
        .unwrap_or_else(|| AttrValue::from(cfg.lazy_image.root_margin.clone()));

    // new source: start over
    {
        let dispatcher = state.dispatcher();
        use_effect_with((props.src.clone(), props.placeholder.clone()), move |(src, placeholder)| {
            dispatcher.dispatch(LazyImageAction::Reset {
                src: src.clone(),
                placeholder: placeholder.clone(),
            });
            || ()
        });
    }

    {
        let img_ref = img_ref.clone();
        let dispatcher = state.dispatcher();
        use_effect_with(
            (props.src.clone(), threshold.to_bits(), root_margin),
            move |(src, threshold, margin)| {
                let mut observation = None;
                if !intersection_observer_supported() {
                    // old browsers just load everything
                    dispatcher.dispatch(LazyImageAction::Intersected);
                } else if let Some(el) = img_ref.cast::<Element>() {
                    let on_visible = move || dispatcher.dispatch(LazyImageAction::Intersected);
                    match observe(&el, f64::from_bits(*threshold), margin, on_visible) {
                        Ok(o) => observation = Some(o),
                        Err(e) => log::warn!("cannot observe image {}: {}", src, e),
                    }
                }
                move || drop(observation)
            },
        );
    }

    let onload = {
        let dispatcher = state.dispatcher();
        let on_load = props.on_load.clone();
        let real_image = !state.showing_placeholder();
        Callback::from(move |_: Event| {
            dispatcher.dispatch(LazyImageAction::Loaded);
            if real_image {
                if let Some(cb) = &on_load {
                    cb.emit(());
                }
            }
        })
    };
    let onerror = {
        let dispatcher = state.dispatcher();
        let on_error = props.on_error.clone();
        let failed_src = state.current_src.clone();
        let placeholder_failed = state.showing_placeholder();
        Callback::from(move |_: Event| {
            if placeholder_failed {
                return;
            }
            log::warn!("image failed to load: {}", failed_src);
            dispatcher.dispatch(LazyImageAction::Failed);
            if let Some(cb) = &on_error {
                cb.emit(());
            }
        })
    };

    html! {
        <img
            ref={img_ref}
            src={state.current_src.clone()}
            alt={props.alt.clone()}
            class={classes!("lazy-image", state.status_class(), props.class.clone())}
            decoding="async"
            {onload}
            {onerror}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SRC: &str = "/img/well-project.jpg";
    const PH: &str = "/img/placeholder.svg";

    fn fresh() -> Rc<LazyImageState> {
        Rc::new(LazyImageState::new(AttrValue::Static(SRC), AttrValue::Static(PH)))
    }

    #[test]
    fn placeholder_until_intersection() {
        let s = fresh();
        assert_eq!(s.current_src.as_str(), PH);
        assert!(s.showing_placeholder());
        assert!(!s.in_view);
        // loading the placeholder does not reveal anything
        let s = s.reduce(LazyImageAction::Loaded);
        assert!(!s.loaded);
    }

    #[test]
    fn intersection_swaps_source_once() {
        let s = fresh().reduce(LazyImageAction::Intersected);
        assert_eq!(s.current_src.as_str(), SRC);
        assert!(s.in_view);

        let again = s.clone().reduce(LazyImageAction::Intersected);
        assert!(Rc::ptr_eq(&s, &again));
        assert_eq!(again.current_src.as_str(), SRC);
    }

    #[test]
    fn load_reveals_the_real_image() {
        let s = fresh()
            .reduce(LazyImageAction::Intersected)
            .reduce(LazyImageAction::Loaded);
        assert!(s.loaded);
        assert_eq!(s.status_class(), "is-loaded");
    }

    #[test]
    fn failure_reverts_to_placeholder_and_flags_error() {
        let s = fresh()
            .reduce(LazyImageAction::Intersected)
            .reduce(LazyImageAction::Failed);
        assert_eq!(s.current_src.as_str(), PH);
        assert!(s.error);
        assert!(!s.loaded);

        // no retry: later intersections leave the placeholder in place
        let s = s.reduce(LazyImageAction::Intersected);
        assert_eq!(s.current_src.as_str(), PH);
        let s = s.reduce(LazyImageAction::Loaded);
        assert!(!s.loaded);
        assert_eq!(s.status_class(), "is-error");
    }

    #[test]
    fn reset_on_new_source() {
        let s = fresh()
            .reduce(LazyImageAction::Intersected)
            .reduce(LazyImageAction::Failed)
            .reduce(LazyImageAction::Reset {
                src: AttrValue::Static("/img/school.jpg"),
                placeholder: AttrValue::Static(PH),
            });
        assert_eq!(s.target.as_str(), "/img/school.jpg");
        assert_eq!(s.current_src.as_str(), PH);
        assert!(!s.error && !s.in_view && !s.loaded);
    }

    #[test]
    fn placeholder_change_keeps_a_visible_image() {
        let s = fresh()
            .reduce(LazyImageAction::Intersected)
            .reduce(LazyImageAction::Loaded)
            .reduce(LazyImageAction::Reset {
                src: AttrValue::Static(SRC),
                placeholder: AttrValue::Static("/img/other.svg"),
            });
        assert!(s.in_view && s.loaded);
        assert_eq!(s.current_src.as_str(), SRC);
        assert_eq!(s.placeholder.as_str(), "/img/other.svg");
    }

    #[test]
    fn placeholder_change_before_intersection_swaps_placeholder() {
        let s = fresh().reduce(LazyImageAction::Reset {
            src: AttrValue::Static(SRC),
            placeholder: AttrValue::Static("/img/other.svg"),
        });
        assert!(!s.in_view);
        assert_eq!(s.current_src.as_str(), "/img/other.svg");
        let s = s.reduce(LazyImageAction::Intersected);
        assert_eq!(s.current_src.as_str(), SRC);
    }

    #[test]
    fn reset_with_same_props_is_a_no_op() {
        let s = fresh().reduce(LazyImageAction::Intersected);
        let same = s.clone().reduce(LazyImageAction::Reset {
            src: AttrValue::Static(SRC),
            placeholder: AttrValue::Static(PH),
        });
        assert!(Rc::ptr_eq(&s, &same));
    }
}
