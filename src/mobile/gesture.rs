//! Swipe detection from touch-start / touch-end pairs.

use crate::config::use_site_config;
use serde::Serialize;
use web_sys::{TouchEvent, TouchList};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
    /// Event timestamp in ms.
    pub t: f64,
}

impl TouchPoint {
    pub fn new(x: f64, y: f64, t: f64) -> Self {
        Self { x, y, t }
    }

    fn first_of(list: &TouchList, t: f64) -> Option<Self> {
        list.item(0)
            .map(|touch| Self::new(touch.client_x() as f64, touch.client_y() as f64, t))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeGesture {
    pub direction: SwipeDirection,
    pub dx: f64,
    pub dy: f64,
    pub duration_ms: f64,
}

/// Direction of the dominant axis, if its displacement exceeds `threshold`.
pub fn classify(dx: f64, dy: f64, threshold: f64) -> Option<SwipeDirection> {
    let (ax, ay) = (dx.abs(), dy.abs());
    if ax >= ay {
        if ax <= threshold {
            return None;
        }
        Some(if dx < 0.0 { SwipeDirection::Left } else { SwipeDirection::Right })
    } else {
        if ay <= threshold {
            return None;
        }
        Some(if dy < 0.0 { SwipeDirection::Up } else { SwipeDirection::Down })
    }
}

/// Holds the touch-start point of the gesture in progress.
#[derive(Debug, Default)]
pub struct SwipeTracker {
    start: Option<TouchPoint>,
}

impl SwipeTracker {
    pub fn begin(&mut self, p: TouchPoint) {
        self.start = Some(p);
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }

    /// Ends the gesture. The start point is consumed, so a gesture yields at
    /// most one result.
    pub fn finish(&mut self, end: TouchPoint, threshold: f64) -> Option<SwipeGesture> {
        let start = self.start.take()?;
        let dx = end.x - start.x;
        let dy = end.y - start.y;
        classify(dx, dy, threshold).map(|direction| SwipeGesture {
            direction,
            dx,
            dy,
            duration_ms: (end.t - start.t).max(0.0),
        })
    }
}

#[derive(Clone, PartialEq, Default)]
pub struct SwipeOptions {
    /// Minimum displacement in px; the site config value when `None`.
    pub threshold: Option<f64>,
    pub on_swipe_left: Option<Callback<()>>,
    pub on_swipe_right: Option<Callback<()>>,
    pub on_swipe_up: Option<Callback<()>>,
    pub on_swipe_down: Option<Callback<()>>,
    pub on_swipe: Option<Callback<SwipeGesture>>,
}

impl SwipeOptions {
    fn dispatch(&self, gesture: SwipeGesture) {
        let directional = match gesture.direction {
            SwipeDirection::Left => &self.on_swipe_left,
            SwipeDirection::Right => &self.on_swipe_right,
            SwipeDirection::Up => &self.on_swipe_up,
            SwipeDirection::Down => &self.on_swipe_down,
        };
        if let Some(cb) = directional {
            cb.emit(());
        }
        if let Some(cb) = &self.on_swipe {
            cb.emit(gesture);
        }
    }
}

/// Touch handlers to spread onto the element that should react to swipes.
#[derive(Clone, PartialEq)]
pub struct SwipeHandlers {
    pub on_touch_start: Callback<TouchEvent>,
    pub on_touch_end: Callback<TouchEvent>,
    pub on_touch_cancel: Callback<TouchEvent>,
}

#[hook]
pub fn use_swipe(options: SwipeOptions) -> SwipeHandlers {
    let cfg = use_site_config();
    let tracker = use_mut_ref(SwipeTracker::default);
    let threshold = options.threshold.unwrap_or(cfg.swipe_threshold);

    let on_touch_start = {
        let tracker = tracker.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(p) = TouchPoint::first_of(&e.touches(), e.time_stamp()) {
                tracker.borrow_mut().begin(p);
            }
        })
    };
    let on_touch_end = {
        let tracker = tracker.clone();
        Callback::from(move |e: TouchEvent| {
            let Some(end) = TouchPoint::first_of(&e.changed_touches(), e.time_stamp()) else {
                tracker.borrow_mut().cancel();
                return;
            };
            let gesture = tracker.borrow_mut().finish(end, threshold);
            if let Some(g) = gesture {
                log::debug!("swipe {:?} dx={:.0} dy={:.0}", g.direction, g.dx, g.dy);
                options.dispatch(g);
            }
        })
    };
    let on_touch_cancel = Callback::from(move |_: TouchEvent| tracker.borrow_mut().cancel());

    SwipeHandlers {
        on_touch_start,
        on_touch_end,
        on_touch_cancel,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counter() -> (Rc<Cell<u32>>, Callback<()>) {
        let hits = Rc::new(Cell::new(0));
        let cb = {
            let hits = hits.clone();
            Callback::from(move |_| hits.set(hits.get() + 1))
        };
        (hits, cb)
    }

    #[test]
    fn left_swipe_fires_only_left_once() {
        let (left, on_left) = counter();
        let (right, on_right) = counter();
        let (up, on_up) = counter();
        let (down, on_down) = counter();
        let opts = SwipeOptions {
            threshold: Some(50.0),
            on_swipe_left: Some(on_left),
            on_swipe_right: Some(on_right),
            on_swipe_up: Some(on_up),
            on_swipe_down: Some(on_down),
            on_swipe: None,
        };
        let mut tracker = SwipeTracker::default();
        tracker.begin(TouchPoint::new(100.0, 100.0, 0.0));
        let g = tracker.finish(TouchPoint::new(20.0, 100.0, 120.0), 50.0).unwrap();
        opts.dispatch(g);
        // a stray second touchend without a new start must not fire again
        assert!(tracker.finish(TouchPoint::new(20.0, 100.0, 130.0), 50.0).is_none());

        assert_eq!(left.get(), 1);
        assert_eq!(right.get() + up.get() + down.get(), 0);
        assert_eq!(g.dx, -80.0);
        assert_eq!(g.duration_ms, 120.0);
    }

    #[test]
    fn below_threshold_is_not_a_swipe() {
        assert_eq!(classify(-50.0, 0.0, 50.0), None);
        assert_eq!(classify(10.0, 30.0, 50.0), None);
        assert_eq!(classify(-51.0, 0.0, 50.0), Some(SwipeDirection::Left));
    }

    #[test]
    fn dominant_axis_wins() {
        assert_eq!(classify(60.0, 40.0, 50.0), Some(SwipeDirection::Right));
        assert_eq!(classify(40.0, -90.0, 50.0), Some(SwipeDirection::Up));
        assert_eq!(classify(-20.0, 75.0, 50.0), Some(SwipeDirection::Down));
    }

    #[test]
    fn cancel_drops_the_start_point() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(TouchPoint::new(0.0, 0.0, 0.0));
        tracker.cancel();
        assert!(tracker.finish(TouchPoint::new(200.0, 0.0, 10.0), 50.0).is_none());
    }

    #[test]
    fn generic_callback_receives_gesture() {
        let seen = Rc::new(Cell::new(None));
        let opts = SwipeOptions {
            on_swipe: Some({
                let seen = seen.clone();
                Callback::from(move |g: SwipeGesture| seen.set(Some(g.direction)))
            }),
            ..Default::default()
        };
        opts.dispatch(SwipeGesture {
            direction: SwipeDirection::Down,
            dx: 0.0,
            dy: 70.0,
            duration_ms: 90.0,
        });
        assert_eq!(seen.get(), Some(SwipeDirection::Down));
    }
}
