use crate::config::use_site_config;
use crate::util::debounced_window_events;
use serde::Serialize;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ScrollDirection {
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ScrollState {
    pub y: f64,
    pub direction: Option<ScrollDirection>,
    pub at_top: bool,
}

/// Tracks the current scroll offset and the direction of the last real move.
#[derive(Clone, Debug)]
pub struct ScrollTracker {
    y: f64,
    /// Offset of the last move that changed the direction.
    anchor_y: f64,
    direction: Option<ScrollDirection>,
    threshold: f64,
}

impl ScrollTracker {
    pub fn new(initial_y: f64, threshold: f64) -> Self {
        Self {
            y: initial_y,
            anchor_y: initial_y,
            direction: None,
            threshold,
        }
    }

    /// Feed a new offset. The offset is always taken; moves smaller than the
    /// threshold (measured from the anchor) leave the direction untouched.
    pub fn update(&mut self, y: f64) -> ScrollState {
        self.y = y;
        let delta = y - self.anchor_y;
        if delta.abs() >= self.threshold {
            self.direction = Some(if delta > 0.0 { ScrollDirection::Down } else { ScrollDirection::Up });
            self.anchor_y = y;
        }
        self.state()
    }

    pub fn state(&self) -> ScrollState {
        ScrollState {
            y: self.y,
            direction: self.direction,
            at_top: self.y <= 0.0,
        }
    }
}

fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

#[hook]
pub fn use_scroll_direction() -> ScrollState {
    let cfg = use_site_config();
    let tracker = use_mut_ref(|| ScrollTracker::new(scroll_y(), cfg.scroll_threshold));
    let state = use_state_eq(|| tracker.borrow().state());
    {
        let state = state.clone();
        use_effect_with(cfg.scroll_debounce_ms, move |delay| {
            let sub = debounced_window_events(&["scroll"], *delay, move |w| {
                let y = w.scroll_y().unwrap_or(0.0);
                state.set(tracker.borrow_mut().update(y));
            });
            move || drop(sub)
        });
    }
    *state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_direction_of_last_move() {
        let mut t = ScrollTracker::new(0.0, 5.0);
        assert_eq!(t.state().direction, None);
        assert!(t.state().at_top);

        let s = t.update(120.0);
        assert_eq!(s.direction, Some(ScrollDirection::Down));
        assert!(!s.at_top);

        let s = t.update(40.0);
        assert_eq!(s.direction, Some(ScrollDirection::Up));
        assert_eq!(s.y, 40.0);
    }

    #[test]
    fn jitter_below_threshold_is_ignored() {
        let mut t = ScrollTracker::new(100.0, 5.0);
        t.update(200.0);
        let s = t.update(197.0);
        assert_eq!(s.direction, Some(ScrollDirection::Down));
        assert_eq!(s.y, 197.0);
        // small steps add up against the anchor
        let s = t.update(194.0);
        assert_eq!(s.direction, Some(ScrollDirection::Up));
    }

    #[test]
    fn small_final_step_still_lands_at_top() {
        let mut t = ScrollTracker::new(300.0, 5.0);
        t.update(3.0);
        let s = t.update(0.0);
        assert_eq!(s.y, 0.0);
        assert!(s.at_top);
        assert_eq!(s.direction, Some(ScrollDirection::Up));
    }

    #[test]
    fn back_to_top() {
        let mut t = ScrollTracker::new(300.0, 5.0);
        let s = t.update(0.0);
        assert!(s.at_top);
        assert_eq!(s.direction, Some(ScrollDirection::Up));
    }
}
