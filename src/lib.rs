//! Front end of the Hope Wells donation site: lazy images, mobile/device
//! hooks, an analytics pass-through and the design tokens, as a Yew app.

pub mod analytics;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod mobile;
pub mod theme;
pub mod util;
