//! Device detection predicates and browser-state hooks for phones and tablets.

pub mod clipboard;
pub mod detect;
pub mod gesture;
pub mod haptics;
pub mod install;
pub mod network;
pub mod safe_area;
pub mod scroll;
pub mod viewport;
pub mod visibility;

pub use clipboard::{ShareData, ShareOutcome, copy_to_clipboard, share_or_copy};
pub use detect::{
    DeviceInfo, Orientation, has_notch, is_android, is_desktop, is_ios, is_mobile, is_standalone, is_tablet,
    is_touch_device,
};
pub use gesture::{SwipeDirection, SwipeGesture, SwipeHandlers, SwipeOptions, use_swipe};
pub use haptics::{HapticFeedback, HapticPattern, use_haptic_feedback};
pub use install::{InstallPrompt, use_install_prompt};
pub use network::{NetworkStatus, use_network_status};
pub use safe_area::{SafeAreaInsets, use_safe_area};
pub use scroll::{ScrollDirection, ScrollState, use_scroll_direction};
pub use viewport::use_device_info;
pub use visibility::use_page_visibility;
