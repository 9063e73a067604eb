pub mod app;
pub mod donate_panel;
pub mod install_banner;
pub mod lazy_image;
pub mod offline_banner;
pub mod share_button;
pub mod site_header;
