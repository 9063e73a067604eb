use hope_site_frontend::components::app::{App, AppProps};
use hope_site_frontend::config::SiteConfig;
use hope_site_frontend::logging;
use log::LevelFilter;

fn main() {
    // config warnings need somewhere to go before the configured level is known
    logging::init(LevelFilter::Info);
    let config = SiteConfig::load();
    logging::init(config.log_level);
    log::info!("starting, breakpoints {:?}", config.breakpoints);
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
