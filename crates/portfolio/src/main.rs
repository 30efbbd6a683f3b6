use log::error;
use portfolio::{
    app::{App, AppProps},
    config::PortfolioConfig,
};
use std::rc::Rc;

fn main() {
    init_logging();
    let config = match PortfolioConfig::embedded() {
        Ok(config) => config,
        Err(err) => {
            error!("Invalid site configuration: {err}");
            return;
        }
    };
    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(config),
    })
    .render();
}

fn init_logging() {
    use log::Level;
    use wasm_logger::Config;

    // use debug level for debug builds, warn level for production builds.
    #[cfg(debug_assertions)]
    let level = Level::Trace;
    #[cfg(not(debug_assertions))]
    let level = Level::Warn;

    wasm_logger::init(Config::new(level));
}
