use log::{error, info};
use yew::prelude::*;

mod browser;
mod config;
mod error;
mod inquiry {
    pub mod dispatch;
    pub mod format;
    pub mod model;
    pub mod submit;
    pub mod validate;
}
mod ui {
    pub mod modal;
    pub mod reveal;
    pub mod scroll_spy;
    pub mod state;
}
mod components {
    pub mod contact_form;
    pub mod modal;
    pub mod nav;
    pub mod notice;
}
mod pages {
    pub mod home;
}

use config::SiteConfig;
use pages::home::Home;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: SiteConfig,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <Home config={props.config.clone()} />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    let config = match SiteConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load site preset {}: {}", config::preset_name(), e);
            return;
        }
    };

    info!("Starting {} ({} sections)", config.site_name, config.sections.len());
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
