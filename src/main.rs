use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;

mod config;
mod content;
mod dom;
mod hooks;
mod motion;
mod scroll_spy;
mod components {
    pub mod about;
    pub mod contact;
    pub mod footer;
    pub mod hero;
    pub mod nav;
    pub mod reveal;
    pub mod services;
    pub mod stats;
}
mod pages {
    pub mod home;
}

use components::nav::Nav;
use content::SiteContent;
use hooks::{use_navigator, NavigatorHandle};
use pages::home::Home;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub content: Rc<SiteContent>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let navigator = use_navigator();

    info!("Rendering Home page");
    html! {
        <ContextProvider<NavigatorHandle> context={navigator}>
            <Nav brand={props.content.brand.clone()} />
            <Home content={props.content.clone()} />
        </ContextProvider<NavigatorHandle>>
    }
}

#[function_component]
fn ContentUnavailable() -> Html {
    html! {
        <div class="content-unavailable">
            <p>{"Sorry, this page could not be loaded. Please try again later."}</p>
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    match SiteContent::load() {
        Ok(content) => {
            yew::Renderer::<App>::with_props(AppProps {
                content: Rc::new(content),
            })
            .render();
        }
        Err(err) => {
            error!("{err}");
            yew::Renderer::<ContentUnavailable>::new().render();
        }
    }
}
