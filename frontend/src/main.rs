use std::rc::Rc;

use log::{info, warn};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod error;
mod format;
mod pricing;
mod shell;
mod simulation;

mod components {
    pub mod faq;
    pub mod nav;
    pub mod reveal;
    pub mod simulation;
    pub mod stats;
    pub mod viewport;
}
mod pages {
    pub mod landing;
}

use components::nav::Nav;
use config::AppConfig;
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Rendering not found page");
            html! {
                <div class="not-found">
                    <h1>{"404"}</h1>
                    <p>{"This page doesn't exist."}</p>
                    <Link<Route> to={Route::Home}>{"Back to MCD"}</Link<Route>>
                </div>
            }
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo(|_| AppConfig::load(), ());

    html! {
        <ContextProvider<Rc<AppConfig>> context={config.clone()}>
            <BrowserRouter>
                <Nav scroll_threshold={config.scroll_threshold_px} />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Rc<AppConfig>>>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        warn!("Logger already initialized: {}", e);
    }

    info!("Starting MCD landing page");
    yew::Renderer::<App>::new().render();
}
