use log::{info, warn};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod contact;
mod content;
mod navigation;
mod shell;
mod viewport;

mod components {
    pub mod faq_item;
    pub mod footer;
    pub mod nav;
}
mod pages {
    pub mod contact;
    pub mod landing;
    pub mod pricing;
}

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
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting to landing page");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");

    match web_sys::window().and_then(|window| window.document()) {
        Some(document) => {
            if let Err(err) = shell::install(&document) {
                warn!("Failed to install page shell: {:?}", err);
            }
        }
        None => warn!("No document available, skipping page shell"),
    }

    yew::Renderer::<App>::new().render();
}
