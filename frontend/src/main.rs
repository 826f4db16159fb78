use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod state {
    pub mod menu;
    pub mod scroll;
}
mod components {
    pub mod book_button;
    pub mod card_list;
    pub mod footer;
    pub mod icons;
    pub mod nav;
}
mod pages {
    pub mod landing;
}

use components::nav::Nav;
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
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_resolve() {
        assert!(Route::recognize("/") == Some(Route::Home));
        assert!(Route::not_found_route() == Some(Route::NotFound));
        assert_eq!(Route::Home.to_path(), "/");
    }
}
