use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod models {
    pub mod vehicle;
}
mod embed {
    pub mod controller;
    pub mod device;
    pub mod latch;
    pub mod source;
}
mod utils {
    pub mod listener;
    pub mod scroll;
    pub mod theme;
    pub mod viewport;
}
mod components {
    pub mod category_badge;
    pub mod error_boundary;
    pub mod liquid_background;
    pub mod mode_toggle;
    pub mod reveal;
    pub mod sketchfab_embed;
}
mod pages {
    pub mod collection;
    pub mod home;
    pub mod model_detail;
    pub mod not_found;
}

use pages::{
    collection::Collection,
    home::Home,
    model_detail::ModelDetail,
    not_found::NotFound,
};
use utils::theme::ThemeProvider;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/collection")]
    Collection,
    #[at("/collection/:slug")]
    ModelDetail { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Collection => html! { <Collection /> },
        // Keyed so a different slug mounts a fresh page and embed.
        Route::ModelDetail { slug } => {
            let key = slug.clone();
            html! { <ModelDetail key={key} slug={slug} /> }
        }
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <ThemeProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ThemeProvider>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    components::error_boundary::install();
    log::info!("Starting Pagani showcase");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    // Same fallback the router's `Switch` applies.
    fn resolve(path: &str) -> Route {
        Route::recognize(path)
            .or_else(Route::not_found_route)
            .unwrap_or(Route::NotFound)
    }

    #[test]
    fn known_paths_resolve() {
        assert_eq!(resolve("/"), Route::Home);
        assert_eq!(resolve("/collection"), Route::Collection);
        assert_eq!(
            resolve("/collection/zonda-r"),
            Route::ModelDetail {
                slug: "zonda-r".to_string()
            }
        );
    }

    #[test]
    fn undefined_paths_resolve_to_not_found() {
        assert_eq!(resolve("/garage"), Route::NotFound);
        assert_eq!(resolve("/collection/zonda-r/extra"), Route::NotFound);
    }

    #[test]
    fn detail_paths_round_trip() {
        let route = Route::ModelDetail {
            slug: "huayra-bc".to_string(),
        };
        assert_eq!(route.to_path(), "/collection/huayra-bc");
    }

    #[test]
    fn detail_view_is_keyed_by_slug() {
        let html = switch(Route::ModelDetail {
            slug: "zonda-r".to_string(),
        });
        assert_eq!(html.key(), Some(&yew::virtual_dom::Key::from("zonda-r")));
    }
}
