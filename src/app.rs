//! Application Shell
//!
//! Path-based routing over the History API and the global layout.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::components::Header;
use crate::favorites;
use crate::pages::{CharacterDetailPage, HomePage};
use crate::url_state::{use_url_state, UrlStateHandle};

/// Recognized pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    /// `None` marks a malformed or non-positive id; rendered as not found
    /// without issuing a request
    Character(Option<u32>),
    NotFound,
}

/// Map a pathname onto a route
pub fn parse_route(pathname: &str) -> Route {
    let segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
        [] => Route::Home,
        ["character", id] => Route::Character(id.parse::<u32>().ok().filter(|id| *id > 0)),
        _ => Route::NotFound,
    }
}

fn current_route() -> Route {
    let pathname = web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_else(|| "/".into());
    parse_route(&pathname)
}

/// Programmatic navigation; provided via context
#[derive(Clone, Copy)]
pub struct Router {
    route: ReadSignal<Route>,
    set_route: WriteSignal<Route>,
    url: UrlStateHandle,
}

/// Get the router from context
pub fn use_router() -> Router {
    expect_context::<Router>()
}

impl Router {
    pub fn route(&self) -> ReadSignal<Route> {
        self.route
    }

    /// Push a history entry and re-read both the path and the query state
    pub fn navigate(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(url));
        }
        self.set_route.set(current_route());
        self.url.refresh();
    }

    /// Step back in session history; the popstate listener does the re-read
    pub fn back(&self) {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.back();
            }
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let url = use_url_state();
    let (route, set_route) = signal(current_route());
    let router = Router {
        route,
        set_route,
        url,
    };

    provide_context(url);
    provide_context(router);
    favorites::provide_favorites();

    // back/forward re-reads both the path and the query
    let on_popstate = Closure::<dyn FnMut()>::new(move || {
        set_route.set(current_route());
        url.refresh();
    });
    if let Some(window) = web_sys::window() {
        let _ = window
            .add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref());
    }
    on_popstate.forget();

    view! {
        <div class="app-shell">
            <Header/>

            <main class="app-main">
                {move || match route.get() {
                    Route::Home => view! { <HomePage/> }.into_any(),
                    Route::Character(id) => view! { <CharacterDetailPage id=id/> }.into_any(),
                    Route::NotFound => view! {
                        <p class="route-missing">"This page is lost in another dimension."</p>
                    }.into_any(),
                }}
            </main>

            <footer class="app-footer">
                <p>
                    "Data provided by "
                    <a
                        href="https://rickandmortyapi.com"
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "the Rick and Morty API"
                    </a>
                </p>
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_route_home() {
        assert_eq!(parse_route("/"), Route::Home);
        assert_eq!(parse_route(""), Route::Home);
    }

    #[test]
    fn test_parse_route_character() {
        assert_eq!(parse_route("/character/12"), Route::Character(Some(12)));
    }

    #[test]
    fn test_parse_route_rejects_bad_ids_without_a_request() {
        assert_eq!(parse_route("/character/abc"), Route::Character(None));
        assert_eq!(parse_route("/character/0"), Route::Character(None));
        assert_eq!(parse_route("/character/-3"), Route::Character(None));
    }

    #[test]
    fn test_parse_route_unknown_path() {
        assert_eq!(parse_route("/galaxy"), Route::NotFound);
        assert_eq!(parse_route("/character/1/extra"), Route::NotFound);
    }
}
