//! Hand-rolled routing over the History API: parse the pathname into a
//! route, push new entries on navigation, and let the app component listen
//! for `popstate` to follow back/forward.

use wasm_bindgen::JsValue;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    /// A personalised gift link; the slug is resolved against the gift
    /// table by the page, not the router.
    Gift(String),
    NotFound,
}

impl Route {
    /// Parse a location pathname. `/` is home, a single segment is a gift
    /// slug (trailing slash tolerated), anything deeper is a 404.
    pub fn parse(pathname: &str) -> Route {
        let trimmed = pathname.trim_matches('/');
        if trimmed.is_empty() {
            return Route::Home;
        }
        if trimmed.contains('/') {
            return Route::NotFound;
        }
        Route::Gift(trimmed.to_string())
    }

    /// The pathname this route lives at.
    pub fn href(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Gift(slug) => format!("/{slug}"),
            Route::NotFound => "/404".to_string(),
        }
    }
}

/// The route for the browser's current location.
pub fn current_route() -> Route {
    let pathname = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string());
    Route::parse(&pathname)
}

/// Push `route` onto the history stack. The caller updates its own view
/// state; only back/forward arrive through `popstate`.
pub fn push_route(route: &Route) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&route.href()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_home() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
    }

    #[test]
    fn single_segment_is_a_gift_slug() {
        assert_eq!(Route::parse("/aoife"), Route::Gift("aoife".into()));
        assert_eq!(Route::parse("/Aoife/"), Route::Gift("Aoife".into()));
    }

    #[test]
    fn deeper_paths_are_not_found() {
        assert_eq!(Route::parse("/a/b"), Route::NotFound);
        assert_eq!(Route::parse("/a/b/c"), Route::NotFound);
    }

    #[test]
    fn href_round_trips() {
        let gift = Route::Gift("fern".into());
        assert_eq!(Route::parse(&gift.href()), gift);
        assert_eq!(Route::parse(&Route::Home.href()), Route::Home);
    }
}
