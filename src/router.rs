// ============================================================================
// ROUTER - path <-> screen mapping and history navigation
// ============================================================================

use wasm_bindgen::JsValue;
use web_sys::window;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    SignIn,
    SignUp,
    FindPassword,
    MyPage,
    /// `None` when the path has no id segment
    AuctionDetail(Option<String>),
    NotFound,
}

impl Route {
    pub fn recognize(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["signin"] => Route::SignIn,
            ["signup"] => Route::SignUp,
            ["find-password"] => Route::FindPassword,
            ["mypage"] => Route::MyPage,
            ["auction"] => Route::AuctionDetail(None),
            ["auction", id] => Route::AuctionDetail(Some((*id).to_string())),
            _ => Route::NotFound,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::SignIn => "/signin".to_string(),
            Route::SignUp => "/signup".to_string(),
            Route::FindPassword => "/find-password".to_string(),
            Route::MyPage => "/mypage".to_string(),
            Route::AuctionDetail(Some(id)) => format!("/auction/{}", id),
            Route::AuctionDetail(None) => "/auction".to_string(),
            Route::NotFound => "/not-found".to_string(),
        }
    }

    /// Screens that only make sense for anonymous visitors
    pub fn is_public_only(&self) -> bool {
        matches!(self, Route::SignIn | Route::SignUp | Route::FindPassword)
    }

    pub fn current() -> Self {
        window()
            .and_then(|w| w.location().pathname().ok())
            .map(|path| Route::recognize(&path))
            .unwrap_or(Route::Home)
    }
}

/// Where a public-only screen must send a signed-in visitor
pub fn public_route_redirect(route: &Route, is_logged_in: bool) -> Option<Route> {
    if is_logged_in && route.is_public_only() {
        Some(Route::Home)
    } else {
        None
    }
}

/// Pushes `route` onto the browser history without reloading
pub fn push_history(route: &Route) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let history = win.history()?;
    history.push_state_with_url(&JsValue::NULL, "", Some(&route.to_path()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_auction_detail() {
        assert_eq!(Route::recognize("/auction/42"), Route::AuctionDetail(Some("42".to_string())));
        assert_eq!(Route::recognize("/auction/42/"), Route::AuctionDetail(Some("42".to_string())));
        assert_eq!(Route::recognize("/auction/42?tab=bids"), Route::AuctionDetail(Some("42".to_string())));
    }

    #[test]
    fn auction_without_id_is_absent() {
        assert_eq!(Route::recognize("/auction"), Route::AuctionDetail(None));
        assert_eq!(Route::recognize("/auction/"), Route::AuctionDetail(None));
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::recognize("/auction/1/editor/2"), Route::NotFound);
        assert_eq!(Route::recognize("/nope"), Route::NotFound);
        assert_eq!(Route::recognize("/not-found"), Route::NotFound);
    }

    #[test]
    fn paths_round_trip() {
        for route in [
            Route::Home,
            Route::SignIn,
            Route::SignUp,
            Route::FindPassword,
            Route::MyPage,
            Route::AuctionDetail(Some("7".to_string())),
            Route::AuctionDetail(None),
            Route::NotFound,
        ] {
            assert_eq!(Route::recognize(&route.to_path()), route);
        }
    }

    #[test]
    fn signed_in_visitors_leave_public_screens() {
        assert_eq!(public_route_redirect(&Route::SignIn, true), Some(Route::Home));
        assert_eq!(public_route_redirect(&Route::SignUp, false), None);
        assert_eq!(public_route_redirect(&Route::MyPage, true), None);
    }
}
