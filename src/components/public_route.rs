use yew::prelude::*;

use crate::context::{use_navigator, use_session};
use crate::router::public_route_redirect;

#[derive(Properties, PartialEq)]
pub struct PublicRouteProps {
    pub children: Children,
}

/// Wraps sign-in style screens; signed-in visitors are sent elsewhere
#[function_component(PublicRoute)]
pub fn public_route(props: &PublicRouteProps) -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let redirect = public_route_redirect(&navigator.current, session.is_logged_in);

    {
        let navigator = navigator.clone();
        use_effect_with(redirect.clone(), move |redirect| {
            if let Some(route) = redirect.clone() {
                log::info!("↪️ Already signed in, redirecting to {:?}", route);
                navigator.push(route);
            }
            || ()
        });
    }

    if redirect.is_some() {
        html! {}
    } else {
        html! { <>{props.children.clone()}</> }
    }
}
