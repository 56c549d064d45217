use yew::prelude::*;

use crate::context::{use_navigator, use_session};
use crate::router::Route;

#[function_component(Home)]
pub fn home() -> Html {
    let session = use_session();
    let navigator = use_navigator();

    let cta = if session.is_logged_in {
        ("Go to my page", Route::MyPage)
    } else {
        ("Sign in to start bidding", Route::SignIn)
    };
    let (label, route) = cta;
    let onclick = Callback::from(move |_: MouseEvent| navigator.push(route.clone()));

    html! {
        <div class="home">
            <h1>{"Auction Market"}</h1>
            <p class="muted">{"Bid on items from other members, or buy them outright."}</p>
            <button type="button" class="btn-primary" {onclick}>{label}</button>
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let navigator = use_navigator();
    let onclick = Callback::from(move |_: MouseEvent| navigator.push(Route::Home));

    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"The page you are looking for does not exist."}</p>
            <button type="button" class="btn-secondary" {onclick}>{"Back home"}</button>
        </div>
    }
}
