use yew::prelude::*;

use crate::config::CONFIG;
use crate::context::{use_navigator, use_session};
use crate::router::Route;
use crate::utils::remove_cookie;

#[function_component(Header)]
pub fn header() -> Html {
    let session = use_session();
    let navigator = use_navigator();

    let go = |route: Route| {
        let navigator = navigator.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigator.push(route.clone());
        })
    };

    let on_sign_out = {
        let refresh = session.refresh.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(e) = remove_cookie(&CONFIG.auth_cookie_name) {
                log::error!("❌ Could not clear session cookie: {}", e);
                return;
            }
            log::info!("👋 Signed out");
            refresh.emit(());
            navigator.push(Route::Home);
        })
    };

    html! {
        <header class="app-header">
            <a class="app-logo" href="/" onclick={go(Route::Home)}>{"Auction Market"}</a>
            <nav class="app-nav">
                if session.is_logged_in {
                    <a href="/mypage" onclick={go(Route::MyPage)}>{"My page"}</a>
                    <button type="button" class="btn-link" onclick={on_sign_out}>{"Sign out"}</button>
                } else {
                    <a href="/signin" onclick={go(Route::SignIn)}>{"Sign in"}</a>
                    <a href="/signup" onclick={go(Route::SignUp)}>{"Sign up"}</a>
                }
            </nav>
        </header>
    }
}
