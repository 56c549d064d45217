// ============================================================================
// APP ROOT - session provider, navigator and route switch
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::context::{Navigator, SessionProvider};
use crate::router::{push_history, Route};

use super::auction_detail::AuctionDetailRoute;
use super::auth::{FindPassword, SignIn, SignUp};
use super::header::Header;
use super::my_page::MyPage;
use super::pages::{Home, NotFound};
use super::public_route::PublicRoute;

fn switch(route: &Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::SignIn => html! { <PublicRoute><SignIn /></PublicRoute> },
        Route::SignUp => html! { <PublicRoute><SignUp /></PublicRoute> },
        Route::FindPassword => html! { <PublicRoute><FindPassword /></PublicRoute> },
        Route::MyPage => html! { <MyPage /> },
        Route::AuctionDetail(id) => html! {
            <AuctionDetailRoute auction_id={id.clone().map(AttrValue::from)} />
        },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let route = use_state(Route::current);

    // Back / forward buttons
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = Closure::<dyn Fn(web_sys::Event)>::new(move |_: web_sys::Event| {
                route.set(Route::current());
            });
            let win = web_sys::window();
            if let Some(win) = &win {
                if let Err(e) = win.add_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref()) {
                    log::error!("❌ Could not listen for popstate: {:?}", e);
                }
            }
            move || {
                if let Some(win) = win {
                    let _ = win.remove_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref());
                }
            }
        });
    }

    let navigate = {
        let route = route.clone();
        Callback::from(move |next: Route| {
            if *route == next {
                return;
            }
            if let Err(e) = push_history(&next) {
                log::warn!("⚠️ History push failed: {:?}", e);
            }
            log::debug!("🧭 Navigating to {}", next.to_path());
            route.set(next);
        })
    };

    let navigator = Navigator {
        current: (*route).clone(),
        navigate,
    };

    html! {
        <SessionProvider>
            <ContextProvider<Navigator> context={navigator}>
                <Header />
                <main class="app-main">
                    {switch(&route)}
                </main>
            </ContextProvider<Navigator>>
        </SessionProvider>
    }
}
