use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::context::{use_navigator, use_session};
use crate::router::Route;
use crate::services::ApiClient;
use crate::state::validate_sign_in;
use crate::utils::write_cookie;

#[function_component(SignIn)]
pub fn sign_in() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let refresh = session.refresh.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let request = match validate_sign_in(&email_input.value(), &password_input.value()) {
                Ok(request) => request,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            submitting.set(true);
            error.set(None);

            let error = error.clone();
            let submitting = submitting.clone();
            let refresh = refresh.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().sign_in(&request).await {
                    Ok(token) => match write_cookie(&CONFIG.auth_cookie_name, &token) {
                        Ok(()) => {
                            log::info!("✅ Signed in as {}", request.email);
                            refresh.emit(());
                            navigator.push(Route::Home);
                        }
                        Err(e) => {
                            log::error!("❌ Could not store session cookie: {}", e);
                            error.set(Some(e));
                        }
                    },
                    Err(e) => {
                        log::error!("❌ Sign-in failed: {}", e);
                        let message = if e.is_unauthorized() {
                            "Email or password is incorrect".to_string()
                        } else {
                            e.to_string()
                        };
                        error.set(Some(message));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let go = |route: Route| {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.push(route.clone()))
    };

    html! {
        <div class="auth-screen">
            <form class="auth-form" onsubmit={on_submit}>
                <h1>{"Sign in"}</h1>
                <div class="form-group">
                    <label for="email">{"Email"}</label>
                    <input type="email" id="email" placeholder="you@example.com" ref={email_ref} />
                </div>
                <div class="form-group">
                    <label for="password">{"Password"}</label>
                    <input type="password" id="password" ref={password_ref} />
                </div>
                if let Some(message) = &*error {
                    <p class="form-error">{message.clone()}</p>
                }
                <button type="submit" class="btn-primary" disabled={*submitting}>
                    {if *submitting { "Signing in..." } else { "Sign in" }}
                </button>
                <div class="auth-links">
                    <button type="button" class="btn-link" onclick={go(Route::SignUp)}>{"Create an account"}</button>
                    <button type="button" class="btn-link" onclick={go(Route::FindPassword)}>{"Forgot your password?"}</button>
                </div>
            </form>
        </div>
    }
}
