use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::context::use_navigator;
use crate::models::FindPasswordRequest;
use crate::router::Route;
use crate::services::ApiClient;

#[derive(Clone, PartialEq)]
enum Status {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

#[function_component(FindPassword)]
pub fn find_password() -> Html {
    let navigator = use_navigator();
    let email_ref = use_node_ref();
    let status = use_state(|| Status::Idle);

    let on_submit = {
        let email_ref = email_ref.clone();
        let status = status.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == Status::Sending {
                return;
            }
            let Some(input) = email_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let email = input.value().trim().to_string();
            if email.is_empty() {
                status.set(Status::Failed("Email is required".to_string()));
                return;
            }

            status.set(Status::Sending);
            let status = status.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().find_password(&FindPasswordRequest { email }).await {
                    Ok(()) => {
                        log::info!("📧 Password reset requested");
                        status.set(Status::Sent);
                    }
                    Err(e) => {
                        log::error!("❌ Password reset request failed: {}", e);
                        status.set(Status::Failed(e.to_string()));
                    }
                }
            });
        })
    };

    let to_sign_in = Callback::from(move |_: MouseEvent| navigator.push(Route::SignIn));

    html! {
        <div class="auth-screen">
            <form class="auth-form" onsubmit={on_submit}>
                <h1>{"Find password"}</h1>
                <p class="muted">{"We will email you a link to reset your password."}</p>
                <div class="form-group">
                    <label for="email">{"Email"}</label>
                    <input type="email" id="email" ref={email_ref} />
                </div>
                {match &*status {
                    Status::Sent => html! { <p class="form-success">{"Check your inbox for the reset link."}</p> },
                    Status::Failed(message) => html! { <p class="form-error">{message.clone()}</p> },
                    _ => html! {},
                }}
                <button type="submit" class="btn-primary" disabled={*status == Status::Sending}>
                    {"Send reset link"}
                </button>
                <div class="auth-links">
                    <button type="button" class="btn-link" onclick={to_sign_in}>{"Back to sign in"}</button>
                </div>
            </form>
        </div>
    }
}
