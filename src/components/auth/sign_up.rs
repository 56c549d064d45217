use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::context::use_navigator;
use crate::router::Route;
use crate::services::ApiClient;
use crate::state::SignUpForm;

#[derive(Clone, Copy)]
enum Field {
    Email,
    Password,
    PasswordConfirm,
    Nickname,
    PhoneNumber,
    Address,
}

fn apply(form: &mut SignUpForm, field: Field, value: String) {
    match field {
        Field::Email => form.email = value,
        Field::Password => form.password = value,
        Field::PasswordConfirm => form.password_confirm = value,
        Field::Nickname => form.nickname = value,
        Field::PhoneNumber => form.phone_number = value,
        Field::Address => form.address = value,
    }
}

#[function_component(SignUp)]
pub fn sign_up() -> Html {
    let navigator = use_navigator();
    let form = use_state(SignUpForm::default);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_input = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, field, input.value());
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let request = match form.validate() {
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
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().sign_up(&request).await {
                    Ok(()) => {
                        log::info!("✅ Account created for {}", request.email);
                        navigator.push(Route::SignIn);
                    }
                    Err(e) => {
                        log::error!("❌ Sign-up failed: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let to_sign_in = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.push(Route::SignIn))
    };

    html! {
        <div class="auth-screen">
            <form class="auth-form" onsubmit={on_submit}>
                <h1>{"Sign up"}</h1>
                <div class="form-group">
                    <label for="email">{"Email"}</label>
                    <input type="email" id="email" value={form.email.clone()} oninput={on_input(Field::Email)} />
                </div>
                <div class="form-group">
                    <label for="password">{"Password"}</label>
                    <input type="password" id="password" value={form.password.clone()} oninput={on_input(Field::Password)} />
                </div>
                <div class="form-group">
                    <label for="password-confirm">{"Confirm password"}</label>
                    <input
                        type="password"
                        id="password-confirm"
                        value={form.password_confirm.clone()}
                        oninput={on_input(Field::PasswordConfirm)}
                    />
                </div>
                <div class="form-group">
                    <label for="nickname">{"Nickname"}</label>
                    <input type="text" id="nickname" value={form.nickname.clone()} oninput={on_input(Field::Nickname)} />
                </div>
                <div class="form-group">
                    <label for="phone">{"Phone number"}</label>
                    <input
                        type="tel"
                        id="phone"
                        placeholder="01012345678"
                        value={form.phone_number.clone()}
                        oninput={on_input(Field::PhoneNumber)}
                    />
                </div>
                <div class="form-group">
                    <label for="address">{"Address"}</label>
                    <input type="text" id="address" value={form.address.clone()} oninput={on_input(Field::Address)} />
                </div>
                if let Some(message) = &*error {
                    <p class="form-error">{message.clone()}</p>
                }
                <button type="submit" class="btn-primary" disabled={*submitting}>{"Create account"}</button>
                <div class="auth-links">
                    <button type="button" class="btn-link" onclick={to_sign_in}>{"Already a member? Sign in"}</button>
                </div>
            </form>
        </div>
    }
}
