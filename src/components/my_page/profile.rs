// ============================================================================
// PROFILE - read view and in-place editor for the signed-in member
// ============================================================================

use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

use crate::models::UserInfo;
use crate::services::ApiClient;
use crate::state::{ProfileEditor, ProfileField, ProfileMode};
use crate::utils::format_phone_number;

#[derive(Properties, PartialEq)]
pub struct ProfileProps {
    pub user: Option<UserInfo>,
    /// Re-fetches the authoritative record after a save
    pub on_saved: Callback<()>,
}

#[function_component(Profile)]
pub fn profile(props: &ProfileProps) -> Html {
    let editor = use_mut_ref(|| ProfileEditor::<File>::new(props.user.as_ref()));
    let rerender = use_force_update();

    // Fresh record from the server: rebuild the draft from it
    {
        let editor = editor.clone();
        let rerender = rerender.clone();
        use_effect_with(props.user.clone(), move |user| {
            editor.borrow_mut().reset_draft(user.as_ref());
            rerender.force_update();
            || ()
        });
    }

    let on_toggle = {
        let editor = editor.clone();
        let rerender = rerender.clone();
        Callback::from(move |_: MouseEvent| {
            editor.borrow_mut().toggle_mode();
            rerender.force_update();
        })
    };

    let on_cancel = {
        let editor = editor.clone();
        let rerender = rerender.clone();
        let user = props.user.clone();
        Callback::from(move |_: MouseEvent| {
            editor.borrow_mut().cancel(user.as_ref());
            rerender.force_update();
        })
    };

    let on_field = |field: ProfileField| {
        let editor = editor.clone();
        let rerender = rerender.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            editor.borrow_mut().set_field(field, input.value());
            rerender.force_update();
        })
    };

    let on_image = {
        let editor = editor.clone();
        let rerender = rerender.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let file = input.files().and_then(|files| files.get(0));
            editor.borrow_mut().set_image(file);
            rerender.force_update();
        })
    };

    let on_save = {
        let editor = editor.clone();
        let rerender = rerender.clone();
        let on_saved = props.on_saved.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(submission) = editor.borrow_mut().begin_save() else {
                return;
            };
            rerender.force_update();

            let editor = editor.clone();
            let rerender = rerender.clone();
            let on_saved = on_saved.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = ApiClient::new()
                    .info_edit(&submission.request, submission.file.as_ref())
                    .await;
                let saved = result.is_ok();
                editor
                    .borrow_mut()
                    .finish_save(result.map_err(|e| e.to_string()));
                rerender.force_update();
                if saved {
                    log::info!("✅ Profile saved");
                    on_saved.emit(());
                }
            });
        })
    };

    let state = editor.borrow();
    let draft = state.draft();

    match state.mode() {
        ProfileMode::Read => {
            let Some(user) = &props.user else {
                return html! { <div class="profile empty">{"No profile data"}</div> };
            };
            html! {
                <div class="profile">
                    <dl class="profile-fields">
                        <dt>{"Email"}</dt>
                        <dd>{user.email.clone()}</dd>
                        <dt>{"Nickname"}</dt>
                        <dd>{user.nickname.clone()}</dd>
                        <dt>{"Phone"}</dt>
                        <dd>{format_phone_number(&user.phone_number)}</dd>
                        <dt>{"Address"}</dt>
                        <dd>{user.address.clone()}</dd>
                    </dl>
                    <button type="button" class="btn-secondary" onclick={on_toggle}>{"Edit profile"}</button>
                </div>
            }
        }
        ProfileMode::Edit => html! {
            <form class="profile editing" onsubmit={on_save}>
                <div class="form-group">
                    <label for="nickname">{"Nickname"}</label>
                    <input type="text" id="nickname" value={draft.nickname.clone()} oninput={on_field(ProfileField::Nickname)} />
                </div>
                <div class="form-group">
                    <label for="phone">{"Phone number"}</label>
                    <input
                        type="tel"
                        id="phone"
                        value={draft.phone_number.clone()}
                        oninput={on_field(ProfileField::PhoneNumber)}
                    />
                </div>
                <div class="form-group">
                    <label for="address">{"Address"}</label>
                    <input type="text" id="address" value={draft.address.clone()} oninput={on_field(ProfileField::Address)} />
                </div>
                <div class="form-group">
                    <label for="profile-image">{"Profile image"}</label>
                    <input type="file" id="profile-image" accept="image/*" onchange={on_image} />
                </div>
                if let Some(message) = state.error() {
                    <p class="form-error">{message.to_string()}</p>
                }
                <div class="form-actions">
                    <button type="button" class="btn-secondary" onclick={on_cancel}>{"Cancel"}</button>
                    <button type="submit" class="btn-primary" disabled={state.is_saving()}>
                        {if state.is_saving() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        },
    }
}
