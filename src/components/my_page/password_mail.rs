use yew::prelude::*;

use crate::models::{FindPasswordRequest, UserInfo};
use crate::services::ApiClient;

#[derive(Clone, PartialEq)]
enum MailStatus {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

#[derive(Properties, PartialEq)]
pub struct PasswordMailButtonProps {
    pub user: UserInfo,
}

/// Mails the member a password-change link at their account address
#[function_component(PasswordMailButton)]
pub fn password_mail_button(props: &PasswordMailButtonProps) -> Html {
    let status = use_state(|| MailStatus::Idle);

    let onclick = {
        let status = status.clone();
        let request = FindPasswordRequest::from(&props.user);
        Callback::from(move |_: MouseEvent| {
            if *status == MailStatus::Sending {
                return;
            }
            status.set(MailStatus::Sending);

            let status = status.clone();
            let request = request.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().find_password(&request).await {
                    Ok(()) => {
                        log::info!("📧 Password-change mail sent");
                        status.set(MailStatus::Sent);
                    }
                    Err(e) => {
                        log::error!("❌ Password-change mail failed: {}", e);
                        status.set(MailStatus::Failed(e.to_string()));
                    }
                }
            });
        })
    };

    html! {
        <div class="password-mail">
            <button
                type="button"
                class="btn-password-mail"
                {onclick}
                disabled={*status == MailStatus::Sending}
            >
                {"Send password-change email"}
            </button>
            {match &*status {
                MailStatus::Sent => html! {
                    <p class="form-success">{format!("Sent to {}", props.user.email)}</p>
                },
                MailStatus::Failed(message) => html! { <p class="form-error">{message.clone()}</p> },
                _ => html! {},
            }}
        </div>
    }
}
