pub mod password_mail;
pub mod profile;

use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::use_my_info;
use crate::models::UserInfo;
use crate::state::Loadable;
use crate::utils::format_price;

use super::loading_screen::LoadingScreen;
pub use password_mail::PasswordMailButton;
pub use profile::Profile;

#[derive(Properties, PartialEq)]
pub struct SideProfileProps {
    pub user: UserInfo,
}

#[function_component(SideProfile)]
pub fn side_profile(props: &SideProfileProps) -> Html {
    let image = props
        .user
        .profile_image
        .clone()
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| CONFIG.ui_config.profile_image_placeholder.clone());

    html! {
        <aside class="side-profile">
            <img class="side-profile-image" src={image} alt={props.user.nickname.clone()} />
            <p class="side-profile-nickname">{props.user.nickname.clone()}</p>
            <p class="side-profile-balance">{format!("{} KRW", format_price(props.user.balance.max(0) as u64))}</p>
        </aside>
    }
}

#[function_component(MyPage)]
pub fn my_page() -> Html {
    let my_info = use_my_info();

    match &*my_info.state {
        Loadable::Loading => html! { <LoadingScreen /> },
        Loadable::Failed(reason) => {
            let reload = my_info.reload.clone();
            html! {
                <div class="load-error">
                    <p>{"Your profile could not be loaded."}</p>
                    <p class="muted">{reason.clone()}</p>
                    <button type="button" class="btn-secondary" onclick={reload.reform(|_: MouseEvent| ())}>
                        {"Try again"}
                    </button>
                </div>
            }
        }
        Loadable::Loaded(user) => html! {
            <div class="my-page">
                <SideProfile user={user.clone()} />
                <section class="my-page-main">
                    <h2>{"My profile"}</h2>
                    <Profile user={Some(user.clone())} on_saved={my_info.reload.clone()} />
                    <PasswordMailButton user={user.clone()} />
                </section>
            </div>
        },
    }
}
