// ============================================================================
// USE MY INFO HOOK - authoritative profile for the current session
// ============================================================================

use yew::prelude::*;

use crate::models::UserInfo;
use crate::services::ApiClient;
use crate::state::Loadable;

#[derive(Clone)]
pub struct UseMyInfoHandle {
    pub state: UseStateHandle<Loadable<UserInfo>>,
    /// Fetch again, e.g. after a profile save
    pub reload: Callback<()>,
}

#[hook]
pub fn use_my_info() -> UseMyInfoHandle {
    let state = use_state(Loadable::<UserInfo>::default);
    let generation = use_state(|| 0u32);

    {
        let state = state.clone();
        use_effect_with(*generation, move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().my_info().await {
                    Ok(info) => {
                        log::info!("✅ Profile loaded: {}", info.nickname);
                        state.set(Loadable::Loaded(info));
                    }
                    Err(e) => {
                        log::error!("❌ Error loading profile: {}", e);
                        state.set(Loadable::Failed(e.to_string()));
                    }
                }
            });
            || ()
        });
    }

    let reload = {
        let generation = generation.clone();
        Callback::from(move |_| generation.set(generation.wrapping_add(1)))
    };

    UseMyInfoHandle { state, reload }
}
