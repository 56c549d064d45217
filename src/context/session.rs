use yew::functional::UseStateSetter;
use yew::prelude::*;

use crate::utils::auth_token;

/// Whether the visitor carries a session cookie. Provided by the app root
/// and read by anything that renders differently for members.
#[derive(Clone, PartialEq)]
pub struct SessionContext {
    pub is_logged_in: bool,
    /// Re-reads the cookie after sign-in / sign-out
    pub refresh: Callback<()>,
}

impl SessionContext {
    pub fn from_cookie(refresh: Callback<()>) -> Self {
        Self {
            is_logged_in: auth_token().is_some(),
            refresh,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let is_logged_in = use_state(|| auth_token().is_some());

    let refresh = use_callback(is_logged_in.setter(), |_: (), set_logged_in: &UseStateSetter<bool>| {
        let now = auth_token().is_some();
        log::info!("🔑 Session refreshed: logged_in={}", now);
        set_logged_in.set(now);
    });

    let context = SessionContext {
        is_logged_in: *is_logged_in,
        refresh,
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

/// Session from context; falls back to a direct cookie read outside the provider
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .unwrap_or_else(|| SessionContext::from_cookie(Callback::noop()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_with_shared_refresh_compares_by_flag() {
        let refresh: Callback<()> = Callback::from(|_| ());
        let signed_in = SessionContext { is_logged_in: true, refresh: refresh.clone() };

        assert!(signed_in == SessionContext { is_logged_in: true, refresh: refresh.clone() });
        assert!(signed_in != SessionContext { is_logged_in: false, refresh });
    }

    #[test]
    fn rebuilt_refresh_makes_context_differ() {
        let first = SessionContext { is_logged_in: true, refresh: Callback::from(|_| ()) };
        let second = SessionContext { is_logged_in: true, refresh: Callback::from(|_| ()) };
        assert!(first != second);
    }
}
