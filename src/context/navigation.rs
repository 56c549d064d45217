use yew::prelude::*;

use crate::router::Route;

/// Lets any component change the current screen
#[derive(Clone, PartialEq)]
pub struct Navigator {
    pub current: Route,
    pub navigate: Callback<Route>,
}

impl Navigator {
    pub fn push(&self, route: Route) {
        self.navigate.emit(route);
    }
}

#[hook]
pub fn use_navigator() -> Navigator {
    use_context::<Navigator>().unwrap_or_else(|| Navigator {
        current: Route::current(),
        navigate: Callback::from(|route: Route| {
            log::warn!("⚠️ Navigation to {:?} requested outside the router", route);
        }),
    })
}
