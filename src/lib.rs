// ============================================================================
// AUCTION MARKET WEB - Yew client for the auction marketplace
// ============================================================================
// - components: screens and widgets (Yew)
// - state: pure UI state machines, unit-tested without a browser
// - services: REST client
// - context / hooks: session, navigation and shared data hooks
// ============================================================================

pub mod components;
pub mod config;
pub mod context;
pub mod hooks;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod utils;

use crate::components::App;
use crate::config::CONFIG;

/// Installs the panic hook and logger, then mounts the app on `<body>`
pub fn run() {
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Auction Market starting ({})", CONFIG.environment);
    log::debug!("🔧 Backend: {}", CONFIG.backend_url());

    yew::Renderer::<App>::new().render();
}
