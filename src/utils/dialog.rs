use web_sys::window;

/// Blocking browser confirmation; `false` when no window is available
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}
