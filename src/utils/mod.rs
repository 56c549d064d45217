// Shared helpers

pub mod cookies;
pub mod debounce;
pub mod dialog;
pub mod format;

pub use cookies::{auth_token, read_cookie, remove_cookie, write_cookie};
pub use debounce::{DebounceGate, Debouncer, Ticket};
pub use dialog::confirm;
pub use format::{format_bid_time, format_phone_number, format_price, format_rating};
