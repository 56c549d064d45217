pub mod use_bid_history;
pub mod use_my_info;

pub use use_bid_history::use_bid_history;
pub use use_my_info::{use_my_info, UseMyInfoHandle};
