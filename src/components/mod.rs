pub mod app;
pub mod auction_detail;
pub mod auth;
pub mod header;
pub mod loading_screen;
pub mod modal;
pub mod my_page;
pub mod pages;
pub mod public_route;

pub use app::App;
