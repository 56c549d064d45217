pub mod navigation;
pub mod session;

pub use navigation::{use_navigator, Navigator};
pub use session::{use_session, SessionContext, SessionProvider};
