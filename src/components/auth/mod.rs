pub mod find_password;
pub mod sign_in;
pub mod sign_up;

pub use find_password::FindPassword;
pub use sign_in::SignIn;
pub use sign_up::SignUp;
