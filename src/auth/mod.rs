//! Authentication: signup, login, password hashing.

mod handlers;
pub mod password;

pub use handlers::{login, signup, LoginRequest, SignupRequest, UserInfo};
pub use password::Passwords;
