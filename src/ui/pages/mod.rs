//! Application pages module
//!
//! This module contains all the page components for the application:
//! - Home page (public forecast)
//! - Register page
//! - Login page
//! - Protected page (authenticated forecast)

mod home;
mod login;
mod not_found;
mod protected;
mod register;

pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use protected::ProtectedPage;
pub use register::RegisterPage;
