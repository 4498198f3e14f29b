pub mod auth;
pub mod common;
pub mod context;
pub mod pages;

pub use auth::{AuthResultPanel, LoginForm, RegisterForm};
pub use context::{AppContext, provide_app_context, use_app_context};
pub use pages::{HomePage, LoginPage, NotFoundPage, ProtectedPage, RegisterPage};
