//! Authentication client
//!
//! Thin typed wrappers over the backend identity endpoints:
//! - POST /api/auth/register - Register a new user
//! - POST /api/auth/login - Login and get tokens

mod client;
mod models;

pub use client::{LOGIN_PATH, REGISTER_PATH, login_user, register_user};
pub use models::{AuthResponse, DEFAULT_TOKEN_TYPE, LoginPayload, RegisterPayload};
