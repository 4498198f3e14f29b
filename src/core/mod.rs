//! Client-side core: API access, auth calls, session persistence and page state

pub mod api;
pub mod auth;
pub mod config;
pub mod controller;
pub mod session;
pub mod storage;
pub mod weather;

#[cfg(all(test, feature = "ssr"))]
mod test_support;

pub use api::{ApiClient, ApiError, ApiResponse, CacheMode, RequestOptions};
pub use auth::{AuthResponse, LoginPayload, RegisterPayload};
pub use config::{ApiConfig, ConfigError};
pub use session::{STORAGE_KEY, SessionStore, StoredAuthSession};
