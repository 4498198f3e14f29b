//! App context shared by all pages
//!
//! Holds the API configuration and the session store. The configuration is
//! resolved on the server and serialized into the page, so the hydrated
//! client sees exactly what the server rendered with. In the browser the
//! session store is backed by `localStorage`; during server rendering there
//! is no storage and every session operation is a no-op.

use leptos::prelude::*;
use leptos::server::SharedValue;

use crate::core::{ApiClient, ApiConfig, ConfigError, SessionStore};

/// Context providing API access and session persistence
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: ApiConfig,
    pub sessions: SessionStore,
}

impl AppContext {
    /// API client for the configured backend
    pub fn client(&self) -> Result<ApiClient, ConfigError> {
        ApiClient::new(&self.config)
    }

    /// Configuration problem that makes every API call impossible
    pub fn config_error(&self) -> Option<ConfigError> {
        self.config.api_base_url().err()
    }
}

/// Provide app context to the component tree
pub fn provide_app_context() -> AppContext {
    let config = SharedValue::new(ApiConfig::from_env).into_inner();
    if let Err(e) = config.api_base_url() {
        leptos::logging::error!("{}", e);
    }

    #[cfg(feature = "hydrate")]
    let sessions = SessionStore::browser();
    #[cfg(not(feature = "hydrate"))]
    let sessions = SessionStore::unavailable();

    let ctx = AppContext { config, sessions };
    provide_context(ctx.clone());
    ctx
}

/// Get app context from the component tree
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
