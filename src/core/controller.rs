//! Page state machines
//!
//! Framework-free state for the register/login forms and the protected
//! resource page. The Leptos pages keep one of these in a signal and drive it
//! from event handlers; tests drive them directly.

use std::fmt::Display;
use std::future::Future;

use crate::core::api::{ApiClient, ApiError};
use crate::core::auth::{AuthResponse, LoginPayload, RegisterPayload, login_user, register_user};
use crate::core::config::ConfigError;
use crate::core::session::{SessionStore, StoredAuthSession};
use crate::core::weather::{WeatherForecast, fetch_forecasts};

pub const REGISTER_FAILED_MESSAGE: &str =
    "ユーザー登録に失敗しました。入力内容とサーバーログを確認してください。";
pub const LOGIN_FAILED_MESSAGE: &str =
    "ログインに失敗しました。メールアドレスとパスワードを確認してください。";
pub const MISSING_TOKEN_MESSAGE: &str =
    "トークンが見つかりません。先にユーザー登録またはログインで取得してください。";
pub const FORECAST_FAILED_MESSAGE: &str =
    "天気予報 API の呼び出しに失敗しました。バックエンドのログを確認してください。";

/// User-facing text for an error, or `fallback` when the error has none
pub fn error_message(err: &impl Display, fallback: &str) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

/// Credentials a form can exchange for tokens
pub trait Credentials: Clone {
    /// Shown when the call fails without a message of its own
    const FAILURE_MESSAGE: &'static str;

    fn authenticate(
        &self,
        client: &ApiClient,
    ) -> impl Future<Output = Result<AuthResponse, ApiError>>;
}

impl Credentials for RegisterPayload {
    const FAILURE_MESSAGE: &'static str = REGISTER_FAILED_MESSAGE;

    async fn authenticate(&self, client: &ApiClient) -> Result<AuthResponse, ApiError> {
        register_user(client, self).await
    }
}

impl Credentials for LoginPayload {
    const FAILURE_MESSAGE: &'static str = LOGIN_FAILED_MESSAGE;

    async fn authenticate(&self, client: &ApiClient) -> Result<AuthResponse, ApiError> {
        login_user(client, self).await
    }
}

/// Register/login form state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthForm<P> {
    /// Editable field values
    pub payload: P,
    pub submitting: bool,
    pub error: Option<String>,
    /// Last successful response
    pub result: Option<AuthResponse>,
}

impl<P: Credentials> AuthForm<P> {
    /// Start a submission. Returns the payload to send, or `None` while a
    /// previous submission is still in flight.
    pub fn begin(&mut self) -> Option<P> {
        if self.submitting {
            return None;
        }
        self.error = None;
        self.submitting = true;
        Some(self.payload.clone())
    }

    /// Apply the result of a submission
    pub fn complete(&mut self, outcome: Result<AuthResponse, ApiError>, sessions: &SessionStore) {
        match outcome {
            Ok(response) => {
                sessions.save(&response);
                self.result = Some(response);
            }
            Err(err) => {
                self.error = Some(error_message(&err, P::FAILURE_MESSAGE));
            }
        }
        self.submitting = false;
    }

    /// Refuse a submission that cannot be sent, e.g. without a base URL
    pub fn reject(&mut self, err: &ConfigError) {
        self.error = Some(err.to_string());
        self.submitting = false;
    }

    /// Submit the form and wait for the outcome. Returns whether it succeeded.
    pub async fn submit(&mut self, client: &ApiClient, sessions: &SessionStore) -> bool {
        let Some(payload) = self.begin() else {
            return false;
        };
        let outcome = payload.authenticate(client).await;
        let succeeded = outcome.is_ok();
        self.complete(outcome, sessions);
        succeeded
    }

    /// Show an already stored session as the current result
    pub fn restore(&mut self, sessions: &SessionStore) {
        if let Some(session) = sessions.load() {
            self.result = Some(session.auth);
        }
    }

    /// Forget the stored session
    pub fn sign_out(&mut self, sessions: &SessionStore) {
        sessions.clear();
        self.result = None;
    }
}

/// Progress of the protected resource request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Permission to apply one forecast response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastTicket {
    pub authorization: String,
    generation: u64,
}

impl ForecastTicket {
    /// Perform the authenticated call this ticket was issued for
    pub async fn send(&self, client: &ApiClient) -> Result<Vec<WeatherForecast>, ApiError> {
        fetch_forecasts(client, Some(&self.authorization)).await
    }
}

/// Protected resource page state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProtectedResource {
    pub session: Option<StoredAuthSession>,
    pub forecasts: Vec<WeatherForecast>,
    pub state: RequestState,
    pub error: Option<String>,
    generation: u64,
}

impl ProtectedResource {
    /// Pick up whatever session is stored
    pub fn restore(&mut self, sessions: &SessionStore) {
        self.session = sessions.load();
    }

    pub fn is_loading(&self) -> bool {
        self.state == RequestState::Loading
    }

    /// Start an authenticated fetch. Without a session this only records the
    /// error; no request must be made.
    pub fn begin_fetch(&mut self) -> Option<ForecastTicket> {
        let Some(session) = &self.session else {
            self.error = Some(MISSING_TOKEN_MESSAGE.to_string());
            self.state = RequestState::Error;
            return None;
        };

        let authorization = session.authorization_header();
        self.generation += 1;
        self.state = RequestState::Loading;
        self.error = None;

        Some(ForecastTicket {
            authorization,
            generation: self.generation,
        })
    }

    /// Refuse a fetch that cannot be sent, e.g. without a base URL
    pub fn reject(&mut self, err: &ConfigError) {
        self.error = Some(err.to_string());
        self.state = RequestState::Error;
    }

    /// Apply a response. Responses for superseded tickets are dropped and
    /// `false` is returned.
    pub fn complete(
        &mut self,
        ticket: &ForecastTicket,
        outcome: Result<Vec<WeatherForecast>, ApiError>,
    ) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                "Dropping stale forecast response (ticket {}, current {})",
                ticket.generation,
                self.generation
            );
            return false;
        }

        match outcome {
            Ok(forecasts) => {
                self.forecasts = forecasts;
                self.state = RequestState::Success;
            }
            Err(err) => {
                self.error = Some(error_message(&err, FORECAST_FAILED_MESSAGE));
                self.state = RequestState::Error;
            }
        }
        true
    }

    /// Fetch and apply in one go
    pub async fn fetch(&mut self, client: &ApiClient) {
        if let Some(ticket) = self.begin_fetch() {
            let outcome = ticket.send(client).await;
            self.complete(&ticket, outcome);
        }
    }

    /// Delete the stored session and reset the page. Any request still in
    /// flight is invalidated.
    pub fn clear_session(&mut self, sessions: &SessionStore) {
        sessions.clear();
        self.session = None;
        self.forecasts.clear();
        self.state = RequestState::Idle;
        self.error = None;
        self.generation += 1;
    }
}
