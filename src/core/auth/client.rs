//! Calls to the backend's identity endpoints

use crate::core::api::{ApiClient, ApiError};
use crate::core::auth::models::{AuthResponse, LoginPayload, RegisterPayload};

pub const REGISTER_PATH: &str = "/api/auth/register";
pub const LOGIN_PATH: &str = "/api/auth/login";

/// Register a new user
pub async fn register_user(
    client: &ApiClient,
    payload: &RegisterPayload,
) -> Result<AuthResponse, ApiError> {
    client.post_json(REGISTER_PATH, payload).await
}

/// Login with email and password
pub async fn login_user(client: &ApiClient, payload: &LoginPayload) -> Result<AuthResponse, ApiError> {
    client.post_json(LOGIN_PATH, payload).await
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::core::test_support::stub_client;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{Value, json};

    fn token_body() -> Value {
        json!({
            "tokenType": "Bearer",
            "accessToken": "tok",
            "expiresIn": 3600,
            "refreshToken": "r"
        })
    }

    #[tokio::test]
    async fn test_register_user_posts_payload() {
        let router = Router::new().route(
            REGISTER_PATH,
            post(|Json(body): Json<Value>| async move {
                assert_eq!(
                    body,
                    json!({"email": "a@b.com", "userName": "a", "password": "Aa1!aaaa"})
                );
                Json(token_body())
            }),
        );
        let client = stub_client(router).await;

        let payload = RegisterPayload {
            email: "a@b.com".to_string(),
            user_name: "a".to_string(),
            password: "Aa1!aaaa".to_string(),
        };
        let response = register_user(&client, &payload).await.unwrap();

        assert_eq!(response, AuthResponse::new("Bearer", "tok", 3600, "r"));
    }

    #[tokio::test]
    async fn test_login_user_posts_payload() {
        let router = Router::new().route(
            LOGIN_PATH,
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body, json!({"email": "a@b.com", "password": "pw"}));
                Json(token_body())
            }),
        );
        let client = stub_client(router).await;

        let payload = LoginPayload {
            email: "a@b.com".to_string(),
            password: "pw".to_string(),
        };
        let response = login_user(&client, &payload).await.unwrap();

        assert_eq!(response.access_token, "tok");
    }

    #[tokio::test]
    async fn test_login_user_propagates_api_error() {
        let router = Router::new().route(
            LOGIN_PATH,
            post(|| async {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({"title": "Invalid login attempt"})),
                )
            }),
        );
        let client = stub_client(router).await;

        let err = login_user(&client, &LoginPayload::default()).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "API call failed with status 401: Unauthorized\nInvalid login attempt"
        );
    }

    #[tokio::test]
    async fn test_register_user_empty_body_is_an_error() {
        let router = Router::new().route(REGISTER_PATH, post(|| async { StatusCode::OK }));
        let client = stub_client(router).await;

        let err = register_user(&client, &RegisterPayload::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::NoContent));
    }
}
