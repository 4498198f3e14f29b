//! Auth request and response payloads
//!
//! Field names follow the backend's camelCase JSON.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Token type assumed when the backend omits one
pub const DEFAULT_TOKEN_TYPE: &str = "Bearer";

/// Registration request data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload {
    pub email: String,
    pub user_name: String,
    pub password: String,
}

/// Login request data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// Result of a successful register/login call.
///
/// Only the token fields are interpreted. Everything else the backend sends is
/// kept in `extra` and written back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    pub access_token: String,
    pub expires_in: i64,
    pub refresh_token: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AuthResponse {
    pub fn new(
        token_type: impl Into<String>,
        access_token: impl Into<String>,
        expires_in: i64,
        refresh_token: impl Into<String>,
    ) -> Self {
        Self {
            token_type: Some(token_type.into()),
            access_token: access_token.into(),
            expires_in,
            refresh_token: refresh_token.into(),
            extra: Map::new(),
        }
    }

    /// Token type, defaulting to `Bearer`
    pub fn token_type(&self) -> &str {
        self.token_type
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TOKEN_TYPE)
    }

    /// Value for the `Authorization` header
    pub fn authorization_header(&self) -> String {
        format!("{} {}", self.token_type(), self.access_token)
    }

    /// Approximate token lifetime in whole minutes, if the backend sent one
    pub fn expires_in_minutes(&self) -> Option<i64> {
        (self.expires_in != 0).then(|| (self.expires_in as f64 / 60.0).round() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_payload_serialization() {
        let payload = RegisterPayload {
            email: "a@b.com".to_string(),
            user_name: "a".to_string(),
            password: "Aa1!aaaa".to_string(),
        };

        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            value,
            json!({"email": "a@b.com", "userName": "a", "password": "Aa1!aaaa"})
        );
    }

    #[test]
    fn test_login_payload_serialization() {
        let payload = LoginPayload {
            email: "a@b.com".to_string(),
            password: "secret".to_string(),
        };

        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value, json!({"email": "a@b.com", "password": "secret"}));
    }

    #[test]
    fn test_auth_response_keeps_unknown_fields() {
        let body = json!({
            "tokenType": "Bearer",
            "accessToken": "tok",
            "expiresIn": 3600,
            "refreshToken": "r",
            "userId": "42",
            "roles": ["admin"]
        });

        let response: AuthResponse = serde_json::from_value(body.clone()).unwrap();

        assert_eq!(response.access_token, "tok");
        assert_eq!(response.extra.get("userId"), Some(&json!("42")));
        assert_eq!(serde_json::to_value(&response).unwrap(), body);
    }

    #[test]
    fn test_auth_response_without_token_type() {
        let response: AuthResponse = serde_json::from_value(json!({
            "accessToken": "tok",
            "expiresIn": 60,
            "refreshToken": "r"
        }))
        .unwrap();

        assert!(response.token_type.is_none());
        assert_eq!(response.token_type(), "Bearer");
        assert_eq!(response.authorization_header(), "Bearer tok");
        assert!(
            !serde_json::to_string(&response)
                .unwrap()
                .contains("tokenType")
        );
    }

    #[test]
    fn test_authorization_header_uses_token_type() {
        let response = AuthResponse::new("MAC", "tok", 3600, "r");

        assert_eq!(response.authorization_header(), "MAC tok");
    }

    #[test]
    fn test_expires_in_minutes() {
        assert_eq!(AuthResponse::new("Bearer", "t", 3600, "r").expires_in_minutes(), Some(60));
        assert_eq!(AuthResponse::new("Bearer", "t", 90, "r").expires_in_minutes(), Some(2));
        assert_eq!(AuthResponse::new("Bearer", "t", 0, "r").expires_in_minutes(), None);
    }
}
