//! Authenticated session data.

use serde::{Deserialize, Serialize};

/// The signed-in user as returned by the login endpoint.
///
/// Only the fields the client displays are typed; everything else the
/// backend sends is kept in `extra` so it round-trips through storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl User {
    /// Name to greet the user with.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("there")
    }
}

/// Successful response of `POST /auth/login/`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
    #[serde(default)]
    pub user: User,
}

/// Tokens plus the user record, persisted by a
/// [`SessionStore`](crate::traits::SessionStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub user: User,
    /// Unix timestamp (seconds) of when the session was established.
    pub saved_at: i64,
}

impl Session {
    pub fn from_login(response: LoginResponse) -> Self {
        Self {
            access_token: response.access,
            refresh_token: response.refresh,
            user: response.user,
            saved_at: chrono::Utc::now().timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_maps_backend_field_names() {
        let response: LoginResponse = serde_json::from_value(serde_json::json!({
            "access": "a-token",
            "refresh": "r-token",
            "user": {"id": 7, "email": "ada@example.com", "full_name": "Ada"}
        }))
        .unwrap();

        let session = Session::from_login(response);
        assert_eq!(session.access_token, "a-token");
        assert_eq!(session.refresh_token, "r-token");
        assert_eq!(session.user.display_name(), "Ada");
        assert_eq!(session.user.extra.get("id"), Some(&serde_json::json!(7)));
        assert!(session.saved_at > 0);
    }

    #[test]
    fn test_user_extra_fields_round_trip() {
        let user: User = serde_json::from_value(serde_json::json!({
            "email": "ada@example.com",
            "plan": "free"
        }))
        .unwrap();
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["plan"], "free");
        assert_eq!(user.display_name(), "ada@example.com");
    }

    #[test]
    fn test_missing_user_defaults() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"access":"a","refresh":"r"}"#).unwrap();
        assert_eq!(response.user, User::default());
        assert_eq!(response.user.display_name(), "there");
    }
}
