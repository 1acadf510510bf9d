use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    // Bcrypt hash, never serialized into responses
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/replace payload. Missing fields bind to blank values so an update
/// overwrites every column (full-replace semantics).
#[derive(Debug, Deserialize, Validate)]
pub struct UserRequest {
    #[serde(default)]
    #[validate(length(max = 255, message = "username must be at most 255 characters"))]
    pub username: String,
    #[serde(default)]
    #[validate(length(max = 255, message = "email must be at most 255 characters"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 255, message = "password must be at most 255 characters"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_password_is_never_serialized() {
        let user = User {
            id: 1,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "$2b$12$hash".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["username"], "alice");
    }

    #[test]
    fn test_omitted_fields_bind_to_blank_values() {
        let req: UserRequest = serde_json::from_str(r#"{"username":"bob"}"#).unwrap();

        assert_eq!(req.username, "bob");
        assert_eq!(req.email, "");
        assert_eq!(req.password, "");
    }

    #[test]
    fn test_email_over_255_characters_is_rejected() {
        let req = UserRequest {
            username: "bob".to_string(),
            email: "x".repeat(256),
            password: "pw".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
