use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A user as the API exposes it. The password hash never leaves the
/// database layer.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Query parameters accepted when listing users.
#[derive(Debug, Deserialize, Validate)]
pub struct UserQuery {
    /// Case-insensitive substring match against username and email.
    #[validate(length(max = 100))]
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_user_query_search_is_bounded() {
        let ok = UserQuery {
            search: Some("alice".to_string()),
        };
        assert!(ok.validate().is_ok());

        let absent = UserQuery { search: None };
        assert!(absent.validate().is_ok());

        let oversized = UserQuery {
            search: Some("x".repeat(101)),
        };
        assert!(oversized.validate().is_err());
    }

    #[test]
    fn test_user_serialization_has_no_secrets() {
        let user = User {
            id: 1,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["username"], "alice");
        assert!(json.get("password_hash").is_none());
    }
}
