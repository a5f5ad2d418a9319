use crate::error::AppError;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Claims carried by an access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject: the user id the token was issued for.
    pub sub: i32,
    /// Expiration, seconds since epoch.
    pub exp: usize,
}

/// How long issued tokens stay valid. Tunable through `JWT_TTL_HOURS`,
/// defaulting to 24 hours.
fn token_ttl_hours() -> i64 {
    std::env::var("JWT_TTL_HOURS")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(24)
}

/// Issues a signed token for `user_id`.
///
/// Signing requires the `JWT_SECRET` environment variable; a missing secret
/// is a server misconfiguration, not an authentication failure.
pub fn generate_token(user_id: i32) -> Result<String, AppError> {
    let expiration = chrono::Utc::now()
        .checked_add_signed(chrono::Duration::hours(token_ttl_hours()))
        .expect("valid timestamp")
        .timestamp() as usize;

    let claims = Claims {
        sub: user_id,
        exp: expiration,
    };

    let secret = std::env::var("JWT_SECRET")
        .map_err(|_| AppError::InternalServerError("JWT_SECRET not set".into()))?;

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalServerError(format!("Failed to generate token: {}", e)))
}

/// Verifies a token's signature and expiry and returns its claims.
///
/// Invalid, expired, or wrongly-signed tokens come back as
/// `AppError::Unauthorized`.
pub fn verify_token(token: &str) -> Result<Claims, AppError> {
    let secret = std::env::var("JWT_SECRET")
        .map_err(|_| AppError::InternalServerError("JWT_SECRET not set".into()))?;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    // The same secret is used by every test module in this crate so that
    // parallel tests never observe a conflicting value in the process
    // environment.
    const TEST_SECRET: &str = "unit-test-secret";

    fn set_test_secret() {
        std::env::set_var("JWT_SECRET", TEST_SECRET);
    }

    #[test]
    fn test_token_generation_and_verification() {
        set_test_secret();

        let user_id = 1;
        let token = generate_token(user_id).unwrap();
        let claims = verify_token(&token).unwrap();
        assert_eq!(claims.sub, user_id);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        set_test_secret();

        let expiration = chrono::Utc::now()
            .checked_sub_signed(chrono::Duration::hours(2))
            .expect("valid timestamp")
            .timestamp() as usize;

        let expired = encode(
            &Header::default(),
            &Claims {
                sub: 2,
                exp: expiration,
            },
            &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .unwrap();

        match verify_token(&expired) {
            Err(AppError::Unauthorized(msg)) => {
                assert!(msg.contains("ExpiredSignature"), "got: {}", msg);
            }
            Ok(_) => panic!("expired token must not verify"),
            Err(e) => panic!("unexpected error: {:?}", e),
        }
    }

    #[test]
    fn test_foreign_signature_is_rejected() {
        set_test_secret();

        let foreign = encode(
            &Header::default(),
            &Claims {
                sub: 3,
                exp: (chrono::Utc::now().timestamp() + 3600) as usize,
            },
            &EncodingKey::from_secret(b"somebody-elses-secret"),
        )
        .unwrap();

        match verify_token(&foreign) {
            Err(AppError::Unauthorized(msg)) => {
                assert!(msg.contains("InvalidSignature"), "got: {}", msg);
            }
            Ok(_) => panic!("token signed with another secret must not verify"),
            Err(e) => panic!("unexpected error: {:?}", e),
        }
    }
}
