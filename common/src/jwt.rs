use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    env_config::JwtConfig,
    error::{AppError, Res},
};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct JwtClaims {
    pub user_id: Uuid,
    pub role: String,
    pub stripe_customer_id: String,
    pub exp: usize,
}

impl JwtClaims {
    /// Rejects the request when the token was issued for a different
    /// account role, e.g. a couple account hitting a vendor endpoint.
    pub fn require_role(&self, role: &str) -> Res<()> {
        if self.role == role {
            Ok(())
        } else {
            Err(AppError::Forbidden(format!(
                "This endpoint requires a {} account",
                role
            )))
        }
    }
}

pub struct ClaimsSpec {
    pub user_id: Uuid,
    pub role: String,
    pub stripe_customer_id: String,
}

/// Generates JWT token based on user object and JWT configuration options
pub fn generate_jwt(spec: ClaimsSpec, config: &JwtConfig) -> Res<String> {
    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(config.expiration_hours))
        .expect("valid timestamp")
        .timestamp();

    let claims = JwtClaims {
        user_id: spec.user_id,
        role: spec.role,
        stripe_customer_id: spec.stripe_customer_id,
        exp: expiration as usize,
    };

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(AppError::from)
}

/// Extracts claims object from JWT token.
/// Requires JWT secret.
pub fn validate_jwt(token: &str, secret: &str) -> Res<JwtClaims> {
    let token_data = jsonwebtoken::decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".to_string(),
            expiration_hours: 1,
        }
    }

    #[test]
    fn issued_token_round_trips() {
        let config = test_config();
        let user_id = Uuid::new_v4();
        let token = generate_jwt(
            ClaimsSpec {
                user_id,
                role: "vendor".to_string(),
                stripe_customer_id: "cus_123".to_string(),
            },
            &config,
        )
        .unwrap();

        let claims = validate_jwt(&token, &config.secret).unwrap();
        assert_eq!(claims.user_id, user_id);
        assert_eq!(claims.role, "vendor");
        assert_eq!(claims.stripe_customer_id, "cus_123");
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let config = test_config();
        let token = generate_jwt(
            ClaimsSpec {
                user_id: Uuid::new_v4(),
                role: "couple".to_string(),
                stripe_customer_id: String::new(),
            },
            &config,
        )
        .unwrap();

        assert!(validate_jwt(&token, "other-secret").is_err());
    }

    #[test]
    fn role_guard_rejects_mismatch() {
        let claims = JwtClaims {
            user_id: Uuid::new_v4(),
            role: "couple".to_string(),
            stripe_customer_id: String::new(),
            exp: 0,
        };
        assert!(claims.require_role("couple").is_ok());
        assert!(matches!(
            claims.require_role("vendor"),
            Err(AppError::Forbidden(_))
        ));
    }
}
