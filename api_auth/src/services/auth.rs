use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use common::{
    env_config::Config,
    error::{AppError, Res},
};
use db::{dtos::user::UserCreateRequest, models::user::User};
use sqlx::PgPool;

use crate::dtos::auth::{LoginRequest, RegisterRequest};

pub const ROLE_VENDOR: &str = "vendor";
pub const ROLE_COUPLE: &str = "couple";

fn hash_password(password: &str) -> Res<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}

/// Registers a new account: hashes the password, creates the Stripe
/// customer eagerly and stores its id on the user row.
pub async fn create_user(pool: &PgPool, req: &RegisterRequest, config: &Config) -> Res<User> {
    if req.role != ROLE_VENDOR && req.role != ROLE_COUPLE {
        return Err(AppError::BadRequest(
            "Role must be \"vendor\" or \"couple\"".to_string(),
        ));
    }

    let password_hash = hash_password(&req.password)?;

    let client = common::stripe::create_client(&config.stripe_secret_key);
    let customer = common::stripe::create_customer(&client, &req.email, &req.role).await?;

    db::user::insert_user(
        pool,
        UserCreateRequest {
            email: req.email.clone(),
            password_hash,
            role: req.role.clone(),
            stripe_customer_id: Some(customer.id.to_string()),
        },
    )
    .await
}

/// Authenticates an existing user.
/// If the user does not exist, returns 400.
/// If the password does not match, returns 401.
/// If `expected_role` is set and differs from the account role, returns 403.
pub async fn authenticate_user(pool: &PgPool, login_data: &LoginRequest) -> Res<User> {
    let record = db::user::get_record_by_email(pool, &login_data.email)
        .await
        .map_err(|_| AppError::BadRequest("User with this email does not exist".to_string()))?;

    let parsed_hash = PasswordHash::new(&record.password_hash)
        .map_err(|e| AppError::Internal(format!("Stored password hash is invalid: {}", e)))?;
    let is_valid = Argon2::default()
        .verify_password(login_data.password.as_bytes(), &parsed_hash)
        .is_ok();

    if !is_valid {
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    }

    if let Some(expected) = &login_data.expected_role {
        if &record.role != expected {
            return Err(AppError::Forbidden(format!(
                "This account is registered as a {}",
                record.role
            )));
        }
    }

    Ok(User::from(record))
}
