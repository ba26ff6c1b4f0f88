use actix_web::{Responder, post, web};
use common::env_config::Config;
use common::error::{AppError, Res};
use common::http::Success;
use common::jwt::{self, ClaimsSpec};
use sqlx::PgPool;
use std::sync::Arc;

use crate::dtos::auth::{AuthResponse, LoginRequest, RegisterRequest};
use crate::services;

/// Registers a new vendor or couple account.
///
/// # Input
/// - `req`: JSON payload with `email`, `password` and `role`
/// - `pool`: Database connection pool
/// - `config`: Application configuration
///
/// # Output
/// - Success: Returns the created user object with 201 Created status
/// - Error: Returns 400 Bad Request if the email already exists or the
///   role is unknown
#[post("/register")]
async fn post_register(
    req: web::Json<RegisterRequest>,
    pool: web::Data<Arc<PgPool>>,
    config: web::Data<Arc<Config>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let email_exists = db::user::exists_user_by_email(pg_pool, &req.email).await?;
    if email_exists {
        return Err(AppError::BadRequest(
            "An account with this email already exists".to_string(),
        ));
    }
    let user = services::auth::create_user(pg_pool, &req.into_inner(), &config).await?;
    Success::created(user)
}

/// Authenticates a user with email and password.
///
/// # Input
/// - `login_data`: JSON payload with `email`, `password` and an optional
///   `expected_role` passed by the role-specific sign-in pages
/// - `config`: Application configuration for JWT generation
/// - `pool`: Database connection pool
///
/// # Output
/// - Success: Returns an auth response with JWT token and user details
/// - Error: 401 Unauthorized for invalid credentials, 403 Forbidden when
///   the account role does not match `expected_role`
#[post("/login")]
async fn post_login(
    login_data: web::Json<LoginRequest>,
    config: web::Data<Arc<Config>>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let user = services::auth::authenticate_user(pg_pool, &login_data).await?;

    let token = jwt::generate_jwt(
        ClaimsSpec {
            user_id: user.id,
            role: user.role.clone(),
            stripe_customer_id: user.stripe_customer_id.clone().unwrap_or_default(),
        },
        &config.jwt_config,
    )?;

    Success::ok(AuthResponse { token, user })
}
