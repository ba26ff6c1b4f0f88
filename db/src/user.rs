use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{
    dtos::user::UserCreateRequest,
    models::user::{User, UserRecord},
};

pub async fn exists_user_by_email<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    email: &str,
) -> Res<bool> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
        .bind(email)
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}

pub async fn get_user_by_email<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    email: &str,
) -> Res<User> {
    sqlx::query_as::<_, UserRecord>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_one(executor)
        .await
        .map(User::from)
        .map_err(AppError::from)
}

pub async fn get_user_by_id<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
) -> Res<User> {
    sqlx::query_as::<_, UserRecord>("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_one(executor)
        .await
        .map(User::from)
        .map_err(AppError::from)
}

/// Full record including the password hash, for credential verification.
pub async fn get_record_by_email<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    email: &str,
) -> Res<UserRecord> {
    sqlx::query_as::<_, UserRecord>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}

pub async fn insert_user<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: UserCreateRequest,
) -> Res<User> {
    sqlx::query_as::<_, UserRecord>(
        r#"
        INSERT INTO users (email, password_hash, role, stripe_customer_id)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(data.email)
    .bind(data.password_hash)
    .bind(data.role)
    .bind(data.stripe_customer_id)
    .fetch_one(executor)
    .await
    .map(User::from)
    .map_err(AppError::from)
}

pub async fn set_stripe_customer_id<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
    customer_id: &str,
) -> Res<()> {
    sqlx::query("UPDATE users SET stripe_customer_id = $1, updated_at = now() WHERE id = $2")
        .bind(customer_id)
        .bind(user_id)
        .execute(executor)
        .await?;
    Ok(())
}
