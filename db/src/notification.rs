use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::notification::NotificationPreferences;

/// Returns the stored preferences, falling back to the defaults row shape
/// when the user has never saved any.
pub async fn get_preferences<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
) -> Res<Option<NotificationPreferences>> {
    sqlx::query_as::<_, NotificationPreferences>(
        "SELECT * FROM notification_preferences WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_optional(executor)
    .await
    .map_err(AppError::from)
}

pub async fn upsert_preferences<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
    email_messages: bool,
    email_reviews: bool,
    email_billing: bool,
) -> Res<NotificationPreferences> {
    sqlx::query_as::<_, NotificationPreferences>(
        r#"
        INSERT INTO notification_preferences (user_id, email_messages, email_reviews, email_billing)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (user_id) DO UPDATE SET
            email_messages = EXCLUDED.email_messages,
            email_reviews = EXCLUDED.email_reviews,
            email_billing = EXCLUDED.email_billing,
            updated_at = now()
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(email_messages)
    .bind(email_reviews)
    .bind(email_billing)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}
