use common::error::{AppError, Res};
use sqlx::{Executor, Postgres, types::JsonValue};
use uuid::Uuid;

use crate::models::draft::OnboardingDraft;

pub async fn get_draft_by_user_id<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
) -> Res<Option<OnboardingDraft>> {
    sqlx::query_as::<_, OnboardingDraft>("SELECT * FROM onboarding_drafts WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

/// Persists the draft exactly as submitted so a later load restores the
/// form unchanged.
pub async fn upsert_draft<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
    role: &str,
    step: i32,
    data: JsonValue,
) -> Res<OnboardingDraft> {
    sqlx::query_as::<_, OnboardingDraft>(
        r#"
        INSERT INTO onboarding_drafts (user_id, role, step, data)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (user_id) DO UPDATE SET
            role = EXCLUDED.role,
            step = EXCLUDED.step,
            data = EXCLUDED.data,
            updated_at = now()
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(role)
    .bind(step)
    .bind(data)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn delete_draft<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
) -> Res<()> {
    sqlx::query("DELETE FROM onboarding_drafts WHERE user_id = $1")
        .bind(user_id)
        .execute(executor)
        .await?;
    Ok(())
}
