use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{dtos::couple::CoupleUpsert, models::couple::Couple};

pub async fn get_couple_by_user_id<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
) -> Res<Option<Couple>> {
    sqlx::query_as::<_, Couple>("SELECT * FROM couples WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

pub async fn upsert_couple<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
    data: CoupleUpsert,
) -> Res<Couple> {
    sqlx::query_as::<_, Couple>(
        r#"
        INSERT INTO couples
            (user_id, partner_one, partner_two, wedding_date, budget_cents, city, media, is_public, onboarded)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, true)
        ON CONFLICT (user_id) DO UPDATE SET
            partner_one = EXCLUDED.partner_one,
            partner_two = EXCLUDED.partner_two,
            wedding_date = EXCLUDED.wedding_date,
            budget_cents = EXCLUDED.budget_cents,
            city = EXCLUDED.city,
            media = EXCLUDED.media,
            is_public = EXCLUDED.is_public,
            onboarded = true,
            updated_at = now()
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(data.partner_one)
    .bind(data.partner_two)
    .bind(data.wedding_date)
    .bind(data.budget_cents)
    .bind(data.city)
    .bind(data.media)
    .bind(data.is_public)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}
