use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{dtos::subscription::SubscriptionUpsert, models::subscription::SubscriptionRecord};

pub async fn get_subscription_by_user_id<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
) -> Res<Option<SubscriptionRecord>> {
    sqlx::query_as::<_, SubscriptionRecord>("SELECT * FROM subscriptions WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

/// Writes the latest processor-side state, keyed by user. The unique
/// constraint on user_id keeps the cache at one row per user; whichever
/// writer lands last wins.
pub async fn upsert_subscription<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: SubscriptionUpsert,
) -> Res<SubscriptionRecord> {
    sqlx::query_as::<_, SubscriptionRecord>(
        r#"
        INSERT INTO subscriptions
            (user_id, stripe_customer_id, stripe_subscription_id, plan_id,
             status, billing_interval, cancel_at_period_end, current_period_end)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        ON CONFLICT (user_id) DO UPDATE SET
            stripe_customer_id = EXCLUDED.stripe_customer_id,
            stripe_subscription_id = EXCLUDED.stripe_subscription_id,
            plan_id = EXCLUDED.plan_id,
            status = EXCLUDED.status,
            billing_interval = EXCLUDED.billing_interval,
            cancel_at_period_end = EXCLUDED.cancel_at_period_end,
            current_period_end = EXCLUDED.current_period_end,
            updated_at = now()
        RETURNING *
        "#,
    )
    .bind(data.user_id)
    .bind(data.stripe_customer_id)
    .bind(data.stripe_subscription_id)
    .bind(data.plan_id)
    .bind(data.status)
    .bind(data.billing_interval)
    .bind(data.cancel_at_period_end)
    .bind(data.current_period_end)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn delete_subscription_by_user_id<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
) -> Res<()> {
    sqlx::query("DELETE FROM subscriptions WHERE user_id = $1")
        .bind(user_id)
        .execute(executor)
        .await?;
    Ok(())
}
