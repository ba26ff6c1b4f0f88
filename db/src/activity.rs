use chrono::NaiveDateTime;
use common::error::{AppError, Res};
use sqlx::{Executor, Postgres, types::JsonValue};
use uuid::Uuid;

use crate::models::activity::{ActivityCount, VendorActivity};

pub async fn insert_activity<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    vendor_id: Uuid,
    activity: &str,
    metadata: JsonValue,
) -> Res<VendorActivity> {
    sqlx::query_as::<_, VendorActivity>(
        r#"
        INSERT INTO vendor_activities (vendor_id, activity, metadata)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(vendor_id)
    .bind(activity)
    .bind(metadata)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

/// Per-activity counts since the cutoff, for the vendor dashboard metrics.
pub async fn count_activities_since<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    vendor_id: Uuid,
    since: NaiveDateTime,
) -> Res<Vec<ActivityCount>> {
    sqlx::query_as::<_, ActivityCount>(
        r#"
        SELECT activity, COUNT(*) AS count
        FROM vendor_activities
        WHERE vendor_id = $1 AND created_at >= $2
        GROUP BY activity
        ORDER BY activity
        "#,
    )
    .bind(vendor_id)
    .bind(since)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}
