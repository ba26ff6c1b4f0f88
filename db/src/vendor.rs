use chrono::NaiveDateTime;
use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{dtos::vendor::VendorUpsert, models::vendor::Vendor};

pub async fn get_vendor_by_id<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    vendor_id: Uuid,
) -> Res<Option<Vendor>> {
    sqlx::query_as::<_, Vendor>("SELECT * FROM vendors WHERE id = $1")
        .bind(vendor_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

pub async fn get_vendor_by_user_id<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
) -> Res<Option<Vendor>> {
    sqlx::query_as::<_, Vendor>("SELECT * FROM vendors WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

/// Public directory listing: onboarded vendors, optionally filtered by
/// category and city.
pub async fn list_onboarded_vendors<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    category: Option<&str>,
    city: Option<&str>,
) -> Res<Vec<Vendor>> {
    sqlx::query_as::<_, Vendor>(
        r#"
        SELECT * FROM vendors
        WHERE onboarded = true
          AND ($1::text IS NULL OR category = $1)
          AND ($2::text IS NULL OR city = $2)
        ORDER BY business_name
        "#,
    )
    .bind(category)
    .bind(city)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

pub async fn upsert_vendor<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
    data: VendorUpsert,
) -> Res<Vendor> {
    sqlx::query_as::<_, Vendor>(
        r#"
        INSERT INTO vendors
            (user_id, business_name, category, city, region, description, phone, website, media, onboarded)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, true)
        ON CONFLICT (user_id) DO UPDATE SET
            business_name = EXCLUDED.business_name,
            category = EXCLUDED.category,
            city = EXCLUDED.city,
            region = EXCLUDED.region,
            description = EXCLUDED.description,
            phone = EXCLUDED.phone,
            website = EXCLUDED.website,
            media = EXCLUDED.media,
            onboarded = true,
            updated_at = now()
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(data.business_name)
    .bind(data.category)
    .bind(data.city)
    .bind(data.region)
    .bind(data.description)
    .bind(data.phone)
    .bind(data.website)
    .bind(data.media)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

/// Mirrors processor-side plan state onto the vendor profile. A no-op when
/// the user has no vendor profile yet.
pub async fn set_subscription_state<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
    plan: Option<&str>,
    end_date: Option<NaiveDateTime>,
) -> Res<()> {
    sqlx::query(
        r#"
        UPDATE vendors
        SET subscription_plan = $1, subscription_end_date = $2, updated_at = now()
        WHERE user_id = $3
        "#,
    )
    .bind(plan)
    .bind(end_date)
    .bind(user_id)
    .execute(executor)
    .await?;
    Ok(())
}
