use common::error::{AppError, Res};
use sqlx::{Executor, Postgres, types::JsonValue};
use uuid::Uuid;

use crate::models::{
    planner::{SavedVendor, SeatingLayout},
    vendor::Vendor,
};

pub async fn save_vendor<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    couple_id: Uuid,
    vendor_id: Uuid,
) -> Res<SavedVendor> {
    sqlx::query_as::<_, SavedVendor>(
        r#"
        INSERT INTO saved_vendors (couple_id, vendor_id)
        VALUES ($1, $2)
        ON CONFLICT (couple_id, vendor_id) DO UPDATE SET couple_id = EXCLUDED.couple_id
        RETURNING *
        "#,
    )
    .bind(couple_id)
    .bind(vendor_id)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn unsave_vendor<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    couple_id: Uuid,
    vendor_id: Uuid,
) -> Res<()> {
    sqlx::query("DELETE FROM saved_vendors WHERE couple_id = $1 AND vendor_id = $2")
        .bind(couple_id)
        .bind(vendor_id)
        .execute(executor)
        .await?;
    Ok(())
}

pub async fn list_saved_vendors<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    couple_id: Uuid,
) -> Res<Vec<Vendor>> {
    sqlx::query_as::<_, Vendor>(
        r#"
        SELECT v.* FROM vendors v
        JOIN saved_vendors s ON s.vendor_id = v.id
        WHERE s.couple_id = $1
        ORDER BY s.created_at DESC
        "#,
    )
    .bind(couple_id)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

pub async fn insert_layout<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    couple_id: Uuid,
    name: &str,
    layout: JsonValue,
) -> Res<SeatingLayout> {
    sqlx::query_as::<_, SeatingLayout>(
        r#"
        INSERT INTO seating_layouts (couple_id, name, layout)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(couple_id)
    .bind(name)
    .bind(layout)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn list_layouts<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    couple_id: Uuid,
) -> Res<Vec<SeatingLayout>> {
    sqlx::query_as::<_, SeatingLayout>(
        "SELECT * FROM seating_layouts WHERE couple_id = $1 ORDER BY created_at",
    )
    .bind(couple_id)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

pub async fn update_layout<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    layout_id: Uuid,
    couple_id: Uuid,
    name: &str,
    layout: JsonValue,
) -> Res<SeatingLayout> {
    sqlx::query_as::<_, SeatingLayout>(
        r#"
        UPDATE seating_layouts
        SET name = $1, layout = $2, updated_at = now()
        WHERE id = $3 AND couple_id = $4
        RETURNING *
        "#,
    )
    .bind(name)
    .bind(layout)
    .bind(layout_id)
    .bind(couple_id)
    .fetch_optional(executor)
    .await?
    .ok_or_else(|| AppError::NotFound("Seating layout not found".to_string()))
}

pub async fn delete_layout<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    layout_id: Uuid,
    couple_id: Uuid,
) -> Res<()> {
    let result = sqlx::query("DELETE FROM seating_layouts WHERE id = $1 AND couple_id = $2")
        .bind(layout_id)
        .bind(couple_id)
        .execute(executor)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Seating layout not found".to_string()));
    }
    Ok(())
}
