use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{
    dtos::review::{ReviewCreateRequest, ReviewLinkCreateRequest},
    models::review::{LINK_STATUS_COMPLETED, Review, ReviewLink},
};

pub async fn insert_review_link<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: ReviewLinkCreateRequest,
) -> Res<ReviewLink> {
    sqlx::query_as::<_, ReviewLink>(
        r#"
        INSERT INTO review_links (vendor_id, token, recipient_email)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(data.vendor_id)
    .bind(data.token)
    .bind(data.recipient_email)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn get_link_by_token<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    token: &str,
) -> Res<Option<ReviewLink>> {
    sqlx::query_as::<_, ReviewLink>("SELECT * FROM review_links WHERE token = $1")
        .bind(token)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

pub async fn list_links_by_vendor<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    vendor_id: Uuid,
) -> Res<Vec<ReviewLink>> {
    sqlx::query_as::<_, ReviewLink>(
        "SELECT * FROM review_links WHERE vendor_id = $1 ORDER BY created_at DESC",
    )
    .bind(vendor_id)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

pub async fn mark_link_completed<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    link_id: Uuid,
) -> Res<()> {
    sqlx::query(
        "UPDATE review_links SET status = $1, completed_at = now() WHERE id = $2",
    )
    .bind(LINK_STATUS_COMPLETED)
    .bind(link_id)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn insert_review<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: ReviewCreateRequest,
) -> Res<Review> {
    sqlx::query_as::<_, Review>(
        r#"
        INSERT INTO reviews (vendor_id, link_id, reviewer_name, rating, comment)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(data.vendor_id)
    .bind(data.link_id)
    .bind(data.reviewer_name)
    .bind(data.rating)
    .bind(data.comment)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn list_reviews_by_vendor<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    vendor_id: Uuid,
) -> Res<Vec<Review>> {
    sqlx::query_as::<_, Review>(
        "SELECT * FROM reviews WHERE vendor_id = $1 ORDER BY created_at DESC",
    )
    .bind(vendor_id)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}
