use std::sync::Arc;

use actix_web::{Responder, get, post, web};
use common::error::{AppError, Res};
use common::http::Success;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dtos::review::{ReviewFormResponse, SubmitReviewRequest};
use crate::services;

/// Public listing for a vendor's profile page.
#[get("/vendor/{vendor_id}")]
async fn get_vendor_reviews(
    path: web::Path<Uuid>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let reviews = db::review::list_reviews_by_vendor(pg_pool, path.into_inner()).await?;
    Success::ok(reviews)
}

/// Resolves a pending link so the review form can render. Unknown tokens
/// are 404; used links get an "already submitted" conflict.
#[get("/{token}")]
async fn get_review_form(path: web::Path<String>, pool: web::Data<Arc<PgPool>>) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let link = services::review::resolve_pending_link(pg_pool, &path.into_inner()).await?;

    let vendor = db::vendor::get_vendor_by_id(pg_pool, link.vendor_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Vendor not found".to_string()))?;

    Success::ok(ReviewFormResponse {
        vendor_name: vendor.business_name,
        recipient_email: link.recipient_email,
    })
}

/// Accepts the one review a link grants and marks the link completed.
#[post("/{token}")]
async fn post_review(
    path: web::Path<String>,
    req: web::Json<SubmitReviewRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let review =
        services::review::submit_review(pg_pool, &path.into_inner(), req.into_inner()).await?;
    Success::created(review)
}
