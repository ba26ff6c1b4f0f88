use std::sync::Arc;

use actix_web::{Responder, delete, get, post, web};
use common::error::{AppError, Res};
use common::http::Success;
use common::jwt::JwtClaims;
use db::models::couple::Couple;
use sqlx::PgPool;
use uuid::Uuid;

async fn require_couple(pool: &PgPool, claims: &JwtClaims) -> Res<Couple> {
    claims.require_role("couple")?;
    db::couple::get_couple_by_user_id(pool, claims.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Couple profile not found".to_string()))
}

/// The couple's shortlist, most recently saved first.
#[get("")]
async fn get_saved_vendors(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let couple = require_couple(pg_pool, &claims).await?;
    let vendors = db::planner::list_saved_vendors(pg_pool, couple.id).await?;
    Success::ok(vendors)
}

/// Saving twice is a no-op rather than an error.
#[post("/{vendor_id}")]
async fn post_saved_vendor(
    claims: web::ReqData<JwtClaims>,
    path: web::Path<Uuid>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let couple = require_couple(pg_pool, &claims).await?;

    let vendor_id = path.into_inner();
    db::vendor::get_vendor_by_id(pg_pool, vendor_id)
        .await?
        .filter(|vendor| vendor.onboarded)
        .ok_or_else(|| AppError::NotFound("Vendor not found".to_string()))?;

    let saved = db::planner::save_vendor(pg_pool, couple.id, vendor_id).await?;
    Success::created(saved)
}

#[delete("/{vendor_id}")]
async fn delete_saved_vendor(
    claims: web::ReqData<JwtClaims>,
    path: web::Path<Uuid>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let couple = require_couple(pg_pool, &claims).await?;
    db::planner::unsave_vendor(pg_pool, couple.id, path.into_inner()).await?;
    Success::acknowledged()
}
