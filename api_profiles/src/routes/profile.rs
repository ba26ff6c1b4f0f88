use std::sync::Arc;

use actix_web::{Responder, get, put, web};
use common::error::{AppError, Res};
use common::http::Success;
use common::jwt::JwtClaims;
use sqlx::PgPool;

use crate::dtos::profile::{CoupleProfileRequest, VendorProfileRequest};

/// Returns the vendor profile owned by the authenticated user.
#[get("/profile")]
async fn get_vendor_profile(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    claims.require_role("vendor")?;

    let pg_pool: &PgPool = &**pool;
    let vendor = db::vendor::get_vendor_by_user_id(pg_pool, claims.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Vendor profile not found".to_string()))?;
    Success::ok(vendor)
}

/// Creates or replaces the vendor profile.
#[put("/profile")]
async fn put_vendor_profile(
    claims: web::ReqData<JwtClaims>,
    req: web::Json<VendorProfileRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    claims.require_role("vendor")?;

    let pg_pool: &PgPool = &**pool;
    let vendor =
        db::vendor::upsert_vendor(pg_pool, claims.user_id, req.into_inner().into()).await?;
    Success::ok(vendor)
}

/// Returns the couple profile owned by the authenticated user.
#[get("/profile")]
async fn get_couple_profile(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    claims.require_role("couple")?;

    let pg_pool: &PgPool = &**pool;
    let couple = db::couple::get_couple_by_user_id(pg_pool, claims.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Couple profile not found".to_string()))?;
    Success::ok(couple)
}

/// Creates or replaces the couple profile.
#[put("/profile")]
async fn put_couple_profile(
    claims: web::ReqData<JwtClaims>,
    req: web::Json<CoupleProfileRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    claims.require_role("couple")?;

    let pg_pool: &PgPool = &**pool;
    let couple =
        db::couple::upsert_couple(pg_pool, claims.user_id, req.into_inner().into()).await?;
    Success::ok(couple)
}
