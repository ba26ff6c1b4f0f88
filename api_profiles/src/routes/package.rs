use std::sync::Arc;

use actix_web::{Responder, delete, get, post, put, web};
use common::error::{AppError, Res};
use common::http::Success;
use common::jwt::JwtClaims;
use db::models::vendor::Vendor;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dtos::package::{PackageOrderRequest, PackageRequest};

async fn require_vendor(pool: &PgPool, claims: &JwtClaims) -> Res<Vendor> {
    claims.require_role("vendor")?;
    db::vendor::get_vendor_by_user_id(pool, claims.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Vendor profile not found".to_string()))
}

/// Lists the vendor's packages in display order.
#[get("/packages")]
async fn get_packages(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let vendor = require_vendor(pg_pool, &claims).await?;
    let packages = db::package::list_packages_by_vendor(pg_pool, vendor.id).await?;
    Success::ok(packages)
}

/// Adds a package at the end of the display order.
#[post("/packages")]
async fn post_package(
    claims: web::ReqData<JwtClaims>,
    req: web::Json<PackageRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let vendor = require_vendor(pg_pool, &claims).await?;
    let package =
        db::package::insert_package(pg_pool, vendor.id, req.into_inner().into()).await?;
    Success::created(package)
}

/// Rewrites the display order from the submitted id sequence. The
/// sequence must cover every package exactly once.
#[put("/packages/order")]
async fn put_package_order(
    claims: web::ReqData<JwtClaims>,
    req: web::Json<PackageOrderRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let vendor = require_vendor(pg_pool, &claims).await?;
    db::package::reorder_packages(pg_pool, vendor.id, &req.package_ids).await?;

    let packages = db::package::list_packages_by_vendor(pg_pool, vendor.id).await?;
    Success::ok(packages)
}

#[put("/packages/{package_id}")]
async fn put_package(
    claims: web::ReqData<JwtClaims>,
    path: web::Path<Uuid>,
    req: web::Json<PackageRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let vendor = require_vendor(pg_pool, &claims).await?;
    let package = db::package::update_package(
        pg_pool,
        path.into_inner(),
        vendor.id,
        req.into_inner().into(),
    )
    .await?;
    Success::ok(package)
}

#[delete("/packages/{package_id}")]
async fn delete_package(
    claims: web::ReqData<JwtClaims>,
    path: web::Path<Uuid>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let vendor = require_vendor(pg_pool, &claims).await?;
    db::package::delete_package(pg_pool, path.into_inner(), vendor.id).await?;
    Success::acknowledged()
}
