use std::sync::Arc;

use actix_web::{Responder, get, web};
use common::error::{AppError, Res};
use common::http::Success;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dtos::directory::DirectoryQuery;

/// Public directory of onboarded vendors, optionally filtered by
/// category and city.
#[get("")]
async fn get_vendors(
    query: web::Query<DirectoryQuery>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let vendors = db::vendor::list_onboarded_vendors(
        pg_pool,
        query.category.as_deref(),
        query.city.as_deref(),
    )
    .await?;
    Success::ok(vendors)
}

/// Public vendor detail page, including packages in display order.
#[get("/{vendor_id}")]
async fn get_vendor(path: web::Path<Uuid>, pool: web::Data<Arc<PgPool>>) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let vendor = db::vendor::get_vendor_by_id(pg_pool, path.into_inner())
        .await?
        .filter(|vendor| vendor.onboarded)
        .ok_or_else(|| AppError::NotFound("Vendor not found".to_string()))?;

    let packages = db::package::list_packages_by_vendor(pg_pool, vendor.id).await?;
    Success::ok(serde_json::json!({ "vendor": vendor, "packages": packages }))
}
