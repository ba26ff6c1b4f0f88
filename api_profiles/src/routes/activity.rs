use std::sync::Arc;

use actix_web::{Responder, get, post, web};
use chrono::{Duration, Utc};
use common::error::{AppError, Res};
use common::http::Success;
use common::jwt::JwtClaims;
use sqlx::PgPool;

use crate::dtos::activity::{ActivityRequest, MetricsQuery};

/// Records one profile-view, message or save event against the vendor.
#[post("/activity")]
async fn post_activity(
    claims: web::ReqData<JwtClaims>,
    req: web::Json<ActivityRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    claims.require_role("vendor")?;

    let req = req.into_inner();
    if req.activity.trim().is_empty() {
        return Err(AppError::BadRequest("activity is required".to_string()));
    }

    let pg_pool: &PgPool = &**pool;
    let vendor = db::vendor::get_vendor_by_user_id(pg_pool, claims.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Vendor profile not found".to_string()))?;

    let activity = db::activity::insert_activity(
        pg_pool,
        vendor.id,
        req.activity.trim(),
        req.metadata.unwrap_or_else(|| serde_json::json!({})),
    )
    .await?;
    Success::created(activity)
}

/// Per-activity counts over a trailing window, for the dashboard metrics
/// cards.
#[get("/metrics")]
async fn get_metrics(
    claims: web::ReqData<JwtClaims>,
    query: web::Query<MetricsQuery>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    claims.require_role("vendor")?;

    let pg_pool: &PgPool = &**pool;
    let vendor = db::vendor::get_vendor_by_user_id(pg_pool, claims.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Vendor profile not found".to_string()))?;

    let days = query.days.unwrap_or(30).clamp(1, 365);
    let since = (Utc::now() - Duration::days(days)).naive_utc();

    let counts = db::activity::count_activities_since(pg_pool, vendor.id, since).await?;
    Success::ok(serde_json::json!({ "window_days": days, "counts": counts }))
}
