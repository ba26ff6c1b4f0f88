use std::sync::Arc;

use actix_web::{Responder, get, post, put, web};
use common::error::{AppError, Res};
use common::http::Success;
use common::jwt::JwtClaims;
use sqlx::PgPool;

use crate::dtos::onboarding::{CompleteRequest, DraftSaveRequest};
use crate::dtos::profile::{CoupleProfileRequest, VendorProfileRequest};
use crate::services::onboarding;

/// Returns the saved wizard draft: current step plus every entered field,
/// exactly as last persisted.
#[get("/draft")]
async fn get_draft(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let draft = db::draft::get_draft_by_user_id(pg_pool, claims.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("No onboarding draft saved".to_string()))?;
    Success::ok(draft)
}

/// Persists the wizard draft. The step counter only moves forward past a
/// gate when that step's required fields are present; the field data
/// itself is stored verbatim.
#[put("/draft")]
async fn put_draft(
    claims: web::ReqData<JwtClaims>,
    req: web::Json<DraftSaveRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let req = req.into_inner();
    onboarding::validate_progress(&claims.role, req.step, &req.data)?;

    let pg_pool: &PgPool = &**pool;
    let draft =
        db::draft::upsert_draft(pg_pool, claims.user_id, &claims.role, req.step, req.data).await?;
    Success::ok(draft)
}

/// Finishes the wizard: validates every gated step, upserts the profile
/// for the account role and discards the draft.
#[post("/complete")]
async fn post_complete(
    claims: web::ReqData<JwtClaims>,
    req: web::Json<CompleteRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let data = req.into_inner().data;
    onboarding::validate_completion(&claims.role, &data)?;

    let pg_pool: &PgPool = &**pool;
    let profile = match claims.role.as_str() {
        "vendor" => {
            let fields: VendorProfileRequest = serde_json::from_value(data)
                .map_err(|e| AppError::BadRequest(format!("Invalid profile fields: {}", e)))?;
            let vendor = db::vendor::upsert_vendor(pg_pool, claims.user_id, fields.into()).await?;
            serde_json::to_value(vendor)
                .map_err(|e| AppError::Internal(format!("Failed to serialize profile: {}", e)))?
        }
        "couple" => {
            let fields: CoupleProfileRequest = serde_json::from_value(data)
                .map_err(|e| AppError::BadRequest(format!("Invalid profile fields: {}", e)))?;
            let couple = db::couple::upsert_couple(pg_pool, claims.user_id, fields.into()).await?;
            serde_json::to_value(couple)
                .map_err(|e| AppError::Internal(format!("Failed to serialize profile: {}", e)))?
        }
        other => return Err(AppError::BadRequest(format!("Unknown role: {}", other))),
    };

    db::draft::delete_draft(pg_pool, claims.user_id).await?;

    Success::ok(profile)
}
