use std::sync::Arc;

use actix_web::{Responder, get, post, web};
use common::error::{AppError, Res};
use common::http::Success;
use common::jwt::JwtClaims;
use db::dtos::review::ReviewLinkCreateRequest;
use sqlx::PgPool;

use crate::dtos::review::LinkCreateRequest;
use crate::services;

/// Issues a single-use review link for a past client.
#[post("/links")]
async fn post_link(
    claims: web::ReqData<JwtClaims>,
    req: web::Json<LinkCreateRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    claims.require_role("vendor")?;

    let recipient_email = req.recipient_email.trim().to_string();
    if recipient_email.is_empty() {
        return Err(AppError::BadRequest(
            "recipient_email is required".to_string(),
        ));
    }

    let pg_pool: &PgPool = &**pool;
    let vendor = db::vendor::get_vendor_by_user_id(pg_pool, claims.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Vendor profile not found".to_string()))?;

    let link = db::review::insert_review_link(
        pg_pool,
        ReviewLinkCreateRequest {
            vendor_id: vendor.id,
            token: services::review::new_token(),
            recipient_email,
        },
    )
    .await?;

    Success::created(link)
}

/// Lists the vendor's issued links, newest first.
#[get("/links")]
async fn get_links(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    claims.require_role("vendor")?;

    let pg_pool: &PgPool = &**pool;
    let vendor = db::vendor::get_vendor_by_user_id(pg_pool, claims.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Vendor profile not found".to_string()))?;

    let links = db::review::list_links_by_vendor(pg_pool, vendor.id).await?;
    Success::ok(links)
}
