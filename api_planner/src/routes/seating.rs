use std::sync::Arc;

use actix_web::{Responder, delete, get, post, put, web};
use common::error::{AppError, Res};
use common::http::Success;
use common::jwt::JwtClaims;
use db::models::couple::Couple;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dtos::planner::SeatingLayoutRequest;

async fn require_couple(pool: &PgPool, claims: &JwtClaims) -> Res<Couple> {
    claims.require_role("couple")?;
    db::couple::get_couple_by_user_id(pool, claims.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Couple profile not found".to_string()))
}

#[get("")]
async fn get_layouts(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let couple = require_couple(pg_pool, &claims).await?;
    let layouts = db::planner::list_layouts(pg_pool, couple.id).await?;
    Success::ok(layouts)
}

#[post("")]
async fn post_layout(
    claims: web::ReqData<JwtClaims>,
    req: web::Json<SeatingLayoutRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let couple = require_couple(pg_pool, &claims).await?;

    let req = req.into_inner();
    if req.name.trim().is_empty() {
        return Err(AppError::BadRequest("name is required".to_string()));
    }

    let layout =
        db::planner::insert_layout(pg_pool, couple.id, req.name.trim(), req.layout).await?;
    Success::created(layout)
}

#[put("/{layout_id}")]
async fn put_layout(
    claims: web::ReqData<JwtClaims>,
    path: web::Path<Uuid>,
    req: web::Json<SeatingLayoutRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let couple = require_couple(pg_pool, &claims).await?;

    let req = req.into_inner();
    if req.name.trim().is_empty() {
        return Err(AppError::BadRequest("name is required".to_string()));
    }

    let layout = db::planner::update_layout(
        pg_pool,
        path.into_inner(),
        couple.id,
        req.name.trim(),
        req.layout,
    )
    .await?;
    Success::ok(layout)
}

#[delete("/{layout_id}")]
async fn delete_layout(
    claims: web::ReqData<JwtClaims>,
    path: web::Path<Uuid>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let couple = require_couple(pg_pool, &claims).await?;
    db::planner::delete_layout(pg_pool, path.into_inner(), couple.id).await?;
    Success::acknowledged()
}
