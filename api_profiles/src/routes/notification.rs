use std::sync::Arc;

use actix_web::{Responder, get, put, web};
use common::error::Res;
use common::http::Success;
use common::jwt::JwtClaims;
use sqlx::PgPool;

use crate::dtos::notification::NotificationPrefsRequest;

/// Returns the stored notification preferences; accounts that never
/// saved any get the all-on defaults.
#[get("")]
async fn get_preferences(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let prefs = db::notification::get_preferences(pg_pool, claims.user_id).await?;

    match prefs {
        Some(prefs) => Success::ok(serde_json::json!({
            "email_messages": prefs.email_messages,
            "email_reviews": prefs.email_reviews,
            "email_billing": prefs.email_billing,
        })),
        None => Success::ok(serde_json::json!({
            "email_messages": true,
            "email_reviews": true,
            "email_billing": true,
        })),
    }
}

#[put("")]
async fn put_preferences(
    claims: web::ReqData<JwtClaims>,
    req: web::Json<NotificationPrefsRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let prefs = db::notification::upsert_preferences(
        pg_pool,
        claims.user_id,
        req.email_messages,
        req.email_reviews,
        req.email_billing,
    )
    .await?;
    Success::ok(prefs)
}
