use std::sync::Arc;

use actix_web::{Responder, get, post, web};
use chrono::Utc;
use common::env_config::Config;
use common::error::{AppError, Res};
use common::http::Success;
use common::jwt::JwtClaims;
use sqlx::PgPool;

use crate::dtos::billing::{
    CancelResponse, PaymentMethodRequest, PaymentMethodResponse, PlanChangeRequest,
    PlanChangeResponse, SubscriptionDetailResponse, SubscriptionPlansResponse,
};
use crate::services;
use crate::services::plan::STATUS_PENDING_CANCELLATION;

/// Retrieves all available subscription plans from the processor.
#[get("/plans")]
async fn get_plans(config: web::Data<Arc<Config>>) -> Res<impl Responder> {
    let client = common::stripe::create_client(&config.stripe_secret_key);
    let plans = services::plan::get_subscription_plans(&client).await?;
    Success::ok(SubscriptionPlansResponse { plans })
}

/// Current subscription detail: the processor's state plus the local
/// cache row, which can lag behind it.
#[get("/subscription")]
async fn get_subscription(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
    config: web::Data<Arc<Config>>,
) -> Res<impl Responder> {
    claims.require_role("vendor")?;

    let client = common::stripe::create_client(&config.stripe_secret_key);
    let subscription = services::plan::get_user_subscription(&client, &claims.stripe_customer_id)
        .await?
        .ok_or_else(|| AppError::NotFound("No active subscription found".to_string()))?;

    let pg_pool: &PgPool = &**pool;
    let cached = db::subscription::get_subscription_by_user_id(pg_pool, claims.user_id).await?;

    Success::ok(SubscriptionDetailResponse { subscription, cached })
}

/// Moves the current subscription to a new plan.
///
/// The candidate price is compared against the current one: strictly
/// greater classifies as an upgrade and prorates immediately, otherwise
/// as a downgrade applied at period end. The returned
/// `estimated_due_now_cents` is a display-only approximation; the
/// processor decides the actual proration.
#[post("/plan")]
async fn post_change_plan(
    claims: web::ReqData<JwtClaims>,
    req: web::Json<PlanChangeRequest>,
    pool: web::Data<Arc<PgPool>>,
    config: web::Data<Arc<Config>>,
) -> Res<impl Responder> {
    claims.require_role("vendor")?;

    if req.price_id.trim().is_empty() {
        return Err(AppError::BadRequest("price_id is required".to_string()));
    }

    let client = common::stripe::create_client(&config.stripe_secret_key);
    let current = services::plan::get_user_subscription(&client, &claims.stripe_customer_id)
        .await?
        .ok_or_else(|| AppError::NotFound("No active subscription found".to_string()))?;

    if current.price_id == req.price_id {
        return Err(AppError::BadRequest(
            "Already subscribed to this plan".to_string(),
        ));
    }

    let candidate_amount = services::plan::get_price_amount(&client, &req.price_id).await?;
    let change = services::plan::classify_change(current.unit_amount, candidate_amount);
    let estimated_due_now_cents = services::plan::estimate_due_now_cents(
        current.unit_amount,
        candidate_amount,
        current.current_period_start,
        current.current_period_end,
        Utc::now().timestamp(),
    );

    let subscription = services::plan::change_plan(&client, &current, &req.price_id, change).await?;

    // Best-effort cache write after the processor call; the next webhook
    // reconciles any divergence.
    let pg_pool: &PgPool = &**pool;
    let row = services::plan::to_cache_row(claims.user_id, &subscription);
    let period_end = row.current_period_end;
    db::subscription::upsert_subscription(pg_pool, row).await?;
    db::vendor::set_subscription_state(
        pg_pool,
        claims.user_id,
        Some(&subscription.price_id),
        period_end,
    )
    .await?;

    Success::ok(PlanChangeResponse {
        subscription,
        change: change.as_str().to_string(),
        estimated_due_now_cents,
    })
}

/// Flags the subscription for cancellation at the end of the paid period.
#[post("/cancel")]
async fn post_cancel(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
    config: web::Data<Arc<Config>>,
) -> Res<impl Responder> {
    claims.require_role("vendor")?;

    let client = common::stripe::create_client(&config.stripe_secret_key);
    let current = services::plan::get_user_subscription(&client, &claims.stripe_customer_id)
        .await?
        .ok_or_else(|| AppError::NotFound("No active subscription found".to_string()))?;

    if current.status == STATUS_PENDING_CANCELLATION {
        return Err(AppError::Conflict(
            "Subscription is already pending cancellation".to_string(),
        ));
    }

    let subscription = services::plan::cancel_at_period_end(&client, &current.id).await?;

    let pg_pool: &PgPool = &**pool;
    let row = services::plan::to_cache_row(claims.user_id, &subscription);
    db::subscription::upsert_subscription(pg_pool, row).await?;

    Success::ok(CancelResponse { subscription })
}

/// Replaces the default card on file. The card details go straight to
/// the processor; nothing about them is stored locally.
#[post("/payment-method")]
async fn post_payment_method(
    claims: web::ReqData<JwtClaims>,
    req: web::Json<PaymentMethodRequest>,
    config: web::Data<Arc<Config>>,
) -> Res<impl Responder> {
    claims.require_role("vendor")?;

    if claims.stripe_customer_id.is_empty() {
        return Err(AppError::BadRequest(
            "No billing customer exists for this account".to_string(),
        ));
    }

    let client = common::stripe::create_client(&config.stripe_secret_key);
    let method = services::pay::update_default_card(
        &client,
        &claims.stripe_customer_id,
        &req.card_number,
        req.exp_month,
        req.exp_year,
        &req.cvc,
    )
    .await?;

    Success::ok(PaymentMethodResponse {
        payment_method_id: method.id.to_string(),
        last4: method.card.as_ref().map(|card| card.last4.clone()),
    })
}
