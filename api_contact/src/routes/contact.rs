use std::sync::Arc;

use actix_web::{Responder, post, web};
use common::env_config::Config;
use common::error::{AppError, Res};
use common::http::Success;

use crate::dtos::contact::ContactRequest;
use crate::services;

/// Relays a contact-form submission to the configured inbox.
///
/// Missing fields come back as a 400 with a `details` map; an upstream
/// relay failure is a 502.
#[post("")]
async fn post_contact(
    req: web::Json<ContactRequest>,
    config: web::Data<Arc<Config>>,
) -> Res<impl Responder> {
    let msg = req.validate().map_err(AppError::Validation)?;

    services::relay::forward(&config, &msg).await?;

    Success::ok(serde_json::json!({ "sent": true }))
}
