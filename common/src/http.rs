use actix_web::{HttpResponse, Responder};
use serde::Serialize;

use super::error::Res;

pub struct Success;
impl Success {
    pub fn ok<T: Serialize>(body: T) -> Res<impl Responder> {
        Ok(HttpResponse::Ok().json(body))
    }
    pub fn created<T: Serialize>(body: T) -> Res<impl Responder> {
        Ok(HttpResponse::Created().json(body))
    }
    /// Body for deletes and other calls whose only payload is "it worked".
    pub fn acknowledged() -> Res<impl Responder> {
        Ok(HttpResponse::Ok().json(serde_json::json!({ "ok": true })))
    }
}
