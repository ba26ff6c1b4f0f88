use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::types::JsonValue;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Couple {
    pub id: Uuid,
    pub user_id: Uuid,
    pub partner_one: String,
    pub partner_two: String,
    pub wedding_date: Option<NaiveDate>,
    pub budget_cents: Option<i64>,
    pub city: Option<String>,
    pub media: JsonValue,
    pub is_public: bool,
    pub onboarded: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
