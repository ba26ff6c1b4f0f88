use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::types::JsonValue;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Vendor {
    pub id: Uuid,
    pub user_id: Uuid,
    pub business_name: String,
    pub category: String,
    pub city: String,
    pub region: Option<String>,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    /// Ordered list of media references (hosted storage URLs).
    pub media: JsonValue,
    pub subscription_plan: Option<String>,
    pub subscription_end_date: Option<NaiveDateTime>,
    pub onboarded: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
