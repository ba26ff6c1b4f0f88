use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::types::JsonValue;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct SavedVendor {
    pub couple_id: Uuid,
    pub vendor_id: Uuid,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct SeatingLayout {
    pub id: Uuid,
    pub couple_id: Uuid,
    pub name: String,
    pub layout: JsonValue,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
