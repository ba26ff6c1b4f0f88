use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::types::JsonValue;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct VendorActivity {
    pub id: Uuid,
    pub vendor_id: Uuid,
    pub activity: String,
    pub metadata: JsonValue,
    pub created_at: NaiveDateTime,
}

/// One row of the grouped metrics query.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct ActivityCount {
    pub activity: String,
    pub count: i64,
}
