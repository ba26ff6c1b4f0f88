use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const LINK_STATUS_PENDING: &str = "pending";
pub const LINK_STATUS_COMPLETED: &str = "completed";

/// Single-use invitation token gating one review submission.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct ReviewLink {
    pub id: Uuid,
    pub vendor_id: Uuid,
    pub token: String,
    pub recipient_email: String,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub completed_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,
    pub vendor_id: Uuid,
    pub link_id: Uuid,
    pub reviewer_name: String,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: NaiveDateTime,
}
