use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::types::JsonValue;
use uuid::Uuid;

/// Server-persisted onboarding wizard draft. `data` holds the entered
/// field values verbatim so a reload restores the form unchanged.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct OnboardingDraft {
    pub user_id: Uuid,
    pub role: String,
    pub step: i32,
    pub data: JsonValue,
    pub updated_at: NaiveDateTime,
}
