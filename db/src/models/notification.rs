use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct NotificationPreferences {
    pub user_id: Uuid,
    pub email_messages: bool,
    pub email_reviews: bool,
    pub email_billing: bool,
    pub updated_at: NaiveDateTime,
}
