use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Local cache of processor-side subscription state, keyed by user.
/// The processor subscription id is the authoritative identifier; these
/// fields can lag behind until the next webhook delivery.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct SubscriptionRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub stripe_customer_id: String,
    pub stripe_subscription_id: String,
    pub plan_id: String,
    pub status: String,
    pub billing_interval: String,
    pub cancel_at_period_end: bool,
    pub current_period_end: Option<NaiveDateTime>,
    pub updated_at: NaiveDateTime,
}
