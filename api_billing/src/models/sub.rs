use serde::{Deserialize, Serialize};

/// One subscription tier as listed by the processor: an active recurring
/// price joined with its product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionPlan {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub currency: String,
    pub interval: String,
    pub features: Option<Vec<String>>,
}

/// Processor-side view of a customer's subscription. This is the
/// authoritative billing state; the `subscriptions` table row is a
/// best-effort cache of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSubscription {
    pub id: String,
    pub customer_id: String,
    pub item_id: String,
    pub price_id: String,
    pub unit_amount: i64,
    pub status: String,
    pub interval: String,
    pub current_period_start: i64,
    pub current_period_end: i64,
    pub cancel_at_period_end: bool,
}
