use chrono::NaiveDateTime;
use uuid::Uuid;

pub struct SubscriptionUpsert {
    pub user_id: Uuid,
    pub stripe_customer_id: String,
    pub stripe_subscription_id: String,
    pub plan_id: String,
    pub status: String,
    pub billing_interval: String,
    pub cancel_at_period_end: bool,
    pub current_period_end: Option<NaiveDateTime>,
}
