use db::models::subscription::SubscriptionRecord;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::sub::{SubscriptionPlan, UserSubscription};

#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub price_id: String,
    /// Redirect targets; default to the web app's billing pages.
    pub success_url: Option<String>,
    pub cancel_url: Option<String>,
}

/// Pre-auth checkout funnel payload. Every field arrives optional so the
/// handler can flag all missing ones in a single response.
#[derive(Debug, Default, Deserialize)]
pub struct PublicCheckoutRequest {
    pub price_id: Option<String>,
    pub user_id: Option<Uuid>,
    pub email: Option<String>,
}

impl PublicCheckoutRequest {
    /// Returns the validated fields, or a `details` map whose keys are
    /// exactly the missing fields, each flagged `true`.
    pub fn validate(&self) -> Result<(String, Uuid, String), serde_json::Value> {
        let mut details = serde_json::Map::new();

        let price_id = self.price_id.as_deref().map(str::trim).filter(|s| !s.is_empty());
        if price_id.is_none() {
            details.insert("price_id".to_string(), serde_json::Value::Bool(true));
        }
        if self.user_id.is_none() {
            details.insert("user_id".to_string(), serde_json::Value::Bool(true));
        }
        let email = self.email.as_deref().map(str::trim).filter(|s| !s.is_empty());
        if email.is_none() {
            details.insert("email".to_string(), serde_json::Value::Bool(true));
        }

        if !details.is_empty() {
            return Err(serde_json::Value::Object(details));
        }

        Ok((
            price_id.unwrap_or_default().to_string(),
            self.user_id.unwrap_or_default(),
            email.unwrap_or_default().to_string(),
        ))
    }
}

#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub session_id: String,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct SubscriptionPlansResponse {
    pub plans: Vec<SubscriptionPlan>,
}

#[derive(Debug, Serialize)]
pub struct SubscriptionDetailResponse {
    pub subscription: UserSubscription,
    /// Local cache row; can lag behind the processor until the next
    /// webhook delivery.
    pub cached: Option<SubscriptionRecord>,
}

#[derive(Debug, Deserialize)]
pub struct PlanChangeRequest {
    pub price_id: String,
}

#[derive(Debug, Serialize)]
pub struct PlanChangeResponse {
    pub subscription: UserSubscription,
    /// "upgrade" or "downgrade".
    pub change: String,
    /// Display-only estimate computed from the unexpired fraction of the
    /// billing period. The processor's invoice is the authoritative
    /// amount.
    pub estimated_due_now_cents: i64,
}

#[derive(Debug, Serialize)]
pub struct CancelResponse {
    pub subscription: UserSubscription,
}

#[derive(Debug, Deserialize)]
pub struct PaymentMethodRequest {
    pub card_number: String,
    pub exp_month: i32,
    pub exp_year: i32,
    pub cvc: String,
}

#[derive(Debug, Serialize)]
pub struct PaymentMethodResponse {
    pub payment_method_id: String,
    pub last4: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_passes_complete_request() {
        let req = PublicCheckoutRequest {
            price_id: Some("price_123".to_string()),
            user_id: Some(Uuid::new_v4()),
            email: Some("pair@example.com".to_string()),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn validate_flags_exactly_the_missing_fields() {
        let req = PublicCheckoutRequest {
            price_id: None,
            user_id: Some(Uuid::new_v4()),
            email: None,
        };
        let details = req.validate().unwrap_err();
        let details = details.as_object().unwrap();
        assert_eq!(details.len(), 2);
        assert_eq!(details["price_id"], true);
        assert_eq!(details["email"], true);
        assert!(!details.contains_key("user_id"));
    }

    #[test]
    fn validate_treats_blank_strings_as_missing() {
        let req = PublicCheckoutRequest {
            price_id: Some("  ".to_string()),
            user_id: None,
            email: Some(String::new()),
        };
        let details = req.validate().unwrap_err();
        let details = details.as_object().unwrap();
        assert_eq!(details.len(), 3);
        assert_eq!(details["price_id"], true);
        assert_eq!(details["user_id"], true);
        assert_eq!(details["email"], true);
    }
}
