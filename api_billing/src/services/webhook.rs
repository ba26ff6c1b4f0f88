use common::error::{AppError, Res};
use db::models::user::User;
use sqlx::PgPool;
use stripe::{Client, Event, EventObject, EventType, Expandable, Subscription, Webhook};

use crate::services::{pay, plan};

/// Store write derived from a processor event. One explicit variant per
/// handled event type; everything else lands in `Ignore` and is
/// acknowledged without a write so the processor does not retry it.
#[derive(Debug)]
pub enum WebhookAction {
    SubscriptionUpserted(Box<Subscription>),
    SubscriptionDeleted(Box<Subscription>),
    CheckoutCompleted(String),
    InvoicePaid(String),
    Ignore(String),
}

/// Creates an event from the request payload and signature header.
/// Verification failure means no action is derived and no write happens.
pub fn construct_event(payload: &str, signature: &str, webhook_secret: &str) -> Res<Event> {
    match Webhook::construct_event(payload, signature, webhook_secret) {
        Ok(event) => Ok(event),
        Err(e) => {
            log::error!("Error constructing webhook event: {}", e);
            Err(AppError::BadRequest(format!("Webhook Error: {}", e)))
        }
    }
}

pub fn classify_event(event: Event) -> WebhookAction {
    match (event.type_, event.data.object) {
        (
            EventType::CustomerSubscriptionCreated | EventType::CustomerSubscriptionUpdated,
            EventObject::Subscription(subscription),
        ) => WebhookAction::SubscriptionUpserted(Box::new(subscription)),
        (EventType::CustomerSubscriptionDeleted, EventObject::Subscription(subscription)) => {
            WebhookAction::SubscriptionDeleted(Box::new(subscription))
        }
        (EventType::CheckoutSessionCompleted, EventObject::CheckoutSession(session)) => {
            WebhookAction::CheckoutCompleted(session.id.to_string())
        }
        (EventType::InvoicePaid, EventObject::Invoice(invoice)) => {
            WebhookAction::InvoicePaid(invoice.id.to_string())
        }
        (type_, _) => WebhookAction::Ignore(type_.to_string()),
    }
}

/// Applies the derived action to the local store. A failed write surfaces
/// as a 500; the processor's own webhook retry is the recovery path.
pub async fn apply_action(pool: &PgPool, client: &Client, action: WebhookAction) -> Res<()> {
    match action {
        WebhookAction::SubscriptionUpserted(subscription) => {
            let user = resolve_user(pool, client, &subscription).await?;
            let view = plan::map_subscription(&subscription);
            let row = plan::to_cache_row(user.id, &view);
            let period_end = row.current_period_end;

            db::subscription::upsert_subscription(pool, row).await?;
            db::vendor::set_subscription_state(pool, user.id, Some(&view.price_id), period_end)
                .await?;

            log::info!(
                "Subscription {} for user {} is now {}",
                view.id,
                user.id,
                view.status
            );
            Ok(())
        }
        WebhookAction::SubscriptionDeleted(subscription) => {
            let user = resolve_user(pool, client, &subscription).await?;

            db::subscription::delete_subscription_by_user_id(pool, user.id).await?;
            db::vendor::set_subscription_state(pool, user.id, None, None).await?;

            log::info!("Subscription {} for user {} deleted", subscription.id, user.id);
            Ok(())
        }
        WebhookAction::CheckoutCompleted(session_id) => {
            // The authoritative write arrives with the subscription events.
            log::info!("Checkout session completed: {}", session_id);
            Ok(())
        }
        WebhookAction::InvoicePaid(invoice_id) => {
            log::info!("Invoice paid: {}", invoice_id);
            Ok(())
        }
        WebhookAction::Ignore(event_type) => {
            log::info!("Unhandled event type: {}", event_type);
            Ok(())
        }
    }
}

/// Matches the local user by the processor customer's email.
async fn resolve_user(pool: &PgPool, client: &Client, subscription: &Subscription) -> Res<User> {
    let customer_id = match &subscription.customer {
        Expandable::Id(id) => id.to_string(),
        Expandable::Object(customer) => customer.id.to_string(),
    };

    let customer = pay::get_customer(client, &customer_id).await?;
    let email = customer.email.clone().ok_or_else(|| {
        AppError::Internal(format!("Customer {} has no email on record", customer_id))
    })?;

    db::user::get_user_by_email(pool, &email).await
}

#[cfg(test)]
mod tests {
    use hmac::{Hmac, Mac};
    use sha2::Sha256;

    use super::*;

    const WEBHOOK_SECRET: &str = "whsec_test_secret";

    fn event_payload(event_type: &str) -> String {
        format!(
            r#"{{
                "id": "evt_test_1",
                "object": "event",
                "api_version": "2020-08-27",
                "created": 1700000000,
                "data": {{
                    "object": {{
                        "id": "cus_test_1",
                        "object": "customer",
                        "email": "pair@example.com",
                        "livemode": false
                    }}
                }},
                "livemode": false,
                "pending_webhooks": 0,
                "request": null,
                "type": "{event_type}"
            }}"#
        )
    }

    fn sign(payload: &str, secret: &str, timestamp: i64) -> String {
        let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(format!("{}.{}", timestamp, payload).as_bytes());
        let digest = hex::encode(mac.finalize().into_bytes());
        format!("t={},v1={}", timestamp, digest)
    }

    fn unix_now() -> i64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs() as i64
    }

    #[test]
    fn valid_signature_constructs_the_event() {
        let payload = event_payload("customer.created");
        let signature = sign(&payload, WEBHOOK_SECRET, unix_now());

        let event = construct_event(&payload, &signature, WEBHOOK_SECRET).unwrap();
        assert_eq!(event.type_, EventType::CustomerCreated);
    }

    #[test]
    fn wrong_secret_is_rejected_with_bad_request() {
        let payload = event_payload("customer.created");
        let signature = sign(&payload, "whsec_other_secret", unix_now());

        let result = construct_event(&payload, &signature, WEBHOOK_SECRET);
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let payload = event_payload("customer.created");
        let signature = sign(&payload, WEBHOOK_SECRET, unix_now());
        let tampered = payload.replace("pair@example.com", "other@example.com");

        assert!(construct_event(&tampered, &signature, WEBHOOK_SECRET).is_err());
    }

    #[test]
    fn unrecognized_event_type_maps_to_ignore() {
        let payload = event_payload("customer.created");
        let event: Event = serde_json::from_str(&payload).unwrap();

        match classify_event(event) {
            WebhookAction::Ignore(event_type) => assert_eq!(event_type, "customer.created"),
            other => panic!("expected Ignore, got {:?}", other),
        }
    }
}
