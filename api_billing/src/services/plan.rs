use chrono::DateTime;
use common::error::{AppError, Res};
use db::dtos::subscription::SubscriptionUpsert;
use stripe::generated::billing::subscription::SubscriptionProrationBehavior;
use stripe::{
    Client, Expandable, ListPrices, ListSubscriptions, Price, PriceId, Subscription,
    SubscriptionId, UpdateSubscription, UpdateSubscriptionItems,
};
use uuid::Uuid;

use crate::models::sub::{SubscriptionPlan, UserSubscription};

/// Local status written when the user has asked to cancel at period end.
pub const STATUS_PENDING_CANCELLATION: &str = "pending_cancellation";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanChange {
    Upgrade,
    Downgrade,
}

impl PlanChange {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanChange::Upgrade => "upgrade",
            PlanChange::Downgrade => "downgrade",
        }
    }
}

/// A strictly greater price is an upgrade and prorates immediately;
/// everything else, a lateral move included, applies at period end.
/// The prices compared are the listed unit amounts for the current
/// billing interval.
pub fn classify_change(current_unit_amount: i64, candidate_unit_amount: i64) -> PlanChange {
    if candidate_unit_amount > current_unit_amount {
        PlanChange::Upgrade
    } else {
        PlanChange::Downgrade
    }
}

/// Display-only estimate of the immediate charge for an upgrade: the
/// price difference scaled by the unexpired fraction of the current
/// period. Downgrades owe nothing now. The processor's invoice is the
/// authoritative amount.
pub fn estimate_due_now_cents(
    current_unit_amount: i64,
    candidate_unit_amount: i64,
    period_start: i64,
    period_end: i64,
    now: i64,
) -> i64 {
    if candidate_unit_amount <= current_unit_amount {
        return 0;
    }
    let span = period_end - period_start;
    if span <= 0 {
        return 0;
    }
    let remaining = (period_end - now).clamp(0, span);
    let difference = (candidate_unit_amount - current_unit_amount) as f64;
    (difference * remaining as f64 / span as f64).round() as i64
}

/// Catalog of active recurring prices with their products expanded.
pub async fn get_subscription_plans(client: &Client) -> Res<Vec<SubscriptionPlan>> {
    let params = ListPrices {
        active: Some(true),
        limit: Some(100),
        expand: &["data.product"],
        ..Default::default()
    };

    let prices = Price::list(client, &params).await.map_err(AppError::from)?;

    let plans = prices
        .data
        .into_iter()
        .filter_map(|price| {
            if price.type_ != Some(stripe::PriceType::Recurring) {
                return None;
            }

            let product = match price.product {
                Some(Expandable::Object(prod)) if prod.active.unwrap_or(false) => prod,
                _ => return None,
            };

            let recurring = price.recurring?;

            let features: Option<Vec<String>> = product
                .metadata
                .clone()
                .unwrap_or_default()
                .get("features")
                .and_then(|s| serde_json::from_str(s).ok());

            Some(SubscriptionPlan {
                id: price.id.to_string(),
                name: product.name.clone().unwrap_or_default(),
                description: product.description.clone().unwrap_or_default(),
                price: price.unit_amount.unwrap_or(0),
                currency: price.currency.unwrap_or_default().to_string(),
                interval: recurring.interval.to_string(),
                features,
            })
        })
        .collect();

    Ok(plans)
}

/// Listed unit amount of a single price, for comparing the candidate
/// plan against the current one.
pub async fn get_price_amount(client: &Client, price_id: &str) -> Res<i64> {
    let id = price_id
        .parse::<PriceId>()
        .map_err(|e| AppError::BadRequest(format!("Invalid price ID: {}", e)))?;
    let price = Price::retrieve(client, &id, &[])
        .await
        .map_err(AppError::from)?;
    Ok(price.unit_amount.unwrap_or(0))
}

/// Gets the customer's subscription from the processor.
/// Returns None if the customer is not subscribed to any plan.
pub async fn get_user_subscription(
    client: &Client,
    customer_id: &str,
) -> Res<Option<UserSubscription>> {
    let customer_id = customer_id
        .parse::<stripe::CustomerId>()
        .map_err(|e| AppError::Internal(format!("Invalid customer ID: {}", e)))?;

    let subscriptions = Subscription::list(
        client,
        &ListSubscriptions {
            customer: Some(customer_id),
            limit: Some(1),
            ..Default::default()
        },
    )
    .await
    .map_err(AppError::from)?;

    Ok(subscriptions.data.first().map(map_subscription))
}

/// Moves the subscription item to the new price. Upgrades invoice the
/// proration immediately; downgrades carry no proration and take effect
/// at period end.
pub async fn change_plan(
    client: &Client,
    current: &UserSubscription,
    price_id: &str,
    change: PlanChange,
) -> Res<UserSubscription> {
    let sub_id = current
        .id
        .parse::<SubscriptionId>()
        .map_err(|e| AppError::BadRequest(format!("Invalid subscription ID: {}", e)))?;

    let mut params = UpdateSubscription::new();
    params.items = Some(vec![UpdateSubscriptionItems {
        id: Some(current.item_id.clone()),
        price: Some(price_id.to_string()),
        ..Default::default()
    }]);
    params.proration_behavior = Some(match change {
        PlanChange::Upgrade => SubscriptionProrationBehavior::AlwaysInvoice,
        PlanChange::Downgrade => SubscriptionProrationBehavior::None,
    });

    let subscription = Subscription::update(client, &sub_id, params)
        .await
        .map_err(AppError::from)?;
    Ok(map_subscription(&subscription))
}

/// Flags the subscription for cancellation at period end. The plan stays
/// active until then.
pub async fn cancel_at_period_end(
    client: &Client,
    subscription_id: &str,
) -> Res<UserSubscription> {
    let sub_id = subscription_id
        .parse::<SubscriptionId>()
        .map_err(|e| AppError::BadRequest(format!("Invalid subscription ID: {}", e)))?;

    let mut params = UpdateSubscription::new();
    params.cancel_at_period_end = Some(true);

    let subscription = Subscription::update(client, &sub_id, params)
        .await
        .map_err(AppError::from)?;
    Ok(map_subscription(&subscription))
}

pub(crate) fn map_subscription(sub: &Subscription) -> UserSubscription {
    let item = sub.items.data.first();
    let price = item.and_then(|i| i.price.as_ref());

    UserSubscription {
        id: sub.id.to_string(),
        customer_id: match &sub.customer {
            Expandable::Id(id) => id.to_string(),
            Expandable::Object(customer) => customer.id.to_string(),
        },
        item_id: item.map(|i| i.id.to_string()).unwrap_or_default(),
        price_id: price.map(|p| p.id.to_string()).unwrap_or_default(),
        unit_amount: price.and_then(|p| p.unit_amount).unwrap_or(0),
        status: if sub.cancel_at_period_end {
            STATUS_PENDING_CANCELLATION.to_string()
        } else {
            sub.status.to_string()
        },
        interval: price
            .and_then(|p| p.recurring.as_ref())
            .map(|r| r.interval.to_string())
            .unwrap_or_default(),
        current_period_start: sub.current_period_start,
        current_period_end: sub.current_period_end,
        cancel_at_period_end: sub.cancel_at_period_end,
    }
}

/// Converts the processor view into the local cache row shape.
pub fn to_cache_row(user_id: Uuid, sub: &UserSubscription) -> SubscriptionUpsert {
    SubscriptionUpsert {
        user_id,
        stripe_customer_id: sub.customer_id.clone(),
        stripe_subscription_id: sub.id.clone(),
        plan_id: sub.price_id.clone(),
        status: sub.status.clone(),
        billing_interval: sub.interval.clone(),
        cancel_at_period_end: sub.cancel_at_period_end,
        current_period_end: DateTime::from_timestamp(sub.current_period_end, 0)
            .map(|dt| dt.naive_utc()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_price_is_an_upgrade() {
        // $29/mo -> $59/mo
        assert_eq!(classify_change(2900, 5900), PlanChange::Upgrade);
    }

    #[test]
    fn lower_price_is_a_downgrade() {
        // $59/mo -> $29/mo
        assert_eq!(classify_change(5900, 2900), PlanChange::Downgrade);
    }

    #[test]
    fn equal_price_is_treated_as_downgrade() {
        assert_eq!(classify_change(2900, 2900), PlanChange::Downgrade);
    }

    #[test]
    fn estimate_scales_difference_by_remaining_fraction() {
        // Halfway through the period, half the difference is due.
        let start = 1_000_000;
        let end = start + 1_000;
        let now = start + 500;
        assert_eq!(estimate_due_now_cents(2900, 5900, start, end, now), 1500);
    }

    #[test]
    fn estimate_is_zero_for_downgrades() {
        assert_eq!(estimate_due_now_cents(5900, 2900, 0, 1_000, 500), 0);
    }

    #[test]
    fn estimate_is_zero_after_period_end() {
        assert_eq!(estimate_due_now_cents(2900, 5900, 0, 1_000, 2_000), 0);
    }

    #[test]
    fn estimate_caps_at_full_difference_before_period_start() {
        // A clock skewed before period start never charges more than the
        // whole difference.
        assert_eq!(estimate_due_now_cents(2900, 5900, 1_000, 2_000, 0), 3000);
    }
}
