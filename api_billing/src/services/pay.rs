use common::error::{AppError, Res};
use db::models::user::User;
use sqlx::PgPool;
use stripe::{
    AttachPaymentMethod, CardDetailsParams, CheckoutSession, CheckoutSessionMode, Client,
    CreateCheckoutSession, CreatePaymentMethod, CreatePaymentMethodCardUnion, Customer,
    CustomerId, CustomerInvoiceSettings, PaymentMethod, PaymentMethodTypeFilter, UpdateCustomer,
};

/// Retrieve customer object based on customer ID.
pub async fn get_customer(client: &Client, customer_id: &str) -> Res<Customer> {
    let id = customer_id.parse::<CustomerId>().map_err(|e| {
        AppError::Internal(format!(
            "Failed to parse customer id: {}. {}",
            customer_id, e
        ))
    })?;
    Customer::retrieve(client, &id, &[])
        .await
        .map_err(AppError::from)
}

/// Reuses the customer stored on the user row, creating one for accounts
/// registered before billing existed and persisting the new id.
pub async fn ensure_customer(pool: &PgPool, client: &Client, user: &User) -> Res<Customer> {
    if let Some(id) = user.stripe_customer_id.as_deref().filter(|id| !id.is_empty()) {
        return get_customer(client, id).await;
    }

    let customer = common::stripe::create_customer(client, &user.email, &user.role).await?;
    db::user::set_stripe_customer_id(pool, user.id, customer.id.as_str()).await?;
    Ok(customer)
}

/// Creates a subscription-mode checkout session for the given customer
/// and plan, with redirect urls for success and cancellation.
pub async fn create_subscription_session(
    client: &Client,
    customer: &Customer,
    price_id: &str,
    success_url: &str,
    cancel_url: &str,
) -> Res<CheckoutSession> {
    let params = CreateCheckoutSession {
        payment_method_types: Some(vec![stripe::CreateCheckoutSessionPaymentMethodTypes::Card]),
        line_items: Some(vec![stripe::CreateCheckoutSessionLineItems {
            price: Some(price_id.to_string()),
            quantity: Some(1),
            ..Default::default()
        }]),
        mode: Some(CheckoutSessionMode::Subscription),
        success_url: Some(success_url),
        cancel_url: Some(cancel_url),
        customer: Some(customer.id.clone()),
        ..Default::default()
    };
    CheckoutSession::create(client, params)
        .await
        .map_err(AppError::from)
}

/// Creates a payment method from raw card input, attaches it to the
/// customer and makes it the default for invoices. Card details are
/// forwarded to the processor and never persisted locally.
pub async fn update_default_card(
    client: &Client,
    customer_id: &str,
    card_number: &str,
    exp_month: i32,
    exp_year: i32,
    cvc: &str,
) -> Res<PaymentMethod> {
    let customer_id = customer_id.parse::<CustomerId>().map_err(|e| {
        AppError::Internal(format!(
            "Failed to parse customer id: {}. {}",
            customer_id, e
        ))
    })?;

    let params = CreatePaymentMethod {
        type_: Some(PaymentMethodTypeFilter::Card),
        card: Some(CreatePaymentMethodCardUnion::CardDetailsParams(
            CardDetailsParams {
                number: card_number.to_string(),
                exp_month,
                exp_year,
                cvc: Some(cvc.to_string()),
            },
        )),
        ..Default::default()
    };
    let method = PaymentMethod::create(client, params)
        .await
        .map_err(AppError::from)?;

    let method = PaymentMethod::attach(
        client,
        &method.id,
        AttachPaymentMethod {
            customer: customer_id.clone(),
        },
    )
    .await
    .map_err(AppError::from)?;

    let mut update = UpdateCustomer::new();
    update.invoice_settings = Some(CustomerInvoiceSettings {
        default_payment_method: Some(method.id.to_string()),
        ..Default::default()
    });
    Customer::update(client, &customer_id, update)
        .await
        .map_err(AppError::from)?;

    Ok(method)
}
