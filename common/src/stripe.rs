use std::collections::HashMap;

use stripe::{Client, CreateCustomer, Customer};

use crate::error::{AppError, Res};

pub fn create_client(secret_key: &str) -> Client {
    Client::new(secret_key)
}

/// Creates the billing customer for a marketplace account. The account
/// role travels as metadata so processor-side records can be traced
/// back to a vendor or couple.
pub async fn create_customer(client: &Client, email: &str, role: &str) -> Res<Customer> {
    let params = CreateCustomer {
        email: Some(email),
        metadata: Some(HashMap::from([("role".to_string(), role.to_string())])),
        ..Default::default()
    };

    Customer::create(client, params)
        .await
        .map_err(AppError::from)
}
