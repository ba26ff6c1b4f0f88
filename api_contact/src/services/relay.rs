use common::env_config::Config;
use common::error::{AppError, Res};
use serde_json::json;

use crate::dtos::contact::ContactMessage;

/// Forwards the submission to the transactional email API and, when one
/// is configured, the workflow-automation webhook.
pub async fn forward(config: &Config, msg: &ContactMessage) -> Res<()> {
    let client = reqwest::Client::new();

    send_email(config, &client, msg).await?;

    if !config.contact_forward_url.is_empty() {
        // The webhook is a side channel; its failure doesn't lose the
        // message, which already went out by email.
        if let Err(e) = forward_to_webhook(config, &client, msg).await {
            log::warn!("Contact webhook forward failed: {}", e);
        }
    }

    Ok(())
}

async fn send_email(config: &Config, client: &reqwest::Client, msg: &ContactMessage) -> Res<()> {
    let body = json!({
        "from": config.email_from,
        "to": [config.contact_inbox],
        "reply_to": msg.email,
        "subject": format!("[Contact] {}", msg.subject),
        "text": format!("From: {} <{}>\n\n{}", msg.name, msg.email, msg.message),
    });

    let response = client
        .post(&config.email_api_url)
        .bearer_auth(&config.email_api_key)
        .json(&body)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let detail = response.text().await.unwrap_or_default();
        log::error!("Email relay returned {}: {}", status, detail);
        return Err(AppError::Upstream(format!(
            "Email relay returned {}",
            status
        )));
    }

    Ok(())
}

async fn forward_to_webhook(
    config: &Config,
    client: &reqwest::Client,
    msg: &ContactMessage,
) -> Res<()> {
    let body = json!({
        "name": msg.name,
        "email": msg.email,
        "subject": msg.subject,
        "message": msg.message,
    });

    let response = client
        .post(&config.contact_forward_url)
        .json(&body)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(AppError::Upstream(format!(
            "Contact webhook returned {}",
            response.status()
        )));
    }

    Ok(())
}
