use anyhow::{Context, Result};
use serde_json::json;

use crate::http::{send_unit, USER_AGENT};

/// Post `text` to an incoming-webhook URL. The URL carries its own secret, so
/// no bot token is sent; Slack answers with a plain-text `ok`.
pub async fn send_webhook_message(webhook_url: &str, text: &str) -> Result<()> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to create HTTP client")?;

    tracing::debug!("Slack webhook POST");

    send_unit(client.post(webhook_url).json(&json!({ "text": text })), "Slack").await
}
