use std::time::Duration;

use anyhow::{bail, Result};
use serde::Serialize;
use serde_json::Value;

use crate::http::{create_authenticated_client, ApiClient, AuthType};

pub const SLACK_API_URL: &str = "https://slack.com/api";

/// Slack Web API client.
///
/// Slack answers most failures with HTTP 200 and `{"ok": false, "error": ...}`.
/// Those bodies are handed back as-is; only transport errors and non-2xx
/// statuses become `Err`.
pub struct SlackClient {
    pub(super) api: ApiClient,
}

impl SlackClient {
    pub fn new(token: &str) -> Result<Self> {
        Self::with_base_url(SLACK_API_URL, token, None)
    }

    pub fn with_base_url(base_url: &str, token: &str, timeout: Option<Duration>) -> Result<Self> {
        let client = create_authenticated_client(AuthType::Bearer(token), None, timeout)?;

        Ok(Self {
            api: ApiClient::new(client, base_url, "Slack"),
        })
    }

    /// POST a JSON body to a Web API method such as `chat.update`.
    pub(super) async fn call<B: Serialize + ?Sized>(
        &self,
        method: &str,
        body: &B,
    ) -> Result<Value> {
        self.api.post(&format!("/{}", method), body).await
    }

    /// GET a Web API method with query arguments.
    pub(super) async fn read<Q: Serialize + ?Sized>(
        &self,
        method: &str,
        query: &Q,
    ) -> Result<Value> {
        self.api.get_with_query(&format!("/{}", method), query).await
    }

    pub async fn test_connection(&self) -> Result<()> {
        let body = self.api.get("/auth.test").await?;

        if body.get("ok").and_then(Value::as_bool) != Some(true) {
            let reason = body
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("unknown error");
            bail!("Slack auth.test failed: {}", reason);
        }

        Ok(())
    }
}
