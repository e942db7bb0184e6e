use anyhow::Result;
use serde_json::{json, Value};

use super::JiraClient;
use crate::http::field_or_empty;

const WEBHOOKS_PATH: &str = "/rest/webhooks/1.0/webhook";

impl JiraClient {
    /// `events` are Jira event names such as `jira:issue_created`.
    pub async fn create_webhook(&self, name: &str, url: &str, events: &[&str]) -> Result<Value> {
        let body = json!({
            "name": name,
            "url": url,
            "events": events
        });

        self.api.post(WEBHOOKS_PATH, &body).await
    }

    pub async fn read_webhook(&self, webhook_id: u64) -> Result<Value> {
        self.api
            .get(&format!("{}/{}", WEBHOOKS_PATH, webhook_id))
            .await
    }

    pub async fn update_webhook(
        &self,
        webhook_id: u64,
        name: &str,
        url: &str,
        events: &[&str],
    ) -> Result<Value> {
        let body = json!({
            "name": name,
            "url": url,
            "events": events
        });

        self.api
            .put(&format!("{}/{}", WEBHOOKS_PATH, webhook_id), &body)
            .await
    }

    pub async fn delete_webhook(&self, webhook_id: u64) -> Result<()> {
        self.api
            .delete_unit(&format!("{}/{}", WEBHOOKS_PATH, webhook_id))
            .await
    }

    /// The webhook endpoint answers with a bare array.
    pub async fn list_all_webhooks(&self) -> Result<Value> {
        let body = self.api.get(WEBHOOKS_PATH).await?;
        Ok(field_or_empty(body, "values"))
    }
}
