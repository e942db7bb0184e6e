use anyhow::Result;
use serde_json::{json, Value};

use super::SlackClient;

impl SlackClient {
    /// `time` accepts a Unix timestamp or natural language such as `in 15 minutes`.
    pub async fn create_reminder(&self, text: &str, time: &str, user_id: &str) -> Result<Value> {
        self.call(
            "reminders.add",
            &json!({ "text": text, "time": time, "user": user_id }),
        )
        .await
    }

    pub async fn delete_reminder(&self, reminder_id: &str) -> Result<Value> {
        self.call("reminders.delete", &json!({ "reminder": reminder_id }))
            .await
    }

    pub async fn list_reminders(&self) -> Result<Value> {
        self.api.get("/reminders.list").await
    }
}

#[cfg(test)]
mod tests {
    use super::super::client::test_support::client;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_reminder() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/reminders.add").json_body(json!({
                    "text": "Review release notes",
                    "time": "in 15 minutes",
                    "user": "W123"
                }));
                then.status(200)
                    .json_body(json!({"ok": true, "reminder": {"id": "Rm12345678"}}));
            })
            .await;

        let result = client(&server.base_url())
            .create_reminder("Review release notes", "in 15 minutes", "W123")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(result["reminder"]["id"], "Rm12345678");
    }
}
