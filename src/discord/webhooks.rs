use anyhow::Result;
use serde_json::{json, Value};

use super::DiscordClient;

impl DiscordClient {
    pub async fn create_webhook(
        &self,
        channel_id: &str,
        name: &str,
        avatar: &str,
    ) -> Result<Value> {
        self.api
            .post(
                &format!("/channels/{}/webhooks", channel_id),
                &json!({ "name": name, "avatar": avatar }),
            )
            .await
    }

    pub async fn get_webhook_details(&self, webhook_id: &str) -> Result<Value> {
        self.api.get(&format!("/webhooks/{}", webhook_id)).await
    }

    pub async fn update_webhook(
        &self,
        webhook_id: &str,
        name: &str,
        avatar: &str,
    ) -> Result<Value> {
        self.api
            .patch(
                &format!("/webhooks/{}", webhook_id),
                &json!({ "name": name, "avatar": avatar }),
            )
            .await
    }

    pub async fn delete_webhook(&self, webhook_id: &str) -> Result<Value> {
        self.api.delete(&format!("/webhooks/{}", webhook_id)).await
    }

    pub async fn list_all_webhooks(&self, guild_id: &str) -> Result<Value> {
        self.api.get(&format!("/guilds/{}/webhooks", guild_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::client::test_support::client;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_webhook() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/channels/c1/webhooks")
                    .json_body(json!({"name": "ci", "avatar": ""}));
                then.status(200).json_body(json!({"id": "w1", "token": "secret"}));
            })
            .await;

        let hook = client(&server.base_url())
            .create_webhook("c1", "ci", "")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(hook["id"], "w1");
    }

    #[tokio::test]
    async fn test_list_all_webhooks_transport_failure() {
        let err = client("http://127.0.0.1:1")
            .list_all_webhooks("g1")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to send request to Discord"));
    }
}
