use anyhow::Result;
use serde_json::Value;

use super::ConfluenceClient;

impl ConfluenceClient {
    pub async fn create_webhook(&self, webhook: &Value) -> Result<Value> {
        self.api.post("/rest/api/webhook", webhook).await
    }

    pub async fn delete_webhook(&self, webhook_id: &str) -> Result<()> {
        self.api
            .delete_unit(&format!("/rest/api/webhook/{}", webhook_id))
            .await
    }

    pub async fn list_all_webhooks(&self) -> Result<Value> {
        self.api.get("/rest/api/webhook").await
    }
}

#[cfg(test)]
mod tests {
    use super::super::client::test_support::client;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_webhook() {
        let hook = json!({
            "name": "ci",
            "url": "https://ci.example.com/hook",
            "events": ["page_created"]
        });

        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/rest/api/webhook").json_body(hook.clone());
                then.status(201).json_body(json!({"id": 7}));
            })
            .await;

        let created = client(&server.base_url()).create_webhook(&hook).await.unwrap();

        mock.assert_async().await;
        assert_eq!(created["id"], 7);
    }

    #[tokio::test]
    async fn test_delete_webhook() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/rest/api/webhook/7");
                then.status(204);
            })
            .await;

        client(&server.base_url()).delete_webhook("7").await.unwrap();
        mock.assert_async().await;
    }
}
