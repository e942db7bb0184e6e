use anyhow::Result;
use serde_json::{json, Value};

use super::ConfluenceClient;

impl ConfluenceClient {
    pub async fn add_label_to_page(&self, page_id: &str, label: &str) -> Result<Value> {
        self.api
            .post(
                &format!("/rest/api/content/{}/label", page_id),
                &json!({ "name": label }),
            )
            .await
    }

    pub async fn remove_label_from_page(&self, page_id: &str, label: &str) -> Result<()> {
        self.api
            .delete_unit(&format!("/rest/api/content/{}/label/{}", page_id, label))
            .await
    }

    pub async fn list_labels_on_page(&self, page_id: &str, limit: u32) -> Result<Value> {
        self.api
            .get_with_query(
                &format!("/rest/api/content/{}/label", page_id),
                &[("limit", limit)],
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::super::client::test_support::client;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_add_label() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/rest/api/content/101/label")
                    .json_body(json!({"name": "runbook"}));
                then.status(200).json_body(json!({"results": [{"name": "runbook"}]}));
            })
            .await;

        let labels = client(&server.base_url())
            .add_label_to_page("101", "runbook")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(labels["results"][0]["name"], "runbook");
    }

    #[tokio::test]
    async fn test_remove_label() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/rest/api/content/101/label/runbook");
                then.status(204);
            })
            .await;

        client(&server.base_url())
            .remove_label_from_page("101", "runbook")
            .await
            .unwrap();
        mock.assert_async().await;
    }
}
