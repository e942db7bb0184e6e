use anyhow::Result;
use serde_json::Value;

use super::ConfluenceClient;

impl ConfluenceClient {
    /// `restrictions` is the raw Confluence restriction payload.
    pub async fn add_page_permissions(&self, page_id: &str, restrictions: &Value) -> Result<Value> {
        self.api
            .post(
                &format!("/rest/api/content/{}/restriction", page_id),
                restrictions,
            )
            .await
    }

    pub async fn remove_page_permissions(&self, page_id: &str, restrictions: &Value) -> Result<()> {
        self.api
            .delete_with_body(
                &format!("/rest/api/content/{}/restriction", page_id),
                restrictions,
            )
            .await
            .map(|_| ())
    }

    pub async fn list_page_permissions(&self, page_id: &str) -> Result<Value> {
        self.api
            .get(&format!("/rest/api/content/{}/restriction", page_id))
            .await
    }
}
