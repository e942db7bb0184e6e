use anyhow::Result;
use serde_json::{json, Value};

use super::ConfluenceClient;

/// Body in Confluence storage (XHTML) representation.
pub(super) fn storage_body(content: &str) -> Value {
    json!({
        "storage": {
            "value": content,
            "representation": "storage"
        }
    })
}

impl ConfluenceClient {
    pub async fn create_page(&self, space_key: &str, title: &str, content: &str) -> Result<Value> {
        let body = json!({
            "type": "page",
            "title": title,
            "space": { "key": space_key },
            "body": storage_body(content)
        });

        self.api.post("/rest/api/content", &body).await
    }

    pub async fn read_page(&self, page_id: &str) -> Result<Value> {
        self.api
            .get(&format!("/rest/api/content/{}", page_id))
            .await
    }

    /// Replace a page's title and body. `version` is the page's current version number.
    pub async fn update_page(
        &self,
        page_id: &str,
        version: u64,
        title: &str,
        content: &str,
    ) -> Result<Value> {
        let body = json!({
            "version": { "number": version + 1 },
            "title": title,
            "type": "page",
            "body": storage_body(content)
        });

        self.api
            .put(&format!("/rest/api/content/{}", page_id), &body)
            .await
    }

    pub async fn delete_page(&self, page_id: &str) -> Result<()> {
        self.api
            .delete_unit(&format!("/rest/api/content/{}", page_id))
            .await
    }

    pub async fn list_pages_by_space(&self, space_key: &str, limit: u32) -> Result<Value> {
        self.api
            .get_with_query(
                "/rest/api/content",
                &[
                    ("spaceKey", space_key.to_string()),
                    ("limit", limit.to_string()),
                    ("type", "page".to_string()),
                ],
            )
            .await
    }
}
