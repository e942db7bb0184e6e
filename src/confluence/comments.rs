use anyhow::Result;
use serde_json::{json, Value};

use super::pages::storage_body;
use super::ConfluenceClient;

impl ConfluenceClient {
    pub async fn create_comment(&self, page_id: &str, content: &str) -> Result<Value> {
        let body = json!({
            "type": "comment",
            "body": storage_body(content)
        });

        self.api
            .post(&format!("/rest/api/content/{}/child/comment", page_id), &body)
            .await
    }

    pub async fn read_comment(&self, comment_id: &str) -> Result<Value> {
        self.api
            .get(&format!("/rest/api/content/{}", comment_id))
            .await
    }

    /// `version` is the comment's current version number.
    pub async fn update_comment(
        &self,
        comment_id: &str,
        version: u64,
        content: &str,
    ) -> Result<Value> {
        let body = json!({
            "version": { "number": version + 1 },
            "type": "comment",
            "body": storage_body(content)
        });

        self.api
            .put(&format!("/rest/api/content/{}", comment_id), &body)
            .await
    }

    pub async fn delete_comment(&self, comment_id: &str) -> Result<()> {
        self.api
            .delete_unit(&format!("/rest/api/content/{}", comment_id))
            .await
    }

    pub async fn list_comments_on_page(&self, page_id: &str, limit: u32) -> Result<Value> {
        self.api
            .get_with_query(
                &format!("/rest/api/content/{}/child/comment", page_id),
                &[("limit", limit)],
            )
            .await
    }
}
