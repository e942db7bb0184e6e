use anyhow::Result;
use serde_json::{json, Value};

use super::types::Visibility;
use super::GitLabClient;

impl GitLabClient {
    pub async fn create_snippet(
        &self,
        title: &str,
        file_name: &str,
        content: &str,
        visibility: Visibility,
    ) -> Result<Value> {
        let body = json!({
            "title": title,
            "file_name": file_name,
            "content": content,
            "visibility": visibility
        });

        self.api.post("/snippets", &body).await
    }

    pub async fn read_snippet(&self, snippet_id: u64) -> Result<Value> {
        self.api.get(&format!("/snippets/{}", snippet_id)).await
    }

    pub async fn update_snippet(
        &self,
        snippet_id: u64,
        title: &str,
        file_name: &str,
        content: &str,
        visibility: Visibility,
    ) -> Result<Value> {
        let body = json!({
            "title": title,
            "file_name": file_name,
            "content": content,
            "visibility": visibility
        });

        self.api
            .put(&format!("/snippets/{}", snippet_id), &body)
            .await
    }

    pub async fn delete_snippet(&self, snippet_id: u64) -> Result<()> {
        self.api
            .delete_unit(&format!("/snippets/{}", snippet_id))
            .await
    }
}
