use std::path::Path;

use anyhow::{Context, Result};
use reqwest::multipart::Form;
use reqwest::Method;
use serde_json::Value;

use super::ConfluenceClient;
use crate::http::file_part;

impl ConfluenceClient {
    pub async fn upload_attachment(&self, page_id: &str, file_path: &Path) -> Result<Value> {
        let form = Form::new().part("file", file_part(file_path).await?);

        let request = self
            .api
            .request(
                Method::POST,
                &format!("/rest/api/content/{}/child/attachment", page_id),
            )
            .header("X-Atlassian-Token", "no-check")
            .multipart(form);

        self.api.execute(request).await
    }

    /// Fetch an attachment's bytes and write them to `save_path`.
    pub async fn download_attachment(&self, attachment_id: &str, save_path: &Path) -> Result<()> {
        let bytes = self
            .api
            .download(&format!("/rest/api/content/{}/download", attachment_id))
            .await?;

        tokio::fs::write(save_path, bytes)
            .await
            .with_context(|| format!("Failed to write attachment to {}", save_path.display()))
    }

    pub async fn delete_attachment(&self, attachment_id: &str) -> Result<()> {
        self.api
            .delete_unit(&format!("/rest/api/content/{}", attachment_id))
            .await
    }

    pub async fn list_attachments_on_page(&self, page_id: &str, limit: u32) -> Result<Value> {
        self.api
            .get_with_query(
                &format!("/rest/api/content/{}/child/attachment", page_id),
                &[("limit", limit)],
            )
            .await
    }
}
