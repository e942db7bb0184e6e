use std::path::Path;

use anyhow::Result;
use reqwest::multipart::Form;
use reqwest::Method;
use serde_json::{json, Value};

use super::SlackClient;
use crate::http::file_part;

impl SlackClient {
    /// Upload a file and share it into `channels` (comma-separated channel IDs).
    pub async fn upload_file(&self, channels: &str, file_path: &Path) -> Result<Value> {
        let form = Form::new()
            .text("channels", channels.to_string())
            .part("file", file_part(file_path).await?);

        let request = self
            .api
            .request(Method::POST, "/files.upload")
            .multipart(form);

        self.api.execute(request).await
    }

    pub async fn share_file(&self, file_id: &str, channels: &str) -> Result<Value> {
        self.call(
            "files.sharedPublicURL",
            &json!({ "file": file_id, "channels": channels }),
        )
        .await
    }

    pub async fn delete_file(&self, file_id: &str) -> Result<Value> {
        self.call("files.delete", &json!({ "file": file_id })).await
    }

    pub async fn list_files(&self) -> Result<Value> {
        self.api.get("/files.list").await
    }
}
