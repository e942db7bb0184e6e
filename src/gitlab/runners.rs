use anyhow::Result;
use reqwest::Method;
use serde_json::{json, Value};

use super::GitLabClient;

impl GitLabClient {
    pub async fn list_runners(&self) -> Result<Value> {
        self.api.get("/runners").await
    }

    pub async fn create_runner(
        &self,
        description: &str,
        active: bool,
        tag_list: &[String],
    ) -> Result<Value> {
        let body = json!({
            "description": description,
            "active": active,
            "tag_list": tag_list
        });

        self.api.post("/runners", &body).await
    }

    pub async fn delete_runner(&self, runner_id: u64) -> Result<()> {
        self.api.delete_unit(&format!("/runners/{}", runner_id)).await
    }

    pub async fn enable_runner(&self, runner_id: u64) -> Result<()> {
        self.set_runner_active(runner_id, true).await
    }

    pub async fn disable_runner(&self, runner_id: u64) -> Result<()> {
        self.set_runner_active(runner_id, false).await
    }

    async fn set_runner_active(&self, runner_id: u64, active: bool) -> Result<()> {
        let request = self
            .api
            .request(Method::PUT, &format!("/runners/{}", runner_id))
            .json(&json!({ "active": active }));

        self.api.execute_unit(request).await
    }
}
