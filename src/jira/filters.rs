use anyhow::Result;
use serde_json::{json, Value};

use super::JiraClient;
use crate::http::field_or_empty;

impl JiraClient {
    pub async fn create_filter(&self, name: &str, jql: &str, description: &str) -> Result<Value> {
        let body = json!({
            "name": name,
            "jql": jql,
            "description": description
        });

        self.api.post("/rest/api/2/filter", &body).await
    }

    pub async fn read_filter(&self, filter_id: u64) -> Result<Value> {
        self.api
            .get(&format!("/rest/api/2/filter/{}", filter_id))
            .await
    }

    pub async fn update_filter(
        &self,
        filter_id: u64,
        name: &str,
        jql: &str,
        description: &str,
    ) -> Result<Value> {
        let body = json!({
            "name": name,
            "jql": jql,
            "description": description
        });

        self.api
            .put(&format!("/rest/api/2/filter/{}", filter_id), &body)
            .await
    }

    pub async fn delete_filter(&self, filter_id: u64) -> Result<()> {
        self.api
            .delete_unit(&format!("/rest/api/2/filter/{}", filter_id))
            .await
    }

    /// Accepts both the bare array and the paged `{values: [...]}` shapes.
    pub async fn list_all_filters(&self) -> Result<Value> {
        let body = self.api.get("/rest/api/2/filter").await?;
        Ok(field_or_empty(body, "values"))
    }
}
