use anyhow::Result;
use serde_json::{json, Value};

use super::JiraClient;

impl JiraClient {
    /// `project_type` is the project type key, e.g. `software` or `business`.
    pub async fn create_project(
        &self,
        name: &str,
        project_type: &str,
        description: &str,
    ) -> Result<Value> {
        let body = json!({
            "name": name,
            "projectType": { "id": project_type },
            "description": description
        });

        self.api.post("/rest/api/2/project", &body).await
    }

    pub async fn read_project(&self, project_key: &str) -> Result<Value> {
        self.api
            .get(&format!("/rest/api/2/project/{}", project_key))
            .await
    }

    pub async fn update_project(
        &self,
        project_key: &str,
        name: &str,
        project_type: &str,
        description: &str,
    ) -> Result<Value> {
        let body = json!({
            "name": name,
            "projectType": { "id": project_type },
            "description": description
        });

        self.api
            .put(&format!("/rest/api/2/project/{}", project_key), &body)
            .await
    }

    pub async fn delete_project(&self, project_key: &str) -> Result<()> {
        self.api
            .delete_unit(&format!("/rest/api/2/project/{}", project_key))
            .await
    }

    /// Returns the array of projects visible to the caller.
    pub async fn list_projects(&self) -> Result<Value> {
        self.api.get("/rest/api/2/project").await
    }
}
