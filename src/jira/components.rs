use anyhow::Result;
use serde_json::{json, Value};

use super::JiraClient;

impl JiraClient {
    /// `project` is the key of the owning project.
    pub async fn create_component(
        &self,
        project: &str,
        name: &str,
        description: &str,
    ) -> Result<Value> {
        let body = json!({
            "name": name,
            "description": description,
            "project": project
        });

        self.api.post("/rest/api/2/component", &body).await
    }

    pub async fn read_component(&self, component_id: &str) -> Result<Value> {
        self.api
            .get(&format!("/rest/api/2/component/{}", component_id))
            .await
    }

    pub async fn update_component(
        &self,
        component_id: &str,
        name: &str,
        description: &str,
    ) -> Result<Value> {
        self.api
            .put(
                &format!("/rest/api/2/component/{}", component_id),
                &json!({ "name": name, "description": description }),
            )
            .await
    }

    pub async fn delete_component(&self, component_id: &str) -> Result<()> {
        self.api
            .delete_unit(&format!("/rest/api/2/component/{}", component_id))
            .await
    }

    pub async fn list_all_components(&self, project: &str) -> Result<Value> {
        self.api
            .get(&format!("/rest/api/2/project/{}/components", project))
            .await
    }
}
