use anyhow::Result;
use serde_json::{json, Value};

use super::ConfluenceClient;

fn plain_description(description: &str) -> Value {
    json!({
        "plain": {
            "value": description,
            "representation": "plain"
        }
    })
}

impl ConfluenceClient {
    pub async fn create_space(
        &self,
        space_key: &str,
        name: &str,
        description: &str,
    ) -> Result<Value> {
        let body = json!({
            "key": space_key,
            "name": name,
            "description": plain_description(description)
        });

        self.api.post("/rest/api/space", &body).await
    }

    pub async fn read_space(&self, space_key: &str) -> Result<Value> {
        self.api
            .get(&format!("/rest/api/space/{}", space_key))
            .await
    }

    pub async fn update_space(
        &self,
        space_key: &str,
        name: &str,
        description: &str,
    ) -> Result<Value> {
        let body = json!({
            "name": name,
            "description": plain_description(description)
        });

        self.api
            .put(&format!("/rest/api/space/{}", space_key), &body)
            .await
    }

    pub async fn delete_space(&self, space_key: &str) -> Result<()> {
        self.api
            .delete_unit(&format!("/rest/api/space/{}", space_key))
            .await
    }

    pub async fn list_all_spaces(&self, limit: u32) -> Result<Value> {
        self.api
            .get_with_query("/rest/api/space", &[("limit", limit)])
            .await
    }
}
