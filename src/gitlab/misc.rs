use anyhow::Result;
use serde_json::{json, Value};

use super::GitLabClient;
use crate::http::encode_path_segment;

// To-dos, user custom attributes and container registry tags.
impl GitLabClient {
    pub async fn list_todos(&self) -> Result<Value> {
        self.api.get("/todos").await
    }

    pub async fn create_todo(&self, project_id: u64, action_name: &str) -> Result<Value> {
        self.api
            .post(
                "/todos",
                &json!({ "project_id": project_id, "action_name": action_name }),
            )
            .await
    }

    pub async fn delete_todo(&self, todo_id: u64) -> Result<()> {
        self.api.delete_unit(&format!("/todos/{}", todo_id)).await
    }

    pub async fn list_custom_attributes_for_users(&self, user_id: u64) -> Result<Value> {
        self.api
            .get(&format!("/users/{}/custom_attributes", user_id))
            .await
    }

    pub async fn create_custom_attribute_for_users(
        &self,
        user_id: u64,
        key: &str,
        value: &str,
    ) -> Result<Value> {
        self.api
            .post(
                &format!("/users/{}/custom_attributes/{}", user_id, encode_path_segment(key)),
                &json!({ "value": value }),
            )
            .await
    }

    pub async fn update_custom_attribute_for_users(
        &self,
        user_id: u64,
        key: &str,
        value: &str,
    ) -> Result<Value> {
        self.api
            .put(
                &format!("/users/{}/custom_attributes/{}", user_id, encode_path_segment(key)),
                &json!({ "value": value }),
            )
            .await
    }

    pub async fn delete_custom_attribute_for_users(&self, user_id: u64, key: &str) -> Result<()> {
        self.api
            .delete_unit(&format!(
                "/users/{}/custom_attributes/{}",
                user_id,
                encode_path_segment(key)
            ))
            .await
    }

    pub async fn list_container_registry_tags(&self, project_id: u64) -> Result<Value> {
        self.api
            .get(&format!("/projects/{}/registry/repositories/tags", project_id))
            .await
    }

    pub async fn create_container_registry_tag(
        &self,
        project_id: u64,
        tag_name: &str,
        git_ref: &str,
    ) -> Result<Value> {
        self.api
            .post(
                &format!("/projects/{}/registry/repositories/tags", project_id),
                &json!({ "tag_name": tag_name, "ref": git_ref }),
            )
            .await
    }

    pub async fn delete_container_registry_tag(
        &self,
        project_id: u64,
        tag_name: &str,
    ) -> Result<()> {
        self.api
            .delete_unit(&format!(
                "/projects/{}/registry/repositories/tags/{}",
                project_id,
                encode_path_segment(tag_name)
            ))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::super::client::test_support::client;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_todo() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/v4/todos")
                    .json_body(json!({"project_id": 12, "action_name": "marked"}));
                then.status(201).json_body(json!({"id": 1}));
            })
            .await;

        client(&server.base_url())
            .create_todo(12, "marked")
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_custom_attribute_update() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/api/v4/users/5/custom_attributes/location")
                    .json_body(json!({"value": "Berlin"}));
                then.status(200).json_body(json!({"key": "location", "value": "Berlin"}));
            })
            .await;

        let attribute = client(&server.base_url())
            .update_custom_attribute_for_users(5, "location", "Berlin")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(attribute["value"], "Berlin");
    }

    #[tokio::test]
    async fn test_delete_container_registry_tag() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(DELETE)
                    .path("/api/v4/projects/12/registry/repositories/tags/v1.0");
                then.status(200);
            })
            .await;

        client(&server.base_url())
            .delete_container_registry_tag(12, "v1.0")
            .await
            .unwrap();
        mock.assert_async().await;
    }
}
