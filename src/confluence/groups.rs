use anyhow::Result;
use reqwest::Method;
use serde_json::{json, Value};

use super::ConfluenceClient;

impl ConfluenceClient {
    pub async fn create_group(&self, group_name: &str) -> Result<Value> {
        self.api
            .post("/rest/api/group", &json!({ "name": group_name }))
            .await
    }

    pub async fn delete_group(&self, group_name: &str) -> Result<()> {
        let request = self
            .api
            .request(Method::DELETE, "/rest/api/group")
            .query(&[("groupname", group_name)]);

        self.api.execute_unit(request).await
    }

    pub async fn add_user_to_group(&self, group_name: &str, username: &str) -> Result<Value> {
        let request = self
            .api
            .request(Method::POST, "/rest/api/group/user")
            .query(&[("groupname", group_name)])
            .json(&json!({ "name": username }));

        self.api.execute(request).await
    }

    pub async fn remove_user_from_group(&self, group_name: &str, username: &str) -> Result<()> {
        let request = self
            .api
            .request(Method::DELETE, "/rest/api/group/user")
            .query(&[("groupname", group_name), ("username", username)]);

        self.api.execute_unit(request).await
    }

    pub async fn list_all_groups(&self, limit: u32) -> Result<Value> {
        self.api
            .get_with_query("/rest/api/group", &[("limit", limit)])
            .await
    }
}
