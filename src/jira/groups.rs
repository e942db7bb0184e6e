use anyhow::{bail, Result};
use serde_json::{json, Value};

use super::JiraClient;
use crate::http::field_or_empty;

impl JiraClient {
    pub async fn create_group(&self, group_name: &str) -> Result<Value> {
        self.api
            .post("/rest/api/2/group", &json!({ "name": group_name }))
            .await
    }

    pub async fn read_group(&self, group_name: &str) -> Result<Value> {
        self.api
            .get_with_query("/rest/api/2/group", &[("groupname", group_name)])
            .await
    }

    /// Jira groups cannot be renamed; no request is made.
    pub async fn update_group(&self, group_name: &str, _new_name: &str) -> Result<Value> {
        bail!("Renaming group '{}' is not supported by the Jira API", group_name)
    }

    pub async fn delete_group(&self, group_name: &str) -> Result<()> {
        let request = self
            .api
            .request(reqwest::Method::DELETE, "/rest/api/2/group")
            .query(&[("groupname", group_name)]);

        self.api.execute_unit(request).await
    }

    pub async fn list_all_groups(&self) -> Result<Value> {
        let body = self.api.get("/rest/api/2/groups/picker").await?;
        Ok(field_or_empty(body, "groups"))
    }
}
