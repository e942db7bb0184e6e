use anyhow::Result;
use serde_json::{json, Value};

use super::SlackClient;

impl SlackClient {
    pub async fn create_user_group(&self, name: &str, description: &str) -> Result<Value> {
        self.call(
            "usergroups.create",
            &json!({ "name": name, "description": description }),
        )
        .await
    }

    pub async fn update_user_group(
        &self,
        user_group_id: &str,
        name: &str,
        description: &str,
    ) -> Result<Value> {
        let body = json!({
            "usergroup": user_group_id,
            "name": name,
            "description": description
        });

        self.call("usergroups.update", &body).await
    }

    pub async fn disable_user_group(&self, user_group_id: &str) -> Result<Value> {
        self.call("usergroups.disable", &json!({ "usergroup": user_group_id }))
            .await
    }

    pub async fn enable_user_group(&self, user_group_id: &str) -> Result<Value> {
        self.call("usergroups.enable", &json!({ "usergroup": user_group_id }))
            .await
    }

    pub async fn list_user_groups(&self) -> Result<Value> {
        self.api.get("/usergroups.list").await
    }
}
