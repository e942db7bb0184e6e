use anyhow::Result;
use serde_json::{json, Value};

use super::SlackClient;

impl SlackClient {
    pub async fn list_users(&self) -> Result<Value> {
        self.api.get("/users.list").await
    }

    pub async fn get_user_info(&self, user_id: &str) -> Result<Value> {
        self.read("users.info", &[("user", user_id)]).await
    }

    /// Sets the calling user's status; `status_emoji` looks like `:palm_tree:`.
    pub async fn set_user_status(&self, status_text: &str, status_emoji: &str) -> Result<Value> {
        let body = json!({
            "profile": {
                "status_text": status_text,
                "status_emoji": status_emoji
            }
        });

        self.call("users.profile.set", &body).await
    }

    /// `presence` is `auto` or `away`.
    pub async fn set_user_presence(&self, presence: &str) -> Result<Value> {
        self.call("users.setPresence", &json!({ "presence": presence }))
            .await
    }
}
