use anyhow::Result;
use serde_json::{json, Value};

use super::SlackClient;

impl SlackClient {
    pub async fn list_conversations(&self) -> Result<Value> {
        self.api.get("/conversations.list").await
    }

    /// `user_ids` is a comma-separated list of user IDs.
    pub async fn open_conversation(&self, user_ids: &str) -> Result<Value> {
        self.call("conversations.open", &json!({ "users": user_ids }))
            .await
    }

    pub async fn close_conversation(&self, channel_id: &str) -> Result<Value> {
        self.call("conversations.close", &json!({ "channel": channel_id }))
            .await
    }

    pub async fn invite_users_to_conversation(
        &self,
        channel_id: &str,
        user_ids: &str,
    ) -> Result<Value> {
        self.call(
            "conversations.invite",
            &json!({ "channel": channel_id, "users": user_ids }),
        )
        .await
    }

    pub async fn kick_user_from_conversation(
        &self,
        channel_id: &str,
        user_id: &str,
    ) -> Result<Value> {
        self.call(
            "conversations.kick",
            &json!({ "channel": channel_id, "user": user_id }),
        )
        .await
    }
}
