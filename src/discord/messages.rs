use anyhow::Result;
use serde_json::{json, Value};

use super::DiscordClient;

impl DiscordClient {
    pub async fn send_message(&self, channel_id: &str, content: &str) -> Result<Value> {
        self.api
            .post(
                &format!("/channels/{}/messages", channel_id),
                &json!({ "content": content }),
            )
            .await
    }

    pub async fn edit_message(
        &self,
        channel_id: &str,
        message_id: &str,
        content: &str,
    ) -> Result<Value> {
        self.api
            .patch(
                &format!("/channels/{}/messages/{}", channel_id, message_id),
                &json!({ "content": content }),
            )
            .await
    }

    pub async fn delete_message(&self, channel_id: &str, message_id: &str) -> Result<()> {
        self.api
            .delete_unit(&format!("/channels/{}/messages/{}", channel_id, message_id))
            .await
    }

    pub async fn list_messages(&self, channel_id: &str, limit: u32) -> Result<Value> {
        self.api
            .get_with_query(
                &format!("/channels/{}/messages", channel_id),
                &[("limit", limit)],
            )
            .await
    }

    pub async fn pin_message(&self, channel_id: &str, message_id: &str) -> Result<()> {
        self.api
            .put_unit(&format!("/channels/{}/pins/{}", channel_id, message_id))
            .await
    }

    pub async fn unpin_message(&self, channel_id: &str, message_id: &str) -> Result<()> {
        self.api
            .delete_unit(&format!("/channels/{}/pins/{}", channel_id, message_id))
            .await
    }
}
