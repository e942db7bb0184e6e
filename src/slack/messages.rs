use anyhow::Result;
use serde_json::{json, Value};

use super::SlackClient;

impl SlackClient {
    pub async fn send_message(&self, channel_id: &str, text: &str) -> Result<Value> {
        self.call(
            "chat.postMessage",
            &json!({ "channel": channel_id, "text": text }),
        )
        .await
    }

    /// `ts` is the timestamp Slack returned when the message was posted.
    pub async fn update_message(&self, channel_id: &str, ts: &str, text: &str) -> Result<Value> {
        self.call(
            "chat.update",
            &json!({ "channel": channel_id, "ts": ts, "text": text }),
        )
        .await
    }

    pub async fn delete_message(&self, channel_id: &str, ts: &str) -> Result<Value> {
        self.call("chat.delete", &json!({ "channel": channel_id, "ts": ts }))
            .await
    }

    pub async fn list_messages_in_channel(&self, channel_id: &str) -> Result<Value> {
        self.read("conversations.history", &[("channel", channel_id)])
            .await
    }

    pub async fn react_to_message(&self, channel_id: &str, ts: &str, emoji: &str) -> Result<Value> {
        self.add_reaction(channel_id, emoji, ts).await
    }

    pub async fn unreact_to_message(
        &self,
        channel_id: &str,
        ts: &str,
        emoji: &str,
    ) -> Result<Value> {
        self.remove_reaction(channel_id, emoji, ts).await
    }
}
