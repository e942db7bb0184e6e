use anyhow::Result;
use serde_json::{json, Value};

use super::SlackClient;

impl SlackClient {
    pub async fn pin_item(&self, channel: &str, timestamp: &str) -> Result<Value> {
        self.call(
            "pins.add",
            &json!({ "channel": channel, "timestamp": timestamp }),
        )
        .await
    }

    pub async fn unpin_item(&self, channel: &str, timestamp: &str) -> Result<Value> {
        self.call(
            "pins.remove",
            &json!({ "channel": channel, "timestamp": timestamp }),
        )
        .await
    }

    pub async fn list_pinned_items(&self, channel: &str) -> Result<Value> {
        self.read("pins.list", &[("channel", channel)]).await
    }
}
