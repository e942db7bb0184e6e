use anyhow::Result;
use serde_json::{json, Value};

use super::SlackClient;

impl SlackClient {
    /// `name` is the emoji name without colons.
    pub async fn add_reaction(&self, channel: &str, name: &str, timestamp: &str) -> Result<Value> {
        self.call(
            "reactions.add",
            &json!({ "channel": channel, "name": name, "timestamp": timestamp }),
        )
        .await
    }

    pub async fn remove_reaction(
        &self,
        channel: &str,
        name: &str,
        timestamp: &str,
    ) -> Result<Value> {
        self.call(
            "reactions.remove",
            &json!({ "channel": channel, "name": name, "timestamp": timestamp }),
        )
        .await
    }

    pub async fn list_reactions(&self, user: &str, full: bool) -> Result<Value> {
        let full = full.to_string();
        self.read("reactions.list", &[("user", user), ("full", full.as_str())])
            .await
    }
}
