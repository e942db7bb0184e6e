use anyhow::Result;
use serde_json::{json, Value};

use super::GitLabClient;

// Instance-wide system hooks; these require an administrator token.
impl GitLabClient {
    pub async fn create_system_hook(
        &self,
        url: &str,
        push_events: bool,
        tag_push_events: bool,
    ) -> Result<Value> {
        let body = json!({
            "url": url,
            "push_events": push_events,
            "tag_push_events": tag_push_events
        });

        self.api.post("/hooks", &body).await
    }

    pub async fn read_system_hook(&self, hook_id: u64) -> Result<Value> {
        self.api.get(&format!("/hooks/{}", hook_id)).await
    }

    pub async fn update_system_hook(
        &self,
        hook_id: u64,
        url: &str,
        push_events: bool,
        tag_push_events: bool,
    ) -> Result<Value> {
        let body = json!({
            "url": url,
            "push_events": push_events,
            "tag_push_events": tag_push_events
        });

        self.api.put(&format!("/hooks/{}", hook_id), &body).await
    }

    pub async fn delete_system_hook(&self, hook_id: u64) -> Result<()> {
        self.api.delete_unit(&format!("/hooks/{}", hook_id)).await
    }
}
