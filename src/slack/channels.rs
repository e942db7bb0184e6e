use anyhow::Result;
use serde_json::{json, Value};

use super::SlackClient;
use crate::http::field_or_empty;

impl SlackClient {
    /// Returns the `channels` array of `conversations.list`, or the whole
    /// body when Slack answers `ok: false`.
    pub async fn list_channels(&self) -> Result<Value> {
        let body = self.api.get("/conversations.list").await?;
        if body.get("ok").and_then(Value::as_bool) != Some(true) {
            return Ok(body);
        }
        Ok(field_or_empty(body, "channels"))
    }

    pub async fn create_channel(&self, name: &str) -> Result<Value> {
        self.call("conversations.create", &json!({ "name": name }))
            .await
    }

    pub async fn join_channel(&self, channel_id: &str) -> Result<Value> {
        self.call("conversations.join", &json!({ "channel": channel_id }))
            .await
    }

    pub async fn leave_channel(&self, channel_id: &str) -> Result<Value> {
        self.call("conversations.leave", &json!({ "channel": channel_id }))
            .await
    }

    pub async fn archive_channel(&self, channel_id: &str) -> Result<Value> {
        self.call("conversations.archive", &json!({ "channel": channel_id }))
            .await
    }

    pub async fn unarchive_channel(&self, channel_id: &str) -> Result<Value> {
        self.call("conversations.unarchive", &json!({ "channel": channel_id }))
            .await
    }

    pub async fn rename_channel(&self, channel_id: &str, new_name: &str) -> Result<Value> {
        self.call(
            "conversations.rename",
            &json!({ "channel": channel_id, "name": new_name }),
        )
        .await
    }

    pub async fn get_channel_info(&self, channel_id: &str) -> Result<Value> {
        self.read("conversations.info", &[("channel", channel_id)])
            .await
    }

    pub async fn set_channel_topic(&self, channel_id: &str, topic: &str) -> Result<Value> {
        self.call(
            "conversations.setTopic",
            &json!({ "channel": channel_id, "topic": topic }),
        )
        .await
    }

    pub async fn set_channel_purpose(&self, channel_id: &str, purpose: &str) -> Result<Value> {
        self.call(
            "conversations.setPurpose",
            &json!({ "channel": channel_id, "purpose": purpose }),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::super::client::test_support::{client, AUTH};
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_channels_unwraps_channels() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/conversations.list")
                    .header("authorization", AUTH);
                then.status(200).json_body(json!({
                    "ok": true,
                    "channels": [{"id": "C012AB3CD", "name": "general"}]
                }));
            })
            .await;

        let channels = client(&server.base_url()).list_channels().await.unwrap();

        mock.assert_async().await;
        assert_eq!(channels[0]["name"], "general");
    }

    #[tokio::test]
    async fn test_list_channels_not_ok_returns_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/conversations.list");
                then.status(200).json_body(json!({"ok": false, "error": "invalid_auth"}));
            })
            .await;

        let body = client(&server.base_url()).list_channels().await.unwrap();
        assert_eq!(body, json!({"ok": false, "error": "invalid_auth"}));
    }

    #[tokio::test]
    async fn test_rename_channel() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/conversations.rename")
                    .json_body(json!({"channel": "C012AB3CD", "name": "release-train"}));
                then.status(200).json_body(json!({"ok": true}));
            })
            .await;

        client(&server.base_url())
            .rename_channel("C012AB3CD", "release-train")
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_channel_info_passes_channel_query() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/conversations.info")
                    .query_param("channel", "C012AB3CD");
                then.status(200)
                    .json_body(json!({"ok": true, "channel": {"id": "C012AB3CD"}}));
            })
            .await;

        let info = client(&server.base_url())
            .get_channel_info("C012AB3CD")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(info["channel"]["id"], "C012AB3CD");
    }

    #[tokio::test]
    async fn test_slack_error_body_is_returned() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/conversations.archive");
                then.status(200)
                    .json_body(json!({"ok": false, "error": "already_archived"}));
            })
            .await;

        let body = client(&server.base_url())
            .archive_channel("C012AB3CD")
            .await
            .unwrap();
        assert_eq!(body["error"], "already_archived");
    }
}
