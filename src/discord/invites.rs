use anyhow::Result;
use serde_json::{json, Value};

use super::DiscordClient;

impl DiscordClient {
    /// `max_age` is in seconds, 0 meaning never expire; `max_uses` 0 means unlimited.
    pub async fn create_invite(
        &self,
        channel_id: &str,
        max_age: u32,
        max_uses: u32,
    ) -> Result<Value> {
        let body = json!({
            "max_age": max_age,
            "max_uses": max_uses
        });

        self.api
            .post(&format!("/channels/{}/invites", channel_id), &body)
            .await
    }

    pub async fn get_invite_details(&self, invite_code: &str) -> Result<Value> {
        self.api.get(&format!("/invites/{}", invite_code)).await
    }

    pub async fn delete_invite(&self, invite_code: &str) -> Result<Value> {
        self.api.delete(&format!("/invites/{}", invite_code)).await
    }

    pub async fn list_all_invites(&self, guild_id: &str) -> Result<Value> {
        self.api.get(&format!("/guilds/{}/invites", guild_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::client::test_support::client;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_invite() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/channels/c1/invites")
                    .json_body(json!({"max_age": 3600, "max_uses": 0}));
                then.status(200).json_body(json!({"code": "abc123"}));
            })
            .await;

        let invite = client(&server.base_url())
            .create_invite("c1", 3600, 0)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(invite["code"], "abc123");
    }

    #[tokio::test]
    async fn test_delete_invite_returns_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(DELETE).path("/invites/abc123");
                then.status(200).json_body(json!({"code": "abc123"}));
            })
            .await;

        let deleted = client(&server.base_url())
            .delete_invite("abc123")
            .await
            .unwrap();
        assert_eq!(deleted["code"], "abc123");
    }
}
