use anyhow::Result;
use serde_json::{json, Value};

use super::DiscordClient;

impl DiscordClient {
    pub async fn get_user_details(&self, user_id: &str) -> Result<Value> {
        self.api.get(&format!("/users/{}", user_id)).await
    }

    /// `avatar` is a data URI of the new image.
    pub async fn update_user_details(
        &self,
        user_id: &str,
        username: &str,
        avatar: &str,
    ) -> Result<Value> {
        let body = json!({
            "username": username,
            "avatar": avatar
        });

        self.api.patch(&format!("/users/{}", user_id), &body).await
    }

    pub async fn list_all_members(&self, guild_id: &str, limit: u32) -> Result<Value> {
        self.api
            .get_with_query(&format!("/guilds/{}/members", guild_id), &[("limit", limit)])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::super::client::test_support::client;
    use httpmock::prelude::*;
    use httpmock::Method::PATCH;
    use serde_json::json;

    #[tokio::test]
    async fn test_update_user_details() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PATCH)
                    .path("/users/@me")
                    .json_body(json!({
                        "username": "deploy-bot",
                        "avatar": "data:image/png;base64,AAAA"
                    }));
                then.status(200).json_body(json!({"id": "1", "username": "deploy-bot"}));
            })
            .await;

        let user = client(&server.base_url())
            .update_user_details("@me", "deploy-bot", "data:image/png;base64,AAAA")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(user["username"], "deploy-bot");
    }

    #[tokio::test]
    async fn test_list_all_members_limit() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/guilds/g1/members")
                    .query_param("limit", "1000");
                then.status(200).json_body(json!([]));
            })
            .await;

        client(&server.base_url())
            .list_all_members("g1", 1000)
            .await
            .unwrap();
        mock.assert_async().await;
    }
}
