use anyhow::Result;
use reqwest::Method;
use serde_json::Value;

use super::DiscordClient;

impl DiscordClient {
    pub async fn ban_user(
        &self,
        guild_id: &str,
        user_id: &str,
        delete_message_days: u32,
        reason: &str,
    ) -> Result<Value> {
        let request = self
            .api
            .request(Method::PUT, &format!("/guilds/{}/bans/{}", guild_id, user_id))
            .query(&[
                ("delete_message_days", delete_message_days.to_string()),
                ("reason", reason.to_string()),
            ]);

        self.api.execute(request).await
    }

    pub async fn unban_user(&self, guild_id: &str, user_id: &str) -> Result<Value> {
        self.api
            .delete(&format!("/guilds/{}/bans/{}", guild_id, user_id))
            .await
    }

    pub async fn list_all_bans(&self, guild_id: &str) -> Result<Value> {
        self.api.get(&format!("/guilds/{}/bans", guild_id)).await
    }
}
