use anyhow::Result;
use serde_json::Value;

use super::DiscordClient;

impl DiscordClient {
    pub async fn create_channel(&self, guild_id: &str, channel: &Value) -> Result<Value> {
        self.api
            .post(&format!("/guilds/{}/channels", guild_id), channel)
            .await
    }

    pub async fn get_channel_details(&self, channel_id: &str) -> Result<Value> {
        self.api.get(&format!("/channels/{}", channel_id)).await
    }

    pub async fn update_channel(&self, channel_id: &str, update: &Value) -> Result<Value> {
        self.api
            .patch(&format!("/channels/{}", channel_id), update)
            .await
    }

    pub async fn delete_channel(&self, channel_id: &str) -> Result<()> {
        self.api
            .delete_unit(&format!("/channels/{}", channel_id))
            .await
    }

    pub async fn list_all_channels(&self, guild_id: &str) -> Result<Value> {
        self.api.get(&format!("/guilds/{}/channels", guild_id)).await
    }
}
