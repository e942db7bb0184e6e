use anyhow::Result;
use serde_json::Value;

use super::DiscordClient;

impl DiscordClient {
    pub async fn create_guild(&self, guild: &Value) -> Result<Value> {
        self.api.post("/guilds", guild).await
    }

    pub async fn get_guild_details(&self, guild_id: &str) -> Result<Value> {
        self.api.get(&format!("/guilds/{}", guild_id)).await
    }

    pub async fn update_guild(&self, guild_id: &str, update: &Value) -> Result<Value> {
        self.api
            .patch(&format!("/guilds/{}", guild_id), update)
            .await
    }

    pub async fn delete_guild(&self, guild_id: &str) -> Result<()> {
        self.api.delete_unit(&format!("/guilds/{}", guild_id)).await
    }

    /// Guilds the bot user is a member of.
    pub async fn list_all_guilds(&self) -> Result<Value> {
        self.api.get("/users/@me/guilds").await
    }
}
