use anyhow::Result;
use serde_json::Value;

use super::types::RoleParams;
use super::DiscordClient;

impl DiscordClient {
    pub async fn create_role(&self, guild_id: &str, role: &RoleParams) -> Result<Value> {
        self.api
            .post(&format!("/guilds/{}/roles", guild_id), role)
            .await
    }

    pub async fn get_role_details(&self, guild_id: &str, role_id: &str) -> Result<Value> {
        self.api
            .get(&format!("/guilds/{}/roles/{}", guild_id, role_id))
            .await
    }

    pub async fn update_role(
        &self,
        guild_id: &str,
        role_id: &str,
        role: &RoleParams,
    ) -> Result<Value> {
        self.api
            .patch(&format!("/guilds/{}/roles/{}", guild_id, role_id), role)
            .await
    }

    pub async fn delete_role(&self, guild_id: &str, role_id: &str) -> Result<Value> {
        self.api
            .delete(&format!("/guilds/{}/roles/{}", guild_id, role_id))
            .await
    }

    pub async fn list_all_roles(&self, guild_id: &str) -> Result<Value> {
        self.api.get(&format!("/guilds/{}/roles", guild_id)).await
    }
}
