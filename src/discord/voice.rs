use anyhow::Result;
use serde_json::Value;

use super::types::VoiceStateUpdate;
use super::DiscordClient;

impl DiscordClient {
    pub async fn list_voice_regions(&self) -> Result<Value> {
        self.api.get("/voice/regions").await
    }

    pub async fn get_current_voice_state(&self, guild_id: &str, user_id: &str) -> Result<Value> {
        self.api
            .get(&format!("/guilds/{}/voice-states/{}", guild_id, user_id))
            .await
    }

    pub async fn update_voice_state(
        &self,
        guild_id: &str,
        user_id: &str,
        state: &VoiceStateUpdate,
    ) -> Result<Value> {
        self.api
            .patch(&format!("/guilds/{}/voice-states/{}", guild_id, user_id), state)
            .await
    }
}
