use std::time::Duration;

use anyhow::Result;

use crate::http::{create_authenticated_client, ApiClient, AuthType};

pub const DISCORD_API_URL: &str = "https://discord.com/api/v9";

/// Discord REST client authenticated as a bot.
pub struct DiscordClient {
    pub(super) api: ApiClient,
}

impl DiscordClient {
    pub fn new(token: &str) -> Result<Self> {
        Self::with_base_url(DISCORD_API_URL, token, None)
    }

    pub fn with_base_url(base_url: &str, token: &str, timeout: Option<Duration>) -> Result<Self> {
        let client = create_authenticated_client(AuthType::Bot(token), None, timeout)?;

        Ok(Self {
            api: ApiClient::new(client, base_url, "Discord"),
        })
    }

    pub async fn test_connection(&self) -> Result<()> {
        self.api.get("/users/@me").await?;
        Ok(())
    }
}

#[cfg(test)]
pub(super) mod test_support {
    use super::DiscordClient;

    pub const AUTH: &str = "Bot bot-token";

    pub fn client(base_url: &str) -> DiscordClient {
        DiscordClient::with_base_url(base_url, "bot-token", None).unwrap()
    }
}
