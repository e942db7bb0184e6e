use std::time::Duration;

use anyhow::Result;

use crate::http::{create_authenticated_client, ApiClient, AuthType};

/// Confluence REST API client (basic auth with username and API token).
pub struct ConfluenceClient {
    pub(super) api: ApiClient,
}

impl ConfluenceClient {
    pub fn new(base_url: &str, username: &str, api_token: &str) -> Result<Self> {
        Self::with_timeout(base_url, username, api_token, None)
    }

    pub fn with_timeout(
        base_url: &str,
        username: &str,
        api_token: &str,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let client = create_authenticated_client(
            AuthType::Basic {
                username,
                password: api_token,
            },
            None,
            timeout,
        )?;

        Ok(Self {
            api: ApiClient::new(client, base_url, "Confluence"),
        })
    }

    pub fn base_url(&self) -> &str {
        self.api.base_url()
    }

    /// Check the credentials by fetching the current user.
    pub async fn test_connection(&self) -> Result<()> {
        self.api.get("/rest/api/user/current").await?;
        Ok(())
    }
}

#[cfg(test)]
pub(super) mod test_support {
    use super::ConfluenceClient;

    pub const AUTH: &str = "Basic dXNlcjp0b2tlbg==";

    pub fn client(base_url: &str) -> ConfluenceClient {
        ConfluenceClient::new(base_url, "user", "token").unwrap()
    }
}
