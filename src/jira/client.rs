use std::time::Duration;

use anyhow::Result;

use crate::http::{create_authenticated_client, ApiClient, AuthType};

/// Jira REST client using basic auth (account email or username plus API token).
pub struct JiraClient {
    pub(super) api: ApiClient,
}

impl JiraClient {
    pub fn new(server_url: &str, username: &str, api_token: &str) -> Result<Self> {
        Self::with_timeout(server_url, username, api_token, None)
    }

    pub fn with_timeout(
        server_url: &str,
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
            api: ApiClient::new(client, server_url, "Jira"),
        })
    }

    pub fn server_url(&self) -> &str {
        self.api.base_url()
    }

    pub async fn test_connection(&self) -> Result<()> {
        self.api.get("/rest/api/2/myself").await?;
        Ok(())
    }
}

#[cfg(test)]
pub(super) mod test_support {
    use super::JiraClient;

    pub const AUTH: &str = "Basic YWxpY2U6c2VjcmV0";

    pub fn client(server_url: &str) -> JiraClient {
        JiraClient::new(server_url, "alice", "secret").unwrap()
    }
}
