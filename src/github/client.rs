use std::time::Duration;

use anyhow::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Method, RequestBuilder};

use crate::http::{create_authenticated_client, ApiClient, AuthType};

pub const GITHUB_API_URL: &str = "https://api.github.com";

pub(super) const TOPICS_PREVIEW: &str = "application/vnd.github.mercy-preview+json";
pub(super) const PROJECTS_PREVIEW: &str = "application/vnd.github.inertia-preview+json";

pub struct GitHubClient {
    pub(super) api: ApiClient,
}

impl GitHubClient {
    pub fn new(token: &str) -> Result<Self> {
        Self::with_base_url(GITHUB_API_URL, token, None)
    }

    /// Point the client at a GitHub Enterprise API root such as `https://ghe.example.com/api/v3`.
    pub fn with_base_url(base_url: &str, token: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );

        let client = create_authenticated_client(AuthType::Token(token), Some(headers), timeout)?;

        Ok(Self {
            api: ApiClient::new(client, base_url, "GitHub"),
        })
    }

    /// Request carrying a preview media type in place of the default `Accept`.
    pub(super) fn preview(
        &self,
        method: Method,
        path: &str,
        media_type: &'static str,
    ) -> RequestBuilder {
        self.api.request(method, path).header(ACCEPT, media_type)
    }

    pub async fn test_connection(&self) -> Result<()> {
        self.api.get("/user").await?;
        Ok(())
    }
}
