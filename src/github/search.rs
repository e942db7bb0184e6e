use anyhow::Result;
use reqwest::Method;
use serde_json::Value;

use super::types::Page;
use super::GitHubClient;

impl GitHubClient {
    /// Code search, e.g. `addClass in:file language:js repo:jquery/jquery`.
    pub async fn search_code(&self, query: &str) -> Result<Value> {
        self.api
            .get_with_query("/search/code", &[("q", query)])
            .await
    }

    pub async fn search_repositories(&self, query: &str, page: &Page) -> Result<Value> {
        self.search("/search/repositories", query, page).await
    }

    pub async fn search_issues(&self, query: &str, page: &Page) -> Result<Value> {
        self.search("/search/issues", query, page).await
    }

    pub async fn search_users(&self, query: &str, page: &Page) -> Result<Value> {
        self.search("/search/users", query, page).await
    }

    async fn search(&self, path: &str, query: &str, page: &Page) -> Result<Value> {
        let request = self
            .api
            .request(Method::GET, path)
            .query(&[("q", query)])
            .query(page);

        self.api.execute(request).await
    }
}
