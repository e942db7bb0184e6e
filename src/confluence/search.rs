use anyhow::Result;
use serde_json::Value;

use super::ConfluenceClient;

impl ConfluenceClient {
    /// Run a CQL query, e.g. `type=page and space=ENG`.
    pub async fn search_content(&self, cql: &str, limit: u32) -> Result<Value> {
        self.api
            .get_with_query(
                "/rest/api/content/search",
                &[("cql", cql.to_string()), ("limit", limit.to_string())],
            )
            .await
    }

    pub async fn search_users(&self, query: &str, limit: u32) -> Result<Value> {
        self.api
            .get_with_query(
                "/rest/api/user/search",
                &[("query", query.to_string()), ("limit", limit.to_string())],
            )
            .await
    }
}
