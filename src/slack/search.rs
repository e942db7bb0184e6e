use anyhow::Result;
use serde::Serialize;
use serde_json::Value;

use super::SlackClient;

#[derive(Serialize)]
struct SearchQuery<'a> {
    query: &'a str,
    count: u32,
    page: u32,
}

impl SlackClient {
    pub async fn search_messages(&self, query: &str, count: u32, page: u32) -> Result<Value> {
        self.read("search.messages", &SearchQuery { query, count, page })
            .await
    }

    pub async fn search_files(&self, query: &str, count: u32, page: u32) -> Result<Value> {
        self.read("search.files", &SearchQuery { query, count, page })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::super::client::test_support::client;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_search_messages_paging() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/search.messages")
                    .query_param("query", "deploy failed")
                    .query_param("count", "20")
                    .query_param("page", "2");
                then.status(200)
                    .json_body(json!({"ok": true, "messages": {"total": 0, "matches": []}}));
            })
            .await;

        client(&server.base_url())
            .search_messages("deploy failed", 20, 2)
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_search_files() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/search.files")
                    .query_param("query", "roadmap");
                then.status(200)
                    .json_body(json!({"ok": true, "files": {"total": 1}}));
            })
            .await;

        let result = client(&server.base_url())
            .search_files("roadmap", 20, 1)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(result["files"]["total"], 1);
    }
}
