use anyhow::Result;
use serde_json::Value;

use super::SlackClient;

impl SlackClient {
    pub async fn get_team_info(&self) -> Result<Value> {
        self.api.get("/team.info").await
    }

    /// Paid workspaces only; free plans answer `{"ok": false, "error": "paid_only"}`.
    pub async fn get_access_logs(&self, count: u32, page: u32) -> Result<Value> {
        self.read("team.accessLogs", &[("count", count), ("page", page)])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::super::client::test_support::client;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_access_logs_paging() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/team.accessLogs")
                    .query_param("count", "100")
                    .query_param("page", "3");
                then.status(200).json_body(json!({"ok": true, "logins": []}));
            })
            .await;

        client(&server.base_url())
            .get_access_logs(100, 3)
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_team_info() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/team.info");
                then.status(200)
                    .json_body(json!({"ok": true, "team": {"id": "T12345", "name": "Acme"}}));
            })
            .await;

        let team = client(&server.base_url()).get_team_info().await.unwrap();
        assert_eq!(team["team"]["name"], "Acme");
    }
}
