use anyhow::Result;
use serde_json::Value;

use super::types::{NewTag, Page, ReleaseParams};
use super::GitHubClient;

impl GitHubClient {
    pub async fn list_releases(&self, owner: &str, repo: &str, page: &Page) -> Result<Value> {
        self.api
            .get_with_query(&format!("/repos/{}/{}/releases", owner, repo), page)
            .await
    }

    pub async fn create_release(
        &self,
        owner: &str,
        repo: &str,
        release: &ReleaseParams,
    ) -> Result<Value> {
        self.api
            .post(&format!("/repos/{}/{}/releases", owner, repo), release)
            .await
    }

    pub async fn update_release(
        &self,
        owner: &str,
        repo: &str,
        release_id: u64,
        release: &ReleaseParams,
    ) -> Result<Value> {
        self.api
            .patch(
                &format!("/repos/{}/{}/releases/{}", owner, repo, release_id),
                release,
            )
            .await
    }

    pub async fn delete_release(&self, owner: &str, repo: &str, release_id: u64) -> Result<()> {
        self.api
            .delete_unit(&format!("/repos/{}/{}/releases/{}", owner, repo, release_id))
            .await
    }

    pub async fn list_tags(&self, owner: &str, repo: &str, page: &Page) -> Result<Value> {
        self.api
            .get_with_query(&format!("/repos/{}/{}/tags", owner, repo), page)
            .await
    }

    /// Creates an annotated tag object. The ref pointing at it is not created.
    pub async fn create_tag(&self, owner: &str, repo: &str, tag: &NewTag) -> Result<Value> {
        self.api
            .post(&format!("/repos/{}/{}/git/tags", owner, repo), tag)
            .await
    }

    pub async fn delete_tag(&self, owner: &str, repo: &str, tag: &str) -> Result<()> {
        self.api
            .delete_unit(&format!("/repos/{}/{}/git/refs/tags/{}", owner, repo, tag))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::super::client::test_support::client;
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_release_payload() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/repos/octocat/tools/releases").json_body(json!({
                    "tag_name": "v1.2.0",
                    "name": "1.2.0",
                    "body": "Changelog",
                    "draft": false,
                    "prerelease": true
                }));
                then.status(201).json_body(json!({"id": 55}));
            })
            .await;

        let release = ReleaseParams {
            tag_name: "v1.2.0".to_string(),
            name: "1.2.0".to_string(),
            body: "Changelog".to_string(),
            prerelease: true,
            ..Default::default()
        };
        let created = client(&server.base_url())
            .create_release("octocat", "tools", &release)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(created["id"], 55);
    }

    #[tokio::test]
    async fn test_list_tags_paging() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/repos/octocat/tools/tags")
                    .query_param("per_page", "100")
                    .query_param("page", "1");
                then.status(200).json_body(json!([{"name": "v1.2.0"}]));
            })
            .await;

        let page = Page {
            per_page: 100,
            page: 1,
        };
        client(&server.base_url())
            .list_tags("octocat", "tools", &page)
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_delete_tag_ref() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(DELETE)
                    .path("/repos/octocat/tools/git/refs/tags/v1.2.0");
                then.status(204);
            })
            .await;

        client(&server.base_url())
            .delete_tag("octocat", "tools", "v1.2.0")
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_delete_release_missing() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(DELETE).path("/repos/octocat/tools/releases/9");
                then.status(404).json_body(json!({"message": "Not Found"}));
            })
            .await;

        let err = client(&server.base_url())
            .delete_release("octocat", "tools", 9)
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("GitHub API error: 404"));
    }
}
