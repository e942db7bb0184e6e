use anyhow::Result;
use reqwest::Method;
use serde_json::{json, Value};

use super::client::TOPICS_PREVIEW;
use super::types::{NewRepository, Page, RepositoryUpdate};
use super::GitHubClient;
use crate::http::field_or_empty;

impl GitHubClient {
    /// Create a repository for the authenticated user, or inside `organization` when given.
    pub async fn create_repository(
        &self,
        repository: &NewRepository,
        organization: Option<&str>,
    ) -> Result<Value> {
        let path = match organization {
            Some(org) => format!("/orgs/{}/repos", org),
            None => "/user/repos".to_string(),
        };

        self.api.post(&path, repository).await
    }

    pub async fn delete_repository(&self, owner: &str, repo: &str) -> Result<Value> {
        self.api.delete(&format!("/repos/{}/{}", owner, repo)).await
    }

    pub async fn update_repository(
        &self,
        owner: &str,
        repo: &str,
        update: &RepositoryUpdate,
    ) -> Result<Value> {
        self.api
            .patch(&format!("/repos/{}/{}", owner, repo), update)
            .await
    }

    /// `sort` is one of `created`, `updated`, `pushed`, `full_name`.
    pub async fn list_user_repositories(
        &self,
        username: &str,
        sort: &str,
        page: &Page,
    ) -> Result<Value> {
        let request = self
            .api
            .request(Method::GET, &format!("/users/{}/repos", username))
            .query(&[("sort", sort)])
            .query(page);

        self.api.execute(request).await
    }

    pub async fn list_organization_repositories(
        &self,
        org: &str,
        sort: &str,
        page: &Page,
    ) -> Result<Value> {
        let request = self
            .api
            .request(Method::GET, &format!("/orgs/{}/repos", org))
            .query(&[("sort", sort)])
            .query(page);

        self.api.execute(request).await
    }

    pub async fn fork_repository(
        &self,
        owner: &str,
        repo: &str,
        organization: Option<&str>,
    ) -> Result<Value> {
        let body = match organization {
            Some(org) => json!({ "organization": org }),
            None => json!({}),
        };

        self.api
            .post(&format!("/repos/{}/{}/forks", owner, repo), &body)
            .await
    }

    pub async fn star_repository(&self, owner: &str, repo: &str) -> Result<()> {
        self.api
            .put_unit(&format!("/user/starred/{}/{}", owner, repo))
            .await
    }

    pub async fn unstar_repository(&self, owner: &str, repo: &str) -> Result<()> {
        self.api
            .delete_unit(&format!("/user/starred/{}/{}", owner, repo))
            .await
    }

    pub async fn list_starred_repositories(&self, page: &Page) -> Result<Value> {
        self.api.get_with_query("/user/starred", page).await
    }

    pub async fn watch_repository(&self, owner: &str, repo: &str) -> Result<()> {
        let request = self
            .api
            .request(Method::PUT, &format!("/repos/{}/{}/subscription", owner, repo))
            .json(&json!({ "subscribed": true }));

        self.api.execute_unit(request).await
    }

    pub async fn unwatch_repository(&self, owner: &str, repo: &str) -> Result<()> {
        self.api
            .delete_unit(&format!("/repos/{}/{}/subscription", owner, repo))
            .await
    }

    /// Returns the repository's topic names as a JSON list.
    pub async fn get_repository_topics(&self, owner: &str, repo: &str) -> Result<Value> {
        let request = self.preview(
            Method::GET,
            &format!("/repos/{}/{}/topics", owner, repo),
            TOPICS_PREVIEW,
        );

        let body = self.api.execute(request).await?;
        Ok(field_or_empty(body, "names"))
    }

    /// Replaces all topics and returns the resulting names.
    pub async fn set_repository_topics(
        &self,
        owner: &str,
        repo: &str,
        topics: &[String],
    ) -> Result<Value> {
        let request = self
            .preview(
                Method::PUT,
                &format!("/repos/{}/{}/topics", owner, repo),
                TOPICS_PREVIEW,
            )
            .json(&json!({ "names": topics }));

        let body = self.api.execute(request).await?;
        Ok(field_or_empty(body, "names"))
    }
}

#[cfg(test)]
mod tests {
    use super::super::client::test_support::{client, AUTH};
    use super::*;
    use httpmock::prelude::*;
    use httpmock::Method::PATCH;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_repository_for_user() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/user/repos")
                    .header("authorization", AUTH)
                    .json_body(json!({"name": "tools", "description": "", "private": true}));
                then.status(201).json_body(json!({"full_name": "octocat/tools"}));
            })
            .await;

        let repository = NewRepository {
            name: "tools".to_string(),
            private: true,
            ..Default::default()
        };
        let created = client(&server.base_url())
            .create_repository(&repository, None)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(created["full_name"], "octocat/tools");
    }

    #[tokio::test]
    async fn test_create_repository_in_org() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/orgs/acme/repos");
                then.status(201).json_body(json!({"full_name": "acme/tools"}));
            })
            .await;

        let repository = NewRepository {
            name: "tools".to_string(),
            ..Default::default()
        };
        client(&server.base_url())
            .create_repository(&repository, Some("acme"))
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_repository_sends_only_set_fields() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PATCH)
                    .path("/repos/octocat/tools")
                    .json_body(json!({"private": false}));
                then.status(200).json_body(json!({"private": false}));
            })
            .await;

        let update = RepositoryUpdate {
            private: Some(false),
            ..Default::default()
        };
        client(&server.base_url())
            .update_repository("octocat", "tools", &update)
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_user_repositories_query() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/users/octocat/repos")
                    .query_param("sort", "updated")
                    .query_param("per_page", "30")
                    .query_param("page", "2");
                then.status(200).json_body(json!([{"name": "tools"}]));
            })
            .await;

        let page = Page {
            page: 2,
            ..Default::default()
        };
        let repos = client(&server.base_url())
            .list_user_repositories("octocat", "updated", &page)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(repos[0]["name"], "tools");
    }

    #[tokio::test]
    async fn test_fork_without_org_sends_empty_object() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/repos/octocat/tools/forks")
                    .json_body(json!({}));
                then.status(202).json_body(json!({"full_name": "me/tools"}));
            })
            .await;

        client(&server.base_url())
            .fork_repository("octocat", "tools", None)
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_star_and_watch() {
        let server = MockServer::start_async().await;
        let star = server
            .mock_async(|when, then| {
                when.method(PUT).path("/user/starred/octocat/tools");
                then.status(204);
            })
            .await;
        let watch = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/repos/octocat/tools/subscription")
                    .json_body(json!({"subscribed": true}));
                then.status(200).json_body(json!({"subscribed": true}));
            })
            .await;

        let client = client(&server.base_url());
        client.star_repository("octocat", "tools").await.unwrap();
        client.watch_repository("octocat", "tools").await.unwrap();

        star.assert_async().await;
        watch.assert_async().await;
    }

    #[tokio::test]
    async fn test_topics_use_preview_media_type_and_unwrap_names() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/repos/octocat/tools/topics")
                    .header("accept", "application/vnd.github.mercy-preview+json")
                    .json_body(json!({"names": ["rust", "cli"]}));
                then.status(200).json_body(json!({"names": ["rust", "cli"]}));
            })
            .await;

        let topics = client(&server.base_url())
            .set_repository_topics("octocat", "tools", &["rust".to_string(), "cli".to_string()])
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(topics, json!(["rust", "cli"]));
    }

    #[tokio::test]
    async fn test_get_topics_missing_names_defaults_to_empty() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/repos/octocat/tools/topics");
                then.status(200).json_body(json!({}));
            })
            .await;

        let topics = client(&server.base_url())
            .get_repository_topics("octocat", "tools")
            .await
            .unwrap();
        assert_eq!(topics, json!([]));
    }
}
