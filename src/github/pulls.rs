use anyhow::Result;
use serde_json::{json, Value};

use super::types::{MergeOptions, NewPullRequest, PullRequestUpdate};
use super::GitHubClient;

impl GitHubClient {
    pub async fn create_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pull: &NewPullRequest,
    ) -> Result<Value> {
        self.api
            .post(&format!("/repos/{}/{}/pulls", owner, repo), pull)
            .await
    }

    pub async fn read_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
    ) -> Result<Value> {
        self.api
            .get(&format!("/repos/{}/{}/pulls/{}", owner, repo, pull_number))
            .await
    }

    pub async fn update_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
        update: &PullRequestUpdate,
    ) -> Result<Value> {
        self.api
            .patch(&format!("/repos/{}/{}/pulls/{}", owner, repo, pull_number), update)
            .await
    }

    pub async fn merge_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
        options: &MergeOptions,
    ) -> Result<Value> {
        self.api
            .put(
                &format!("/repos/{}/{}/pulls/{}/merge", owner, repo, pull_number),
                options,
            )
            .await
    }

    pub async fn close_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
    ) -> Result<Value> {
        self.api
            .patch(
                &format!("/repos/{}/{}/pulls/{}", owner, repo, pull_number),
                &json!({ "state": "closed" }),
            )
            .await
    }

    pub async fn comment_on_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
        body: &str,
    ) -> Result<Value> {
        self.api
            .post(
                &format!("/repos/{}/{}/pulls/{}/comments", owner, repo, pull_number),
                &json!({ "body": body }),
            )
            .await
    }
}
