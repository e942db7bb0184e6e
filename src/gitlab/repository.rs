use anyhow::Result;
use reqwest::Method;
use serde_json::{json, Value};

use super::types::{CommitAction, FileAction, FileChange};
use super::GitLabClient;
use crate::http::encode_path_segment;

impl GitLabClient {
    pub async fn list_branches(&self, project_id: u64) -> Result<Value> {
        self.api
            .get(&format!("/projects/{}/repository/branches", project_id))
            .await
    }

    pub async fn create_branch(
        &self,
        project_id: u64,
        branch: &str,
        git_ref: &str,
    ) -> Result<Value> {
        self.api
            .post(
                &format!("/projects/{}/repository/branches", project_id),
                &json!({ "branch": branch, "ref": git_ref }),
            )
            .await
    }

    pub async fn delete_branch(&self, project_id: u64, branch: &str) -> Result<()> {
        self.api
            .delete_unit(&format!(
                "/projects/{}/repository/branches/{}",
                project_id,
                encode_path_segment(branch)
            ))
            .await
    }

    pub async fn list_tags(&self, project_id: u64) -> Result<Value> {
        self.api
            .get(&format!("/projects/{}/repository/tags", project_id))
            .await
    }

    /// An empty `message` creates a lightweight tag.
    pub async fn create_tag(
        &self,
        project_id: u64,
        tag_name: &str,
        git_ref: &str,
        message: &str,
    ) -> Result<Value> {
        let body = json!({
            "tag_name": tag_name,
            "ref": git_ref,
            "message": message
        });

        self.api
            .post(&format!("/projects/{}/repository/tags", project_id), &body)
            .await
    }

    pub async fn delete_tag(&self, project_id: u64, tag_name: &str) -> Result<()> {
        self.api
            .delete_unit(&format!(
                "/projects/{}/repository/tags/{}",
                project_id,
                encode_path_segment(tag_name)
            ))
            .await
    }

    pub async fn list_commits(&self, project_id: u64) -> Result<Value> {
        self.api
            .get(&format!("/projects/{}/repository/commits", project_id))
            .await
    }

    /// List the tree at `path`; an empty path lists the repository root.
    pub async fn list_repository_files(&self, project_id: u64, path: &str) -> Result<Value> {
        let mut request = self.api.request(
            Method::GET,
            &format!("/projects/{}/repository/tree", project_id),
        );
        if !path.is_empty() {
            request = request.query(&[("path", path)]);
        }

        self.api.execute(request).await
    }

    /// Cherry-pick or revert `sha` onto `branch`.
    pub async fn manage_commits(
        &self,
        project_id: u64,
        sha: &str,
        action: CommitAction,
        branch: &str,
    ) -> Result<Value> {
        self.api
            .post(
                &format!(
                    "/projects/{}/repository/commits/{}/{}",
                    project_id,
                    sha,
                    action.as_str()
                ),
                &json!({ "branch": branch }),
            )
            .await
    }

    pub async fn manage_repository_files(
        &self,
        project_id: u64,
        file_path: &str,
        change: &FileChange,
    ) -> Result<Value> {
        let body = match change.action {
            FileAction::Delete => json!({
                "branch": change.branch,
                "commit_message": change.commit_message
            }),
            FileAction::Create | FileAction::Update => json!({
                "branch": change.branch,
                "content": change.content,
                "commit_message": change.commit_message
            }),
        };

        let request = self
            .api
            .request(
                change.action.method(),
                &format!(
                    "/projects/{}/repository/files/{}",
                    project_id,
                    encode_path_segment(file_path)
                ),
            )
            .json(&body);

        self.api.execute(request).await
    }
}
