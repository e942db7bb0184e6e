use anyhow::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{json, Value};

use super::GitHubClient;

const WORKFLOW_COMMIT_MESSAGE: &str = "Create GitHub Actions workflow";
const WORKFLOW_BRANCH: &str = "main";

impl GitHubClient {
    pub async fn list_workflows(&self, owner: &str, repo: &str) -> Result<Value> {
        self.api
            .get(&format!("/repos/{}/{}/actions/workflows", owner, repo))
            .await
    }

    /// Commit a workflow file at `path` (e.g. `.github/workflows/ci.yml`) on `main`.
    pub async fn create_workflow(
        &self,
        owner: &str,
        repo: &str,
        content: &str,
        path: &str,
    ) -> Result<Value> {
        let body = json!({
            "message": WORKFLOW_COMMIT_MESSAGE,
            "content": STANDARD.encode(content),
            "branch": WORKFLOW_BRANCH
        });

        self.api
            .put(&format!("/repos/{}/{}/contents/{}", owner, repo, path), &body)
            .await
    }

    pub async fn manage_workflow(
        &self,
        owner: &str,
        repo: &str,
        workflow_id: u64,
        state: &str,
    ) -> Result<Value> {
        self.api
            .put(
                &format!("/repos/{}/{}/actions/workflows/{}/enable", owner, repo, workflow_id),
                &json!({ "state": state }),
            )
            .await
    }
}
