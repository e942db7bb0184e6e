use anyhow::Result;
use serde_json::Value;

use super::types::HookParams;
use super::GitHubClient;

impl GitHubClient {
    pub async fn create_repo_webhook(
        &self,
        owner: &str,
        repo: &str,
        hook: &HookParams,
    ) -> Result<Value> {
        self.api
            .post(&format!("/repos/{}/{}/hooks", owner, repo), hook)
            .await
    }

    pub async fn read_repo_webhook(&self, owner: &str, repo: &str, hook_id: u64) -> Result<Value> {
        self.api
            .get(&format!("/repos/{}/{}/hooks/{}", owner, repo, hook_id))
            .await
    }

    pub async fn update_repo_webhook(
        &self,
        owner: &str,
        repo: &str,
        hook_id: u64,
        hook: &HookParams,
    ) -> Result<Value> {
        self.api
            .patch(&format!("/repos/{}/{}/hooks/{}", owner, repo, hook_id), hook)
            .await
    }

    pub async fn delete_repo_webhook(&self, owner: &str, repo: &str, hook_id: u64) -> Result<()> {
        self.api
            .delete_unit(&format!("/repos/{}/{}/hooks/{}", owner, repo, hook_id))
            .await
    }

    pub async fn create_org_webhook(&self, org: &str, hook: &HookParams) -> Result<Value> {
        self.api.post(&format!("/orgs/{}/hooks", org), hook).await
    }

    pub async fn read_org_webhook(&self, org: &str, hook_id: u64) -> Result<Value> {
        self.api
            .get(&format!("/orgs/{}/hooks/{}", org, hook_id))
            .await
    }

    pub async fn update_org_webhook(
        &self,
        org: &str,
        hook_id: u64,
        hook: &HookParams,
    ) -> Result<Value> {
        self.api
            .patch(&format!("/orgs/{}/hooks/{}", org, hook_id), hook)
            .await
    }

    pub async fn delete_org_webhook(&self, org: &str, hook_id: u64) -> Result<()> {
        self.api
            .delete_unit(&format!("/orgs/{}/hooks/{}", org, hook_id))
            .await
    }
}
