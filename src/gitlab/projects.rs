use anyhow::Result;
use serde_json::{json, Value};

use super::types::Visibility;
use super::GitLabClient;

impl GitLabClient {
    pub async fn create_project(
        &self,
        name: &str,
        description: &str,
        visibility: Visibility,
    ) -> Result<Value> {
        let body = json!({
            "name": name,
            "description": description,
            "visibility": visibility
        });

        self.api.post("/projects", &body).await
    }

    pub async fn read_project(&self, project_id: u64) -> Result<Value> {
        self.api.get(&format!("/projects/{}", project_id)).await
    }

    pub async fn update_project(
        &self,
        project_id: u64,
        name: &str,
        description: &str,
        visibility: Visibility,
    ) -> Result<Value> {
        let body = json!({
            "name": name,
            "description": description,
            "visibility": visibility
        });

        self.api
            .put(&format!("/projects/{}", project_id), &body)
            .await
    }

    pub async fn delete_project(&self, project_id: u64) -> Result<()> {
        self.api
            .delete_unit(&format!("/projects/{}", project_id))
            .await
    }

    /// Fork into the token owner's namespace.
    pub async fn fork_project(&self, project_id: u64) -> Result<Value> {
        self.api
            .post_empty(&format!("/projects/{}/fork", project_id))
            .await
    }

    pub async fn list_project_members(&self, project_id: u64) -> Result<Value> {
        self.api
            .get(&format!("/projects/{}/members", project_id))
            .await
    }

    pub async fn manage_project_members(
        &self,
        project_id: u64,
        user_id: u64,
        access_level: u32,
    ) -> Result<Value> {
        self.api
            .post(
                &format!("/projects/{}/members", project_id),
                &json!({ "user_id": user_id, "access_level": access_level }),
            )
            .await
    }

    pub async fn list_project_hooks(&self, project_id: u64) -> Result<Value> {
        self.api.get(&format!("/projects/{}/hooks", project_id)).await
    }

    /// Register a project hook. `events` may contain `push`, `issues` and `merge_requests`.
    pub async fn manage_project_hooks(
        &self,
        project_id: u64,
        hook_url: &str,
        events: &[&str],
    ) -> Result<Value> {
        let body = json!({
            "url": hook_url,
            "push_events": events.contains(&"push"),
            "issues_events": events.contains(&"issues"),
            "merge_requests_events": events.contains(&"merge_requests")
        });

        self.api
            .post(&format!("/projects/{}/hooks", project_id), &body)
            .await
    }

    pub async fn list_project_issues(&self, project_id: u64) -> Result<Value> {
        self.api
            .get(&format!("/projects/{}/issues", project_id))
            .await
    }

    pub async fn manage_project_issues(
        &self,
        project_id: u64,
        issue_iid: u64,
        title: &str,
        description: &str,
    ) -> Result<Value> {
        self.update_issue(project_id, issue_iid, title, description)
            .await
    }

    pub async fn list_project_merge_requests(&self, project_id: u64) -> Result<Value> {
        self.api
            .get(&format!("/projects/{}/merge_requests", project_id))
            .await
    }

    pub async fn manage_project_merge_requests(
        &self,
        project_id: u64,
        mr_iid: u64,
        title: &str,
        description: &str,
    ) -> Result<Value> {
        self.update_merge_request(project_id, mr_iid, title, description)
            .await
    }
}
