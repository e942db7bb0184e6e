use anyhow::Result;
use serde_json::{json, Value};

use super::types::NoteAction;
use super::GitLabClient;

impl GitLabClient {
    pub async fn create_merge_request(
        &self,
        project_id: u64,
        source_branch: &str,
        target_branch: &str,
        title: &str,
    ) -> Result<Value> {
        let body = json!({
            "source_branch": source_branch,
            "target_branch": target_branch,
            "title": title
        });

        self.api
            .post(&format!("/projects/{}/merge_requests", project_id), &body)
            .await
    }

    pub async fn read_merge_request(&self, project_id: u64, mr_iid: u64) -> Result<Value> {
        self.api
            .get(&format!("/projects/{}/merge_requests/{}", project_id, mr_iid))
            .await
    }

    pub async fn update_merge_request(
        &self,
        project_id: u64,
        mr_iid: u64,
        title: &str,
        description: &str,
    ) -> Result<Value> {
        self.api
            .put(
                &format!("/projects/{}/merge_requests/{}", project_id, mr_iid),
                &json!({ "title": title, "description": description }),
            )
            .await
    }

    pub async fn delete_merge_request(&self, project_id: u64, mr_iid: u64) -> Result<()> {
        self.api
            .delete_unit(&format!("/projects/{}/merge_requests/{}", project_id, mr_iid))
            .await
    }

    pub async fn list_merge_request_notes(&self, project_id: u64, mr_iid: u64) -> Result<Value> {
        self.api
            .get(&format!("/projects/{}/merge_requests/{}/notes", project_id, mr_iid))
            .await
    }

    pub async fn list_merge_request_commits(&self, project_id: u64, mr_iid: u64) -> Result<Value> {
        self.api
            .get(&format!("/projects/{}/merge_requests/{}/commits", project_id, mr_iid))
            .await
    }

    pub async fn manage_merge_request_notes(
        &self,
        project_id: u64,
        mr_iid: u64,
        action: &NoteAction,
    ) -> Result<()> {
        self.manage_notes(
            &format!("/projects/{}/merge_requests/{}/notes", project_id, mr_iid),
            action,
        )
        .await
    }
}
