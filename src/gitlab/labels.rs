use anyhow::Result;
use serde_json::{json, Value};

use super::GitLabClient;

impl GitLabClient {
    /// `color` is a `#RRGGBB` hex string or a CSS color name.
    pub async fn create_label(&self, project_id: u64, name: &str, color: &str) -> Result<Value> {
        self.api
            .post(
                &format!("/projects/{}/labels", project_id),
                &json!({ "name": name, "color": color }),
            )
            .await
    }

    pub async fn read_label(&self, project_id: u64, label_id: u64) -> Result<Value> {
        self.api
            .get(&format!("/projects/{}/labels/{}", project_id, label_id))
            .await
    }

    pub async fn update_label(
        &self,
        project_id: u64,
        label_id: u64,
        name: &str,
        color: &str,
    ) -> Result<Value> {
        self.api
            .put(
                &format!("/projects/{}/labels/{}", project_id, label_id),
                &json!({ "name": name, "color": color }),
            )
            .await
    }

    pub async fn delete_label(&self, project_id: u64, label_id: u64) -> Result<()> {
        self.api
            .delete_unit(&format!("/projects/{}/labels/{}", project_id, label_id))
            .await
    }

    /// `due_date` is `YYYY-MM-DD`.
    pub async fn create_milestone(
        &self,
        project_id: u64,
        title: &str,
        description: &str,
        due_date: &str,
    ) -> Result<Value> {
        let body = json!({
            "title": title,
            "description": description,
            "due_date": due_date
        });

        self.api
            .post(&format!("/projects/{}/milestones", project_id), &body)
            .await
    }

    pub async fn read_milestone(&self, project_id: u64, milestone_id: u64) -> Result<Value> {
        self.api
            .get(&format!("/projects/{}/milestones/{}", project_id, milestone_id))
            .await
    }

    pub async fn update_milestone(
        &self,
        project_id: u64,
        milestone_id: u64,
        title: &str,
        description: &str,
        due_date: &str,
    ) -> Result<Value> {
        let body = json!({
            "title": title,
            "description": description,
            "due_date": due_date
        });

        self.api
            .put(
                &format!("/projects/{}/milestones/{}", project_id, milestone_id),
                &body,
            )
            .await
    }

    pub async fn delete_milestone(&self, project_id: u64, milestone_id: u64) -> Result<()> {
        self.api
            .delete_unit(&format!("/projects/{}/milestones/{}", project_id, milestone_id))
            .await
    }
}
