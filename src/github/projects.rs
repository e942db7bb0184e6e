use anyhow::Result;
use reqwest::Method;
use serde_json::{json, Value};

use super::client::PROJECTS_PREVIEW;
use super::GitHubClient;

// Classic projects are only served under the inertia preview media type.
impl GitHubClient {
    pub async fn create_project(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
        body: &str,
    ) -> Result<Value> {
        let request = self
            .preview(
                Method::POST,
                &format!("/repos/{}/{}/projects", owner, repo),
                PROJECTS_PREVIEW,
            )
            .json(&json!({ "name": name, "body": body }));

        self.api.execute(request).await
    }

    pub async fn read_project(&self, project_id: u64) -> Result<Value> {
        let request = self.preview(
            Method::GET,
            &format!("/projects/{}", project_id),
            PROJECTS_PREVIEW,
        );

        self.api.execute(request).await
    }

    pub async fn update_project(&self, project_id: u64, name: &str, body: &str) -> Result<Value> {
        let request = self
            .preview(
                Method::PATCH,
                &format!("/projects/{}", project_id),
                PROJECTS_PREVIEW,
            )
            .json(&json!({ "name": name, "body": body }));

        self.api.execute(request).await
    }

    pub async fn delete_project(&self, project_id: u64) -> Result<()> {
        let request = self.preview(
            Method::DELETE,
            &format!("/projects/{}", project_id),
            PROJECTS_PREVIEW,
        );

        self.api.execute_unit(request).await
    }

    pub async fn add_project_column(&self, project_id: u64, name: &str) -> Result<Value> {
        let request = self
            .preview(
                Method::POST,
                &format!("/projects/{}/columns", project_id),
                PROJECTS_PREVIEW,
            )
            .json(&json!({ "name": name }));

        self.api.execute(request).await
    }

    /// Renames a column.
    pub async fn manage_project_column(&self, column_id: u64, name: &str) -> Result<Value> {
        let request = self
            .preview(
                Method::PATCH,
                &format!("/projects/columns/{}", column_id),
                PROJECTS_PREVIEW,
            )
            .json(&json!({ "name": name }));

        self.api.execute(request).await
    }

    pub async fn add_project_card(&self, column_id: u64, note: &str) -> Result<Value> {
        let request = self
            .preview(
                Method::POST,
                &format!("/projects/columns/{}/cards", column_id),
                PROJECTS_PREVIEW,
            )
            .json(&json!({ "note": note }));

        self.api.execute(request).await
    }

    /// Replaces a card's note.
    pub async fn manage_project_card(&self, card_id: u64, note: &str) -> Result<Value> {
        let request = self
            .preview(
                Method::PATCH,
                &format!("/projects/columns/cards/{}", card_id),
                PROJECTS_PREVIEW,
            )
            .json(&json!({ "note": note }));

        self.api.execute(request).await
    }
}
