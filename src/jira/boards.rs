use anyhow::{bail, Result};
use serde_json::{json, Value};

use super::JiraClient;
use crate::http::field_or_empty;

impl JiraClient {
    /// `board_type` is `scrum` or `kanban`.
    pub async fn create_board(
        &self,
        name: &str,
        board_type: &str,
        project_key: &str,
    ) -> Result<Value> {
        let body = json!({
            "name": name,
            "type": board_type,
            "location": { "projectKey": project_key }
        });

        self.api.post("/rest/agile/1.0/board", &body).await
    }

    pub async fn read_board(&self, board_id: u64) -> Result<Value> {
        self.api
            .get(&format!("/rest/agile/1.0/board/{}", board_id))
            .await
    }

    /// The agile API has no endpoint for renaming or retyping a board; no request is made.
    pub async fn update_board(
        &self,
        board_id: u64,
        _name: &str,
        _board_type: &str,
    ) -> Result<Value> {
        bail!("Updating board {} is not supported by the Jira API", board_id)
    }

    pub async fn delete_board(&self, board_id: u64) -> Result<()> {
        self.api
            .delete_unit(&format!("/rest/agile/1.0/board/{}", board_id))
            .await
    }

    /// Returns the `values` list of the first result page.
    pub async fn list_all_boards(&self) -> Result<Value> {
        let body = self.api.get("/rest/agile/1.0/board").await?;
        Ok(field_or_empty(body, "values"))
    }
}
