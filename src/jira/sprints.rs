use anyhow::Result;
use serde_json::{json, Value};

use super::JiraClient;
use crate::http::field_or_empty;

impl JiraClient {
    /// Dates are ISO 8601 strings, e.g. `2024-05-01T09:00:00.000Z`.
    pub async fn create_sprint(
        &self,
        board_id: u64,
        name: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<Value> {
        let body = json!({
            "name": name,
            "startDate": start_date,
            "endDate": end_date
        });

        self.api
            .post(&format!("/rest/agile/1.0/board/{}/sprint", board_id), &body)
            .await
    }

    pub async fn read_sprint(&self, sprint_id: u64) -> Result<Value> {
        self.api
            .get(&format!("/rest/agile/1.0/sprint/{}", sprint_id))
            .await
    }

    pub async fn update_sprint(
        &self,
        sprint_id: u64,
        name: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<Value> {
        let body = json!({
            "name": name,
            "startDate": start_date,
            "endDate": end_date
        });

        self.api
            .put(&format!("/rest/agile/1.0/sprint/{}", sprint_id), &body)
            .await
    }

    pub async fn delete_sprint(&self, sprint_id: u64) -> Result<()> {
        self.api
            .delete_unit(&format!("/rest/agile/1.0/sprint/{}", sprint_id))
            .await
    }

    pub async fn list_all_sprints(&self, board_id: u64) -> Result<Value> {
        let body = self
            .api
            .get(&format!("/rest/agile/1.0/board/{}/sprint", board_id))
            .await?;
        Ok(field_or_empty(body, "values"))
    }
}
