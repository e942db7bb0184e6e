use anyhow::Result;
use serde_json::{json, Value};

use super::JiraClient;

fn worklog_body(time_spent: &str, started: &str, adjust_for_dst: bool) -> Value {
    json!({
        "timeSpent": time_spent,
        "started": started,
        "adjustForDST": adjust_for_dst
    })
}

impl JiraClient {
    /// `time_spent` uses Jira duration notation (`3h 20m`); `started` is an ISO 8601 timestamp.
    pub async fn create_worklog(
        &self,
        issue_key: &str,
        time_spent: &str,
        started: &str,
        adjust_for_dst: bool,
    ) -> Result<Value> {
        self.api
            .post(
                &format!("/rest/api/2/issue/{}/worklog", issue_key),
                &worklog_body(time_spent, started, adjust_for_dst),
            )
            .await
    }

    pub async fn read_worklog(&self, worklog_id: &str) -> Result<Value> {
        self.api
            .get(&format!("/rest/api/2/worklog/{}", worklog_id))
            .await
    }

    pub async fn update_worklog(
        &self,
        worklog_id: &str,
        time_spent: &str,
        started: &str,
        adjust_for_dst: bool,
    ) -> Result<Value> {
        self.api
            .put(
                &format!("/rest/api/2/worklog/{}", worklog_id),
                &worklog_body(time_spent, started, adjust_for_dst),
            )
            .await
    }

    pub async fn delete_worklog(&self, worklog_id: &str) -> Result<()> {
        self.api
            .delete_unit(&format!("/rest/api/2/worklog/{}", worklog_id))
            .await
    }
}
