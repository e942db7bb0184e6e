use anyhow::Result;
use serde_json::{json, Value};

use super::types::NoteAction;
use super::GitLabClient;

impl GitLabClient {
    pub async fn create_issue(
        &self,
        project_id: u64,
        title: &str,
        description: &str,
    ) -> Result<Value> {
        self.api
            .post(
                &format!("/projects/{}/issues", project_id),
                &json!({ "title": title, "description": description }),
            )
            .await
    }

    /// `issue_iid` is the project-scoped issue number.
    pub async fn read_issue(&self, project_id: u64, issue_iid: u64) -> Result<Value> {
        self.api
            .get(&format!("/projects/{}/issues/{}", project_id, issue_iid))
            .await
    }

    pub async fn update_issue(
        &self,
        project_id: u64,
        issue_iid: u64,
        title: &str,
        description: &str,
    ) -> Result<Value> {
        self.api
            .put(
                &format!("/projects/{}/issues/{}", project_id, issue_iid),
                &json!({ "title": title, "description": description }),
            )
            .await
    }

    pub async fn delete_issue(&self, project_id: u64, issue_iid: u64) -> Result<()> {
        self.api
            .delete_unit(&format!("/projects/{}/issues/{}", project_id, issue_iid))
            .await
    }

    pub async fn list_issue_notes(&self, project_id: u64, issue_iid: u64) -> Result<Value> {
        self.api
            .get(&format!("/projects/{}/issues/{}/notes", project_id, issue_iid))
            .await
    }

    pub async fn list_issue_labels(&self, project_id: u64, issue_iid: u64) -> Result<Value> {
        self.api
            .get(&format!("/projects/{}/issues/{}/labels", project_id, issue_iid))
            .await
    }

    pub async fn manage_issue_notes(
        &self,
        project_id: u64,
        issue_iid: u64,
        action: &NoteAction,
    ) -> Result<()> {
        self.manage_notes(
            &format!("/projects/{}/issues/{}/notes", project_id, issue_iid),
            action,
        )
        .await
    }

    /// Replace the issue's labels.
    pub async fn manage_issue_labels(
        &self,
        project_id: u64,
        issue_iid: u64,
        labels: &[String],
    ) -> Result<Value> {
        self.api
            .put(
                &format!("/projects/{}/issues/{}", project_id, issue_iid),
                &json!({ "labels": labels.join(",") }),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::super::client::test_support::client;
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_issue() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/v4/projects/12/issues")
                    .json_body(json!({"title": "Flaky test", "description": "Fails on CI"}));
                then.status(201).json_body(json!({"iid": 3}));
            })
            .await;

        let issue = client(&server.base_url())
            .create_issue(12, "Flaky test", "Fails on CI")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(issue["iid"], 3);
    }

    #[tokio::test]
    async fn test_manage_issue_labels_joins_with_commas() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/api/v4/projects/12/issues/3")
                    .json_body(json!({"labels": "bug,ci"}));
                then.status(200).json_body(json!({"labels": ["bug", "ci"]}));
            })
            .await;

        let issue = client(&server.base_url())
            .manage_issue_labels(12, 3, &["bug".to_string(), "ci".to_string()])
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(issue["labels"][1], "ci");
    }

    #[tokio::test]
    async fn test_manage_issue_notes_delete() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/api/v4/projects/12/issues/3/notes/40");
                then.status(204);
            })
            .await;

        client(&server.base_url())
            .manage_issue_notes(12, 3, &NoteAction::Delete { note_id: 40 })
            .await
            .unwrap();
        mock.assert_async().await;
    }
}
