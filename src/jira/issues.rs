use std::path::Path;

use anyhow::Result;
use reqwest::multipart::Form;
use reqwest::Method;
use serde_json::{json, Value};

use super::JiraClient;
use crate::http::file_part;

const DEFAULT_SEARCH_FIELDS: &str = "summary,key";

impl JiraClient {
    pub async fn create_issue(
        &self,
        project_key: &str,
        issue_type: &str,
        summary: &str,
        description: &str,
    ) -> Result<Value> {
        let body = json!({
            "fields": {
                "project": { "key": project_key },
                "issuetype": { "name": issue_type },
                "summary": summary,
                "description": description
            }
        });

        self.api.post("/rest/api/2/issue", &body).await
    }

    pub async fn read_issue(&self, issue_key: &str) -> Result<Value> {
        self.api
            .get(&format!("/rest/api/2/issue/{}", issue_key))
            .await
    }

    /// `fields` is sent as the issue's `fields` object unchanged.
    pub async fn update_issue(&self, issue_key: &str, fields: &Value) -> Result<Value> {
        self.api
            .put(
                &format!("/rest/api/2/issue/{}", issue_key),
                &json!({ "fields": fields }),
            )
            .await
    }

    pub async fn delete_issue(&self, issue_key: &str) -> Result<()> {
        self.api
            .delete_unit(&format!("/rest/api/2/issue/{}", issue_key))
            .await
    }

    /// Run a JQL search. Only `summary` and `key` are returned unless `fields` names others.
    pub async fn list_issues_by_filter(&self, jql: &str, fields: Option<&[&str]>) -> Result<Value> {
        let fields = match fields {
            Some(fields) if !fields.is_empty() => fields.join(","),
            _ => DEFAULT_SEARCH_FIELDS.to_string(),
        };

        self.api
            .get_with_query(
                "/rest/api/2/search",
                &[("jql", jql), ("fields", fields.as_str())],
            )
            .await
    }

    pub async fn add_comment_to_issue(&self, issue_key: &str, comment: &str) -> Result<Value> {
        self.api
            .post(
                &format!("/rest/api/2/issue/{}/comment", issue_key),
                &json!({ "body": comment }),
            )
            .await
    }

    pub async fn update_comment_in_issue(
        &self,
        issue_key: &str,
        comment_id: &str,
        new_comment: &str,
    ) -> Result<Value> {
        self.api
            .put(
                &format!("/rest/api/2/issue/{}/comment/{}", issue_key, comment_id),
                &json!({ "body": new_comment }),
            )
            .await
    }

    pub async fn delete_comment_from_issue(&self, issue_key: &str, comment_id: &str) -> Result<()> {
        self.api
            .delete_unit(&format!("/rest/api/2/issue/{}/comment/{}", issue_key, comment_id))
            .await
    }

    pub async fn add_attachment_to_issue(
        &self,
        issue_key: &str,
        file_path: &Path,
    ) -> Result<Value> {
        let form = Form::new().part("file", file_part(file_path).await?);

        let request = self
            .api
            .request(
                Method::POST,
                &format!("/rest/api/2/issue/{}/attachments", issue_key),
            )
            .header("X-Atlassian-Token", "no-check")
            .multipart(form);

        self.api.execute(request).await
    }

    pub async fn delete_attachment_from_issue(&self, attachment_id: &str) -> Result<()> {
        self.api
            .delete_unit(&format!("/rest/api/2/attachment/{}", attachment_id))
            .await
    }
}
