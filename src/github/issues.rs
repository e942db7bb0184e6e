use anyhow::Result;
use reqwest::Method;
use serde_json::{json, Value};

use super::types::{IssueUpdate, NewIssue, Page};
use super::GitHubClient;

impl GitHubClient {
    pub async fn create_issue(&self, owner: &str, repo: &str, issue: &NewIssue) -> Result<Value> {
        self.api
            .post(&format!("/repos/{}/{}/issues", owner, repo), issue)
            .await
    }

    pub async fn read_issue(&self, owner: &str, repo: &str, issue_number: u64) -> Result<Value> {
        self.api
            .get(&format!("/repos/{}/{}/issues/{}", owner, repo, issue_number))
            .await
    }

    pub async fn update_issue(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        update: &IssueUpdate,
    ) -> Result<Value> {
        self.api
            .patch(
                &format!("/repos/{}/{}/issues/{}", owner, repo, issue_number),
                update,
            )
            .await
    }

    /// `state` is `open`, `closed` or `all`.
    pub async fn list_issues(
        &self,
        owner: &str,
        repo: &str,
        state: &str,
        page: &Page,
    ) -> Result<Value> {
        let request = self
            .api
            .request(Method::GET, &format!("/repos/{}/{}/issues", owner, repo))
            .query(&[("state", state)])
            .query(page);

        self.api.execute(request).await
    }

    pub async fn comment_on_issue(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<Value> {
        self.api
            .post(
                &format!("/repos/{}/{}/issues/{}/comments", owner, repo, issue_number),
                &json!({ "body": body }),
            )
            .await
    }

    pub async fn add_labels(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        labels: &[String],
    ) -> Result<Value> {
        self.api
            .post(
                &format!("/repos/{}/{}/issues/{}/labels", owner, repo, issue_number),
                &json!({ "labels": labels }),
            )
            .await
    }

    /// Removes every label from the issue.
    pub async fn remove_labels(&self, owner: &str, repo: &str, issue_number: u64) -> Result<()> {
        self.api
            .delete_unit(&format!("/repos/{}/{}/issues/{}/labels", owner, repo, issue_number))
            .await
    }

    pub async fn add_assignees(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        assignees: &[String],
    ) -> Result<Value> {
        self.api
            .post(
                &format!("/repos/{}/{}/issues/{}/assignees", owner, repo, issue_number),
                &json!({ "assignees": assignees }),
            )
            .await
    }

    pub async fn remove_assignees(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        assignees: &[String],
    ) -> Result<()> {
        let request = self
            .api
            .request(
                Method::DELETE,
                &format!("/repos/{}/{}/issues/{}/assignees", owner, repo, issue_number),
            )
            .json(&json!({ "assignees": assignees }));

        self.api.execute_unit(request).await
    }

    pub async fn add_milestone(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        milestone: u64,
    ) -> Result<Value> {
        self.api
            .patch(
                &format!("/repos/{}/{}/issues/{}", owner, repo, issue_number),
                &json!({ "milestone": milestone }),
            )
            .await
    }

    /// Clears the milestone by sending an explicit `null`.
    pub async fn remove_milestone(&self, owner: &str, repo: &str, issue_number: u64) -> Result<()> {
        let request = self
            .api
            .request(
                Method::PATCH,
                &format!("/repos/{}/{}/issues/{}", owner, repo, issue_number),
            )
            .json(&json!({ "milestone": Value::Null }));

        self.api.execute_unit(request).await
    }
}
