use anyhow::Result;
use reqwest::Method;
use serde_json::{json, Value};

use super::types::TeamUpdate;
use super::GitHubClient;

impl GitHubClient {
    pub async fn create_organization(&self, name: &str, email: &str) -> Result<Value> {
        self.api
            .post("/orgs", &json!({ "name": name, "email": email }))
            .await
    }

    pub async fn read_organization(&self, org: &str) -> Result<Value> {
        self.api.get(&format!("/orgs/{}", org)).await
    }

    /// `settings` is sent as-is, e.g. `{"description": ..., "billing_email": ...}`.
    pub async fn update_organization(&self, org: &str, settings: &Value) -> Result<Value> {
        self.api.patch(&format!("/orgs/{}", org), settings).await
    }

    pub async fn delete_organization(&self, org: &str) -> Result<()> {
        self.api.delete_unit(&format!("/orgs/{}", org)).await
    }

    /// Invite or update a member. `role` is `member` or `admin`.
    pub async fn add_members(&self, org: &str, username: &str, role: &str) -> Result<()> {
        let request = self
            .api
            .request(Method::PUT, &format!("/orgs/{}/memberships/{}", org, username))
            .json(&json!({ "role": role }));

        self.api.execute_unit(request).await
    }

    pub async fn remove_members(&self, org: &str, username: &str) -> Result<()> {
        self.api
            .delete_unit(&format!("/orgs/{}/memberships/{}", org, username))
            .await
    }

    pub async fn list_teams(&self, org: &str) -> Result<Value> {
        self.api.get(&format!("/orgs/{}/teams", org)).await
    }

    pub async fn manage_teams(&self, org: &str, team_id: u64, team: &TeamUpdate) -> Result<Value> {
        self.api
            .patch(&format!("/orgs/{}/teams/{}", org, team_id), team)
            .await
    }
}
