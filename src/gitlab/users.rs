use anyhow::Result;
use serde_json::{json, Value};

use super::types::MemberAction;
use super::GitLabClient;

impl GitLabClient {
    pub async fn get_user_details(&self, user_id: u64) -> Result<Value> {
        self.api.get(&format!("/users/{}", user_id)).await
    }

    pub async fn update_user_details(
        &self,
        user_id: u64,
        name: &str,
        email: &str,
    ) -> Result<Value> {
        self.api
            .put(
                &format!("/users/{}", user_id),
                &json!({ "name": name, "email": email }),
            )
            .await
    }

    pub async fn list_user_projects(&self, user_id: u64) -> Result<Value> {
        self.api.get(&format!("/users/{}/projects", user_id)).await
    }

    pub async fn list_user_ssh_keys(&self, user_id: u64) -> Result<Value> {
        self.api.get(&format!("/users/{}/keys", user_id)).await
    }

    pub async fn list_user_emails(&self, user_id: u64) -> Result<Value> {
        self.api.get(&format!("/users/{}/emails", user_id)).await
    }

    pub async fn manage_user_projects(
        &self,
        user_id: u64,
        project_id: u64,
        action: MemberAction,
    ) -> Result<Value> {
        let request = self.api.request(
            action.method(),
            &format!("/users/{}/projects/{}", user_id, project_id),
        );

        self.api.execute(request).await
    }

    pub async fn manage_user_ssh_keys(
        &self,
        user_id: u64,
        key_id: u64,
        action: MemberAction,
    ) -> Result<()> {
        let request = self
            .api
            .request(action.method(), &format!("/users/{}/keys/{}", user_id, key_id));

        self.api.execute_unit(request).await
    }

    pub async fn manage_user_emails(
        &self,
        user_id: u64,
        email_id: u64,
        action: MemberAction,
    ) -> Result<()> {
        let request = self.api.request(
            action.method(),
            &format!("/users/{}/emails/{}", user_id, email_id),
        );

        self.api.execute_unit(request).await
    }
}
