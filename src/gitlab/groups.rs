use anyhow::Result;
use serde_json::{json, Value};

use super::types::MemberAction;
use super::GitLabClient;

/// GitLab's default access level for new members (Developer).
pub const DEVELOPER_ACCESS: u32 = 30;

impl GitLabClient {
    pub async fn create_group(&self, name: &str, path: &str) -> Result<Value> {
        self.api
            .post("/groups", &json!({ "name": name, "path": path }))
            .await
    }

    pub async fn read_group(&self, group_id: u64) -> Result<Value> {
        self.api.get(&format!("/groups/{}", group_id)).await
    }

    pub async fn update_group(&self, group_id: u64, name: &str, path: &str) -> Result<Value> {
        self.api
            .put(
                &format!("/groups/{}", group_id),
                &json!({ "name": name, "path": path }),
            )
            .await
    }

    pub async fn delete_group(&self, group_id: u64) -> Result<()> {
        self.api.delete_unit(&format!("/groups/{}", group_id)).await
    }

    pub async fn list_group_members(&self, group_id: u64) -> Result<Value> {
        self.api.get(&format!("/groups/{}/members", group_id)).await
    }

    pub async fn list_group_projects(&self, group_id: u64) -> Result<Value> {
        self.api.get(&format!("/groups/{}/projects", group_id)).await
    }

    /// Add a user with `access_level`, or remove them (the level is then ignored).
    pub async fn manage_group_members(
        &self,
        group_id: u64,
        user_id: u64,
        action: MemberAction,
        access_level: u32,
    ) -> Result<()> {
        let request = match action {
            MemberAction::Add => self
                .api
                .request(action.method(), &format!("/groups/{}/members", group_id))
                .json(&json!({ "user_id": user_id, "access_level": access_level })),
            MemberAction::Remove => self.api.request(
                action.method(),
                &format!("/groups/{}/members/{}", group_id, user_id),
            ),
        };

        self.api.execute_unit(request).await
    }

    /// Transfer a project into the group, or detach it.
    pub async fn manage_group_projects(
        &self,
        group_id: u64,
        project_id: u64,
        action: MemberAction,
    ) -> Result<()> {
        let request = self.api.request(
            action.method(),
            &format!("/groups/{}/projects/{}", group_id, project_id),
        );

        self.api.execute_unit(request).await
    }
}
