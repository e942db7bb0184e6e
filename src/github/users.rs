use anyhow::Result;
use serde_json::Value;

use super::types::{Page, ProfileUpdate};
use super::GitHubClient;

impl GitHubClient {
    pub async fn get_user_details(&self, username: &str) -> Result<Value> {
        self.api.get(&format!("/users/{}", username)).await
    }

    /// Update the authenticated user's profile.
    pub async fn update_user_profile(&self, profile: &ProfileUpdate) -> Result<Value> {
        self.api.patch("/user", profile).await
    }

    pub async fn list_followers(&self, username: &str, page: &Page) -> Result<Value> {
        self.api
            .get_with_query(&format!("/users/{}/followers", username), page)
            .await
    }

    pub async fn list_following(&self, username: &str, page: &Page) -> Result<Value> {
        self.api
            .get_with_query(&format!("/users/{}/following", username), page)
            .await
    }

    pub async fn follow_user(&self, username: &str) -> Result<()> {
        self.api
            .put_unit(&format!("/user/following/{}", username))
            .await
    }

    pub async fn unfollow_user(&self, username: &str) -> Result<()> {
        self.api
            .delete_unit(&format!("/user/following/{}", username))
            .await
    }
}
