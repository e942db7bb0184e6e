use std::collections::HashMap;

use anyhow::Result;
use serde_json::{json, Value};

use super::types::{GistFile, Page};
use super::GitHubClient;

impl GitHubClient {
    /// `files` maps file names to their contents.
    pub async fn create_gist(
        &self,
        files: &HashMap<String, GistFile>,
        description: &str,
        public: bool,
    ) -> Result<Value> {
        let body = json!({
            "files": files,
            "description": description,
            "public": public
        });

        self.api.post("/gists", &body).await
    }

    pub async fn read_gist(&self, gist_id: &str) -> Result<Value> {
        self.api.get(&format!("/gists/{}", gist_id)).await
    }

    pub async fn update_gist(
        &self,
        gist_id: &str,
        files: &HashMap<String, GistFile>,
        description: &str,
    ) -> Result<Value> {
        let body = json!({
            "files": files,
            "description": description
        });

        self.api.patch(&format!("/gists/{}", gist_id), &body).await
    }

    pub async fn delete_gist(&self, gist_id: &str) -> Result<()> {
        self.api.delete_unit(&format!("/gists/{}", gist_id)).await
    }

    pub async fn star_gist(&self, gist_id: &str) -> Result<()> {
        self.api.put_unit(&format!("/gists/{}/star", gist_id)).await
    }

    pub async fn unstar_gist(&self, gist_id: &str) -> Result<()> {
        self.api
            .delete_unit(&format!("/gists/{}/star", gist_id))
            .await
    }

    pub async fn fork_gist(&self, gist_id: &str) -> Result<Value> {
        self.api.post_empty(&format!("/gists/{}/forks", gist_id)).await
    }

    pub async fn list_starred_gists(&self, page: &Page) -> Result<Value> {
        self.api.get_with_query("/gists/starred", page).await
    }
}
