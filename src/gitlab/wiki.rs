use anyhow::Result;
use serde_json::{json, Value};

use super::GitLabClient;
use crate::http::encode_path_segment;

impl GitLabClient {
    pub async fn create_wiki_page(
        &self,
        project_id: u64,
        title: &str,
        content: &str,
    ) -> Result<Value> {
        self.api
            .post(
                &format!("/projects/{}/wikis", project_id),
                &json!({ "title": title, "content": content }),
            )
            .await
    }

    pub async fn read_wiki_page(&self, project_id: u64, slug: &str) -> Result<Value> {
        self.api
            .get(&format!(
                "/projects/{}/wikis/{}",
                project_id,
                encode_path_segment(slug)
            ))
            .await
    }

    pub async fn update_wiki_page(
        &self,
        project_id: u64,
        slug: &str,
        title: &str,
        content: &str,
    ) -> Result<Value> {
        self.api
            .put(
                &format!("/projects/{}/wikis/{}", project_id, encode_path_segment(slug)),
                &json!({ "title": title, "content": content }),
            )
            .await
    }

    pub async fn delete_wiki_page(&self, project_id: u64, slug: &str) -> Result<()> {
        self.api
            .delete_unit(&format!(
                "/projects/{}/wikis/{}",
                project_id,
                encode_path_segment(slug)
            ))
            .await
    }
}
