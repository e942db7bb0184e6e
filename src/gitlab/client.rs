use std::time::Duration;

use anyhow::Result;
use reqwest::Method;
use serde_json::json;

use super::types::NoteAction;
use crate::http::{create_authenticated_client, ApiClient, AuthType};

pub const GITLAB_URL: &str = "https://gitlab.com";

/// GitLab REST client. Every path is resolved under `<server>/api/v4`.
pub struct GitLabClient {
    pub(super) api: ApiClient,
}

impl GitLabClient {
    pub fn new(server_url: &str, token: &str) -> Result<Self> {
        Self::with_timeout(server_url, token, None)
    }

    pub fn with_timeout(server_url: &str, token: &str, timeout: Option<Duration>) -> Result<Self> {
        let client = create_authenticated_client(AuthType::Bearer(token), None, timeout)?;
        let base_url = format!("{}/api/v4", server_url.trim_end_matches('/'));

        Ok(Self {
            api: ApiClient::new(client, &base_url, "GitLab"),
        })
    }

    pub async fn test_connection(&self) -> Result<()> {
        self.api.get("/user").await?;
        Ok(())
    }

    /// Add, edit or remove a note under `notes_path` (an issue's or merge request's `/notes`).
    pub(super) async fn manage_notes(&self, notes_path: &str, action: &NoteAction) -> Result<()> {
        let request = match action {
            NoteAction::Add { body } => self
                .api
                .request(Method::POST, notes_path)
                .json(&json!({ "body": body })),
            NoteAction::Update { note_id, body } => self
                .api
                .request(Method::PUT, &format!("{}/{}", notes_path, note_id))
                .json(&json!({ "body": body })),
            NoteAction::Delete { note_id } => self
                .api
                .request(Method::DELETE, &format!("{}/{}", notes_path, note_id)),
        };

        self.api.execute_unit(request).await
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{client, AUTH};
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn test_api_root_appended() {
        let client = GitLabClient::new("https://gitlab.example.com/", "t").unwrap();
        assert_eq!(client.api.base_url(), "https://gitlab.example.com/api/v4");
    }

    #[tokio::test]
    async fn test_connection_uses_bearer() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v4/user").header("authorization", AUTH);
                then.status(200).json_body(json!({"id": 1, "username": "root"}));
            })
            .await;

        client(&server.base_url()).test_connection().await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_manage_notes_dispatch() {
        let server = MockServer::start_async().await;
        let add = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/v4/projects/1/issues/2/notes")
                    .json_body(json!({"body": "first"}));
                then.status(201).json_body(json!({"id": 10}));
            })
            .await;
        let update = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/api/v4/projects/1/issues/2/notes/10")
                    .json_body(json!({"body": "edited"}));
                then.status(200).json_body(json!({"id": 10}));
            })
            .await;
        let delete = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/api/v4/projects/1/issues/2/notes/10");
                then.status(204);
            })
            .await;

        let client = client(&server.base_url());
        let notes = "/projects/1/issues/2/notes";
        client
            .manage_notes(notes, &NoteAction::Add { body: "first".to_string() })
            .await
            .unwrap();
        client
            .manage_notes(
                notes,
                &NoteAction::Update {
                    note_id: 10,
                    body: "edited".to_string(),
                },
            )
            .await
            .unwrap();
        client
            .manage_notes(notes, &NoteAction::Delete { note_id: 10 })
            .await
            .unwrap();

        add.assert_async().await;
        update.assert_async().await;
        delete.assert_async().await;
    }
}
