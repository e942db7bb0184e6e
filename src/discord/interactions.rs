use anyhow::Result;
use serde_json::Value;

use super::types::CommandParams;
use super::DiscordClient;

impl DiscordClient {
    pub async fn create_interaction(
        &self,
        application_id: &str,
        command: &CommandParams,
    ) -> Result<Value> {
        self.api
            .post(&format!("/applications/{}/commands", application_id), command)
            .await
    }

    pub async fn get_interaction_details(
        &self,
        application_id: &str,
        command_id: &str,
    ) -> Result<Value> {
        self.api
            .get(&format!("/applications/{}/commands/{}", application_id, command_id))
            .await
    }

    pub async fn update_interaction(
        &self,
        application_id: &str,
        command_id: &str,
        command: &CommandParams,
    ) -> Result<Value> {
        self.api
            .patch(
                &format!("/applications/{}/commands/{}", application_id, command_id),
                command,
            )
            .await
    }

    pub async fn delete_interaction(
        &self,
        application_id: &str,
        command_id: &str,
    ) -> Result<Value> {
        self.api
            .delete(&format!("/applications/{}/commands/{}", application_id, command_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::super::client::test_support::client;
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn ping_command() -> CommandParams {
        CommandParams {
            name: "ping".to_string(),
            description: "Check latency".to_string(),
            options: vec![json!({"type": 3, "name": "target", "description": "host"})],
        }
    }

    #[tokio::test]
    async fn test_create_interaction_payload() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/applications/app1/commands")
                    .json_body(json!({
                        "name": "ping",
                        "description": "Check latency",
                        "options": [{"type": 3, "name": "target", "description": "host"}]
                    }));
                then.status(201).json_body(json!({"id": "cmd1", "name": "ping"}));
            })
            .await;

        let created = client(&server.base_url())
            .create_interaction("app1", &ping_command())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(created["id"], "cmd1");
    }

    #[tokio::test]
    async fn test_delete_interaction_no_content() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/applications/app1/commands/cmd1");
                then.status(204);
            })
            .await;

        let result = client(&server.base_url())
            .delete_interaction("app1", "cmd1")
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(result.is_null());
    }
}
