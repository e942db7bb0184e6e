use anyhow::Result;
use reqwest::Method;
use serde_json::Value;

use super::ConfluenceClient;

impl ConfluenceClient {
    pub async fn get_user_details(&self, username: &str) -> Result<Value> {
        self.api
            .get_with_query("/rest/api/user", &[("username", username)])
            .await
    }

    pub async fn update_user_details(&self, username: &str, update: &Value) -> Result<Value> {
        let request = self
            .api
            .request(Method::PUT, "/rest/api/user")
            .query(&[("username", username)])
            .json(update);

        self.api.execute(request).await
    }
}
