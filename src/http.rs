use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::multipart::Part;
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde_json::Value;

pub const USER_AGENT: &str = concat!("prompt-actions/", env!("CARGO_PKG_VERSION"));

/// How credentials are attached to every request of a client.
pub enum AuthType<'a> {
    Bearer(&'a str),
    Token(&'a str),
    Bot(&'a str),
    Basic {
        username: &'a str,
        password: &'a str,
    },
}

impl AuthType<'_> {
    pub fn header_value(&self) -> String {
        match self {
            AuthType::Bearer(token) => format!("Bearer {}", token),
            AuthType::Token(token) => format!("token {}", token),
            AuthType::Bot(token) => format!("Bot {}", token),
            AuthType::Basic { username, password } => format!(
                "Basic {}",
                STANDARD.encode(format!("{}:{}", username, password))
            ),
        }
    }
}

pub fn create_authenticated_client(
    auth: AuthType<'_>,
    extra_headers: Option<HeaderMap>,
    timeout: Option<Duration>,
) -> Result<reqwest::Client> {
    let mut headers = HeaderMap::new();

    let mut auth_value = HeaderValue::from_str(&auth.header_value()).context("Invalid token")?;
    auth_value.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth_value);

    if let Some(extra) = extra_headers {
        headers.extend(extra);
    }

    let mut builder = reqwest::Client::builder()
        .default_headers(headers)
        .user_agent(USER_AGENT);

    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    builder.build().context("Failed to create HTTP client")
}

pub async fn check_response(
    response: reqwest::Response,
    service_name: &str,
) -> Result<reqwest::Response> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::error!("{} API error: {} - {}", service_name, status, body);
        bail!("{} API error: {} - {}", service_name, status, body);
    }
    Ok(response)
}

/// Sends the request and parses a JSON body. An empty success body yields `Value::Null`.
pub async fn send_json(request: RequestBuilder, service_name: &str) -> Result<Value> {
    let response = request
        .send()
        .await
        .with_context(|| format!("Failed to send request to {}", service_name))?;

    let status = response.status();
    let response_text = response
        .text()
        .await
        .with_context(|| format!("Failed to read {} response", service_name))?;

    tracing::debug!(
        "{} response: status={}, body={}",
        service_name,
        status,
        response_text
    );

    if !status.is_success() {
        tracing::error!("{} API error: {} - {}", service_name, status, response_text);
        bail!("{} API error: {} - {}", service_name, status, response_text);
    }

    parse_body(&response_text, service_name)
}

/// Sends the request and only checks the status; the body is discarded.
pub async fn send_unit(request: RequestBuilder, service_name: &str) -> Result<()> {
    let response = request
        .send()
        .await
        .with_context(|| format!("Failed to send request to {}", service_name))?;

    tracing::debug!("{} response: status={}", service_name, response.status());

    check_response(response, service_name).await?;
    Ok(())
}

fn parse_body(text: &str, service_name: &str) -> Result<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).with_context(|| format!("Failed to parse {} response", service_name))
}

/// Pulls `key` out of a response object, falling back to an empty list.
/// A bare array response is already the list and is returned unchanged.
pub fn field_or_empty(mut body: Value, key: &str) -> Value {
    if body.is_array() {
        return body;
    }
    match body.get_mut(key) {
        Some(field) => field.take(),
        None => Value::Array(Vec::new()),
    }
}

pub fn encode_path_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// Reads a file from disk into a multipart part named after the file.
pub async fn file_part(path: &Path) -> Result<Part> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "file".to_string());

    Ok(Part::bytes(bytes).file_name(file_name))
}

/// A configured HTTP client bound to one provider's base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    service_name: &'static str,
}

impl ApiClient {
    pub fn new(client: reqwest::Client, base_url: &str, service_name: &'static str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            service_name,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn service_name(&self) -> &'static str {
        self.service_name
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!("{} {}: url={}", self.service_name, method, url);
        self.client.request(method, url)
    }

    pub async fn execute(&self, request: RequestBuilder) -> Result<Value> {
        send_json(request, self.service_name).await
    }

    pub async fn execute_unit(&self, request: RequestBuilder) -> Result<()> {
        send_unit(request, self.service_name).await
    }

    pub async fn get(&self, path: &str) -> Result<Value> {
        self.execute(self.request(Method::GET, path)).await
    }

    pub async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<Value> {
        self.execute(self.request(Method::GET, path).query(query)).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        self.execute(self.request(Method::POST, path).json(body)).await
    }

    pub async fn post_empty(&self, path: &str) -> Result<Value> {
        self.execute(self.request(Method::POST, path)).await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        self.execute(self.request(Method::PUT, path).json(body)).await
    }

    pub async fn put_empty(&self, path: &str) -> Result<Value> {
        self.execute(self.request(Method::PUT, path)).await
    }

    pub async fn put_unit(&self, path: &str) -> Result<()> {
        self.execute_unit(self.request(Method::PUT, path)).await
    }

    pub async fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        self.execute(self.request(Method::PATCH, path).json(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value> {
        self.execute(self.request(Method::DELETE, path)).await
    }

    pub async fn delete_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<Value> {
        self.execute(self.request(Method::DELETE, path).query(query)).await
    }

    pub async fn delete_with_body<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value> {
        self.execute(self.request(Method::DELETE, path).json(body)).await
    }

    pub async fn delete_unit(&self, path: &str) -> Result<()> {
        self.execute_unit(self.request(Method::DELETE, path)).await
    }

    pub async fn download(&self, path: &str) -> Result<Vec<u8>> {
        let response = self
            .request(Method::GET, path)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", self.service_name))?;

        let response = check_response(response, self.service_name).await?;

        let bytes = response
            .bytes()
            .await
            .with_context(|| format!("Failed to read {} download", self.service_name))?;

        Ok(bytes.to_vec())
    }
}
