use crate::core::{ApiResponse, ConfigProvider, StoryApi, StoryPayload};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_STORIES_ENDPOINT: &str = "https://api.clubhouse.io/api/v3/stories";

/// `StoryApi` over HTTP. The token travels as the `token` query parameter
/// and the story as a form-encoded body.
pub struct ClubhouseClient {
    client: Client,
    endpoint: String,
    timeout: Option<Duration>,
}

impl ClubhouseClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.api_endpoint()).with_timeout(config.timeout())
    }
}

#[async_trait]
impl StoryApi for ClubhouseClient {
    async fn create_story(&self, token: &str, payload: &StoryPayload) -> Result<ApiResponse> {
        let mut request = self
            .client
            .post(&self.endpoint)
            .query(&[("token", token)])
            .form(&payload.form_fields());

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        tracing::debug!("📡 POST {}", self.endpoint);
        let response = request.send().await?;

        let status = response.status();
        tracing::debug!("📡 API response status: {}", status);

        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.text().await?;

        Ok(ApiResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().map(str::to_string),
            headers,
            body,
        })
    }
}
