use crate::core::{ApiResponse, ConfigProvider, StoryApi};
use crate::utils::error::Result;

/// Runs the create-story use case once per call to `run`.
pub struct StoryCreator<A: StoryApi, C: ConfigProvider> {
    api: A,
    config: C,
}

impl<A: StoryApi, C: ConfigProvider> StoryCreator<A, C> {
    pub fn new(api: A, config: C) -> Self {
        Self { api, config }
    }

    pub async fn run(&self) -> Result<ApiResponse> {
        let payload = self.config.story_payload();
        tracing::info!(
            "📝 Creating story '{}' in project {}",
            payload.name,
            payload.project_id
        );
        let payload_json = serde_json::to_string(&payload)?;
        tracing::debug!("Story payload: {}", payload_json);

        let response = self.api.create_story(self.config.token(), &payload).await?;

        if response.is_success() {
            tracing::info!("✅ Story request accepted with status {}", response.status);
        } else {
            tracing::warn!("🔶 Story request answered with status {}", response.status);
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StoryPayload;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    #[derive(Clone, Default)]
    struct SpyApi {
        calls: Arc<Mutex<Vec<(String, StoryPayload)>>>,
        status: u16,
    }

    impl SpyApi {
        fn returning(status: u16) -> Self {
            Self {
                calls: Arc::default(),
                status,
            }
        }

        fn calls(&self) -> Vec<(String, StoryPayload)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl StoryApi for SpyApi {
        async fn create_story(&self, token: &str, payload: &StoryPayload) -> Result<ApiResponse> {
            self.calls
                .lock()
                .unwrap()
                .push((token.to_string(), payload.clone()));
            Ok(ApiResponse {
                status: self.status,
                reason: None,
                headers: Vec::new(),
                body: String::new(),
            })
        }
    }

    struct FixedConfig {
        token: String,
    }

    impl ConfigProvider for FixedConfig {
        fn token(&self) -> &str {
            &self.token
        }

        fn api_endpoint(&self) -> &str {
            "http://localhost/stories"
        }

        fn timeout(&self) -> Option<Duration> {
            None
        }

        fn story_payload(&self) -> StoryPayload {
            StoryPayload::default()
        }
    }

    fn creator(spy: &SpyApi, token: &str) -> StoryCreator<SpyApi, FixedConfig> {
        StoryCreator::new(
            spy.clone(),
            FixedConfig {
                token: token.to_string(),
            },
        )
    }

    #[tokio::test]
    async fn test_run_calls_api_once_with_token_and_payload() {
        let spy = SpyApi::returning(201);
        let response = creator(&spy, "T").run().await.unwrap();

        assert_eq!(response.status, 201);
        assert_eq!(spy.calls(), vec![("T".to_string(), StoryPayload::default())]);
    }

    #[tokio::test]
    async fn test_repeated_runs_are_not_deduplicated() {
        let spy = SpyApi::returning(201);
        let creator = creator(&spy, "T");

        creator.run().await.unwrap();
        creator.run().await.unwrap();

        assert_eq!(spy.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_error_status_still_returns_response() {
        let spy = SpyApi::returning(422);
        let response = creator(&spy, "T").run().await.unwrap();

        assert_eq!(response.status, 422);
        assert_eq!(spy.calls().len(), 1);
    }
}
