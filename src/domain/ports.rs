use crate::domain::model::{ApiResponse, StoryPayload};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn token(&self) -> &str;
    fn api_endpoint(&self) -> &str;
    fn timeout(&self) -> Option<Duration>;
    fn story_payload(&self) -> StoryPayload;
}

#[async_trait]
pub trait StoryApi: Send + Sync {
    async fn create_story(&self, token: &str, payload: &StoryPayload) -> Result<ApiResponse>;
}
