pub mod client;
pub mod creator;

pub use crate::domain::model::{ApiResponse, StoryPayload};
pub use crate::domain::ports::{ConfigProvider, StoryApi};
pub use crate::utils::error::Result;
