pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{toml_config::StoryFileConfig, CliConfig};
pub use core::{client::ClubhouseClient, creator::StoryCreator};
pub use domain::model::{ApiResponse, StoryPayload};
pub use utils::error::{Result, StoryError};
