use crate::utils::error::{Result, StoryError};
use crate::utils::validation::{self, Validate, STORY_TYPES};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;

/// Optional defaults file. Every table and key may be left out.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoryFileConfig {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub story: StorySection,
    #[serde(default)]
    pub jira: JiraSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiSection {
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorySection {
    pub name: Option<String>,
    pub project_id: Option<i64>,
    pub owner_ids: Option<Vec<String>>,
    pub description: Option<String>,
    pub story_type: Option<String>,
    pub labels: Option<Vec<String>>,
    pub external_id: Option<String>,
    pub external_links: Option<Vec<String>>,
    pub estimate: Option<i64>,
    pub requested_by_id: Option<String>,
    pub workflow_state_id: Option<i64>,
}

/// Source ticket for a story mirrored from Jira.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JiraSection {
    pub key: Option<String>,
    pub issue_type: Option<String>,
    pub status: Option<String>,
    pub browse_url: Option<String>,
}

impl StoryFileConfig {
    /// Reads and parses a TOML defaults file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(StoryError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| StoryError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value. Unset variables are
    /// left as written.
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env var pattern is valid")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }
}

impl Validate for StoryFileConfig {
    fn validate(&self) -> Result<()> {
        if let Some(endpoint) = &self.api.endpoint {
            validation::validate_url("api.endpoint", endpoint)?;
        }
        if let Some(timeout) = self.api.timeout_seconds {
            validation::validate_positive_number("api.timeout_seconds", timeout, 1)?;
        }
        if let Some(name) = &self.story.name {
            validation::validate_non_empty_string("story.name", name)?;
        }
        if let Some(story_type) = &self.story.story_type {
            validation::validate_one_of("story.story_type", story_type, &STORY_TYPES)?;
        }
        if let Some(estimate) = self.story.estimate {
            validation::validate_non_negative("story.estimate", estimate)?;
        }
        for link in self.story.external_links.iter().flatten() {
            validation::validate_url("story.external_links", link)?;
        }
        if let Some(browse_url) = &self.jira.browse_url {
            validation::validate_url("jira.browse_url", browse_url)?;
        }
        if let Some(key) = &self.jira.key {
            validation::validate_jira_key("jira.key", key)?;
        }
        Ok(())
    }
}
