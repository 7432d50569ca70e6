pub mod toml_config;

use crate::core::client::DEFAULT_STORIES_ENDPOINT;
use crate::core::{ConfigProvider, StoryPayload};
use crate::domain::jira;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate, STORY_TYPES};
use clap::Parser;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use toml_config::StoryFileConfig;

#[derive(Clone, Parser)]
#[command(name = "clubhouse-story")]
#[command(about = "Create a placeholder story through the Clubhouse API")]
pub struct CliConfig {
    #[arg(help = "Clubhouse API token")]
    pub token: String,

    #[arg(long, help = "Stories endpoint [default: https://api.clubhouse.io/api/v3/stories]")]
    pub api_endpoint: Option<String>,

    #[arg(long, help = "Story name [default: TEST STORY]")]
    pub name: Option<String>,

    #[arg(long, help = "Project id [default: 13]")]
    pub project_id: Option<i64>,

    #[arg(long = "owner-id", help = "Owner id, may be repeated")]
    pub owner_ids: Vec<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long, help = "One of feature, bug, chore")]
    pub story_type: Option<String>,

    #[arg(long = "label", help = "Label name, may be repeated")]
    pub labels: Vec<String>,

    #[arg(long)]
    pub external_id: Option<String>,

    #[arg(long = "external-link", help = "External URL, may be repeated")]
    pub external_links: Vec<String>,

    #[arg(long, allow_negative_numbers = true, help = "Estimate in points")]
    pub estimate: Option<i64>,

    #[arg(long)]
    pub requested_by_id: Option<String>,

    #[arg(long)]
    pub workflow_state_id: Option<i64>,

    #[arg(long, help = "Jira key of the ticket this story mirrors, e.g. WEB-1234")]
    pub jira_key: Option<String>,

    #[arg(long, help = "Jira issue type, mapped to a story type")]
    pub jira_issue_type: Option<String>,

    #[arg(long, help = "Jira status, mapped to a workflow state")]
    pub jira_status: Option<String>,

    #[arg(long, help = "Jira browse URL, used to link back to --jira-key")]
    pub jira_browse_url: Option<String>,

    #[arg(long, help = "Request timeout in seconds")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "TOML file with default values")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CliConfig")
            .field("token", &"<redacted>")
            .field("api_endpoint", &self.api_endpoint)
            .field("name", &self.name)
            .field("project_id", &self.project_id)
            .field("owner_ids", &self.owner_ids)
            .field("description", &self.description)
            .field("story_type", &self.story_type)
            .field("labels", &self.labels)
            .field("external_id", &self.external_id)
            .field("external_links", &self.external_links)
            .field("estimate", &self.estimate)
            .field("requested_by_id", &self.requested_by_id)
            .field("workflow_state_id", &self.workflow_state_id)
            .field("jira_key", &self.jira_key)
            .field("jira_issue_type", &self.jira_issue_type)
            .field("jira_status", &self.jira_status)
            .field("jira_browse_url", &self.jira_browse_url)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("config", &self.config)
            .field("verbose", &self.verbose)
            .finish()
    }
}

impl CliConfig {
    /// Fills every value not given on the command line from `file`.
    pub fn merge_file(mut self, file: StoryFileConfig) -> Self {
        self.api_endpoint = self.api_endpoint.or(file.api.endpoint);
        self.timeout_seconds = self.timeout_seconds.or(file.api.timeout_seconds);
        self.name = self.name.or(file.story.name);
        self.project_id = self.project_id.or(file.story.project_id);
        if self.owner_ids.is_empty() {
            self.owner_ids = file.story.owner_ids.unwrap_or_default();
        }
        self.description = self.description.or(file.story.description);
        self.story_type = self.story_type.or(file.story.story_type);
        if self.labels.is_empty() {
            self.labels = file.story.labels.unwrap_or_default();
        }
        self.external_id = self.external_id.or(file.story.external_id);
        if self.external_links.is_empty() {
            self.external_links = file.story.external_links.unwrap_or_default();
        }
        self.estimate = self.estimate.or(file.story.estimate);
        self.requested_by_id = self.requested_by_id.or(file.story.requested_by_id);
        self.workflow_state_id = self.workflow_state_id.or(file.story.workflow_state_id);
        self.jira_key = self.jira_key.or(file.jira.key);
        self.jira_issue_type = self.jira_issue_type.or(file.jira.issue_type);
        self.jira_status = self.jira_status.or(file.jira.status);
        self.jira_browse_url = self.jira_browse_url.or(file.jira.browse_url);
        self
    }

    /// Loads and merges `--config` when one was given.
    pub fn load_config_file(self) -> Result<Self> {
        let Some(path) = self.config.clone() else {
            return Ok(self);
        };

        tracing::debug!("Loading config file {}", path.display());
        let file = StoryFileConfig::from_file(&path)?;
        file.validate()?;
        Ok(self.merge_file(file))
    }
}

impl ConfigProvider for CliConfig {
    fn token(&self) -> &str {
        &self.token
    }

    fn api_endpoint(&self) -> &str {
        self.api_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_STORIES_ENDPOINT)
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    /// Explicit story fields win over values derived from the Jira ticket.
    fn story_payload(&self) -> StoryPayload {
        let defaults = StoryPayload::default();

        let story_type = self.story_type.clone().or_else(|| {
            self.jira_issue_type
                .as_deref()
                .map(|t| jira::story_type_for_issue_type(t).to_string())
        });
        let workflow_state_id = self.workflow_state_id.or_else(|| {
            self.jira_status
                .as_deref()
                .map(jira::workflow_state_for_status)
        });

        let mut labels = self.labels.clone();
        let mut external_links = self.external_links.clone();
        let mut external_id = self.external_id.clone();
        if let Some(key) = &self.jira_key {
            for label in jira::ticket_labels(key) {
                if !labels.contains(&label) {
                    labels.push(label);
                }
            }
            if let Some(browse_url) = &self.jira_browse_url {
                let link = jira::ticket_link(browse_url, key);
                if !external_links.contains(&link) {
                    external_links.push(link);
                }
            }
            external_id = external_id.or_else(|| Some(key.clone()));
        }

        StoryPayload {
            name: self.name.clone().unwrap_or(defaults.name),
            project_id: self.project_id.unwrap_or(defaults.project_id),
            owner_ids: self.owner_ids.clone(),
            description: self.description.clone(),
            story_type,
            labels,
            external_id,
            external_links,
            estimate: self.estimate,
            requested_by_id: self.requested_by_id.clone(),
            workflow_state_id,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_endpoint", self.api_endpoint())?;
        if let Some(timeout) = self.timeout_seconds {
            validation::validate_positive_number("timeout_seconds", timeout, 1)?;
        }
        if let Some(name) = &self.name {
            validation::validate_non_empty_string("name", name)?;
        }
        if let Some(story_type) = &self.story_type {
            validation::validate_one_of("story_type", story_type, &STORY_TYPES)?;
        }
        if let Some(estimate) = self.estimate {
            validation::validate_non_negative("estimate", estimate)?;
        }
        for link in &self.external_links {
            validation::validate_url("external_links", link)?;
        }
        if let Some(key) = &self.jira_key {
            validation::validate_jira_key("jira_key", key)?;
        }
        if let Some(browse_url) = &self.jira_browse_url {
            validation::validate_url("jira_browse_url", browse_url)?;
        }
        Ok(())
    }
}
