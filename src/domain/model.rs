use serde::Serialize;
use std::fmt;

pub const DEFAULT_STORY_NAME: &str = "TEST STORY";
pub const DEFAULT_PROJECT_ID: i64 = 13;

/// Fields sent to `POST /stories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoryPayload {
    pub name: String,
    pub project_id: i64,
    pub owner_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_type: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub external_links: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_by_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_state_id: Option<i64>,
}

impl Default for StoryPayload {
    fn default() -> Self {
        Self {
            name: DEFAULT_STORY_NAME.to_string(),
            project_id: DEFAULT_PROJECT_ID,
            owner_ids: Vec::new(),
            description: None,
            story_type: None,
            labels: Vec::new(),
            external_id: None,
            external_links: Vec::new(),
            estimate: None,
            requested_by_id: None,
            workflow_state_id: None,
        }
    }
}

impl StoryPayload {
    /// Flattens the payload into form pairs. Sequences become repeated keys,
    /// so an empty `owner_ids` contributes nothing to the body. Labels are
    /// objects on the API side and are sent as `labels[][name]`.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("name", self.name.clone()),
            ("project_id", self.project_id.to_string()),
        ];

        for owner_id in &self.owner_ids {
            fields.push(("owner_ids", owner_id.clone()));
        }

        if let Some(description) = &self.description {
            fields.push(("description", description.clone()));
        }
        if let Some(story_type) = &self.story_type {
            fields.push(("story_type", story_type.clone()));
        }

        for label in &self.labels {
            fields.push(("labels[][name]", label.clone()));
        }
        if let Some(external_id) = &self.external_id {
            fields.push(("external_id", external_id.clone()));
        }
        for link in &self.external_links {
            fields.push(("external_links", link.clone()));
        }
        if let Some(estimate) = self.estimate {
            fields.push(("estimate", estimate.to_string()));
        }
        if let Some(requested_by_id) = &self.requested_by_id {
            fields.push(("requested_by_id", requested_by_id.clone()));
        }
        if let Some(state) = self.workflow_state_id {
            fields.push(("workflow_state_id", state.to_string()));
        }

        fields
    }
}

/// Raw response as received, never parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub reason: Option<String>,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl fmt::Display for ApiResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            Some(reason) => writeln!(f, "HTTP {} {}", self.status, reason)?,
            None => writeln!(f, "HTTP {}", self.status)?,
        }
        for (name, value) in &self.headers {
            writeln!(f, "{}: {}", name, value)?;
        }
        writeln!(f)?;
        write!(f, "{}", self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_payload_is_placeholder_story() {
        let payload = StoryPayload::default();
        assert_eq!(payload.name, "TEST STORY");
        assert_eq!(payload.project_id, 13);
        assert!(payload.owner_ids.is_empty());
    }

    #[test]
    fn test_empty_owner_ids_are_omitted() {
        let fields = StoryPayload::default().form_fields();
        assert_eq!(
            fields,
            vec![
                ("name", "TEST STORY".to_string()),
                ("project_id", "13".to_string()),
            ]
        );
    }

    #[test]
    fn test_owner_ids_repeat_the_key() {
        let payload = StoryPayload {
            owner_ids: vec!["u-1".to_string(), "u-2".to_string()],
            story_type: Some("chore".to_string()),
            ..StoryPayload::default()
        };
        let fields = payload.form_fields();
        let owners: Vec<&str> = fields
            .iter()
            .filter(|(k, _)| *k == "owner_ids")
            .map(|(_, v)| v.as_str())
            .collect();
        assert_eq!(owners, vec!["u-1", "u-2"]);
        assert_eq!(fields.last(), Some(&("story_type", "chore".to_string())));
    }

    #[test]
    fn test_importer_fields_follow_story_type() {
        let payload = StoryPayload {
            labels: vec!["jira-WEB".to_string(), "WEB-12".to_string()],
            external_id: Some("WEB-12".to_string()),
            external_links: vec!["https://jira.example.com/browse/WEB-12".to_string()],
            estimate: Some(3),
            requested_by_id: Some("u-9".to_string()),
            workflow_state_id: Some(500000006),
            ..StoryPayload::default()
        };

        let keys: Vec<&str> = payload.form_fields().iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec![
                "name",
                "project_id",
                "labels[][name]",
                "labels[][name]",
                "external_id",
                "external_links",
                "estimate",
                "requested_by_id",
                "workflow_state_id",
            ]
        );
    }

    #[test]
    fn test_response_display() {
        let response = ApiResponse {
            status: 201,
            reason: Some("Created".to_string()),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: r#"{"id":42}"#.to_string(),
        };
        assert_eq!(
            response.to_string(),
            "HTTP 201 Created\ncontent-type: application/json\n\n{\"id\":42}"
        );
        assert!(response.is_success());
    }
}
