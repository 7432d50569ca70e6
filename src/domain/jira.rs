//! Mapping of Jira issue attributes onto Clubhouse story fields, for stories
//! that mirror an existing Jira ticket.

/// Workflow state used when a Jira status has no dedicated mapping.
pub const BACKLOG_STATE_ID: i64 = 500000008;

/// `Bug` becomes `bug`, `Task` becomes `chore`, anything else `feature`.
pub fn story_type_for_issue_type(issue_type: &str) -> &'static str {
    match issue_type {
        "Bug" => "bug",
        "Task" => "chore",
        _ => "feature",
    }
}

pub fn workflow_state_for_status(status: &str) -> i64 {
    match status {
        "Open" => BACKLOG_STATE_ID,
        "In Progress" => 500000006,
        "Blocked" => 500000030,
        "Code Review" => 500000010,
        "Ready for QA" => 500000027,
        "In QA" => 500000028,
        "Accepted" => 500000031,
        "Closed" => 500000011,
        _ => BACKLOG_STATE_ID,
    }
}

/// `jira-<PROJECT>` label for a ticket key such as `WEB-1234`.
pub fn project_label(key: &str) -> String {
    format!(
        "jira-{}",
        key.trim_matches(|c: char| c == '-' || c.is_ascii_digit())
    )
}

/// Labels added to a story imported from `key`: the project label, then the key.
pub fn ticket_labels(key: &str) -> Vec<String> {
    vec![project_label(key), key.to_string()]
}

/// Browse link for `key` under `browse_url`, e.g. `https://jira.example.com/browse/`.
pub fn ticket_link(browse_url: &str, key: &str) -> String {
    if browse_url.ends_with('/') {
        format!("{}{}", browse_url, key)
    } else {
        format!("{}/{}", browse_url, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_type_mapping() {
        assert_eq!(story_type_for_issue_type("Bug"), "bug");
        assert_eq!(story_type_for_issue_type("Task"), "chore");
        assert_eq!(story_type_for_issue_type("Story"), "feature");
        assert_eq!(story_type_for_issue_type("Epic"), "feature");
        assert_eq!(story_type_for_issue_type("bug"), "feature");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(workflow_state_for_status("In Progress"), 500000006);
        assert_eq!(workflow_state_for_status("Ready for QA"), 500000027);
        assert_eq!(workflow_state_for_status("Closed"), 500000011);
        assert_eq!(workflow_state_for_status("Open"), BACKLOG_STATE_ID);
        assert_eq!(workflow_state_for_status("Won't Fix"), BACKLOG_STATE_ID);
    }

    #[test]
    fn test_ticket_labels() {
        assert_eq!(project_label("WEB-1234"), "jira-WEB");
        assert_eq!(
            ticket_labels("OPS-7"),
            vec!["jira-OPS".to_string(), "OPS-7".to_string()]
        );
    }

    #[test]
    fn test_ticket_link_joins_with_single_slash() {
        assert_eq!(
            ticket_link("https://jira.example.com/browse/", "WEB-1"),
            "https://jira.example.com/browse/WEB-1"
        );
        assert_eq!(
            ticket_link("https://jira.example.com/browse", "WEB-1"),
            "https://jira.example.com/browse/WEB-1"
        );
    }
}
