//! Overlay record produced by the input adapters (layers 2 and 3)
//!
//! Every field is optional: `None` means the source did not carry the
//! field at all. Values that are carried but still count as absent under
//! the merge rule (empty strings, NaN) are filtered by the merge engine,
//! not here.

use serde::Deserialize;

/// One source's contribution to the merged [`Options`](super::Options).
///
/// Deserializes directly from the camel-cased override blob; unknown keys
/// are ignored, `null` maps to `None`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptionsPatch {
    pub repo_token: Option<String>,
    pub stale_issue_message: Option<String>,
    pub stale_pr_message: Option<String>,
    pub close_issue_message: Option<String>,
    pub close_pr_message: Option<String>,
    pub days_before_stale: Option<f64>,
    pub days_before_issue_stale: Option<f64>,
    pub days_before_pr_stale: Option<f64>,
    pub days_before_close: Option<f64>,
    pub days_before_issue_close: Option<f64>,
    pub days_before_pr_close: Option<f64>,
    pub stale_issue_label: Option<String>,
    pub close_issue_label: Option<String>,
    pub exempt_issue_labels: Option<String>,
    pub stale_pr_label: Option<String>,
    pub close_pr_label: Option<String>,
    pub exempt_pr_labels: Option<String>,
    pub only_labels: Option<String>,
    pub only_issue_labels: Option<String>,
    pub only_pr_labels: Option<String>,
    pub any_of_labels: Option<String>,
    pub any_of_issue_labels: Option<String>,
    pub any_of_pr_labels: Option<String>,
    pub operations_per_run: Option<f64>,
    pub remove_stale_when_updated: Option<bool>,
    pub remove_issue_stale_when_updated: Option<bool>,
    pub remove_pr_stale_when_updated: Option<bool>,
    pub debug_only: Option<bool>,
    pub ascending: Option<bool>,
    pub delete_branch: Option<bool>,
    pub start_date: Option<String>,
    pub exempt_milestones: Option<String>,
    pub exempt_issue_milestones: Option<String>,
    pub exempt_pr_milestones: Option<String>,
    pub exempt_all_milestones: Option<bool>,
    pub exempt_all_issue_milestones: Option<bool>,
    pub exempt_all_pr_milestones: Option<bool>,
    pub exempt_assignees: Option<String>,
    pub exempt_issue_assignees: Option<String>,
    pub exempt_pr_assignees: Option<String>,
    pub exempt_all_assignees: Option<bool>,
    pub exempt_all_issue_assignees: Option<bool>,
    pub exempt_all_pr_assignees: Option<bool>,
    pub enable_statistics: Option<bool>,
    pub labels_to_add_when_unstale: Option<String>,
    pub labels_to_remove_when_stale: Option<String>,
    pub labels_to_remove_when_unstale: Option<String>,
    pub ignore_updates: Option<bool>,
    pub ignore_issue_updates: Option<bool>,
    pub ignore_pr_updates: Option<bool>,
    pub exempt_draft_pr: Option<bool>,
    pub close_issue_reason: Option<String>,
    pub include_only_assigned: Option<bool>,
    pub only_matching_filter: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_camel_case_keys() {
        let patch: OptionsPatch =
            serde_json::from_str(r#"{"daysBeforeStale": 15, "staleIssueLabel": "old"}"#).unwrap();
        assert_eq!(patch.days_before_stale, Some(15.0));
        assert_eq!(patch.stale_issue_label.as_deref(), Some("old"));
        assert_eq!(patch.days_before_close, None);
    }

    #[test]
    fn test_null_deserializes_to_absent() {
        let patch: OptionsPatch =
            serde_json::from_str(r#"{"daysBeforeIssueStale": null}"#).unwrap();
        assert_eq!(patch.days_before_issue_stale, None);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let patch: OptionsPatch =
            serde_json::from_str(r#"{"noSuchOption": true, "ascending": true}"#).unwrap();
        assert_eq!(patch.ascending, Some(true));
    }
}
