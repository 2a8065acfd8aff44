//! Options record and built-in defaults (layer 1)
//!
//! `Options` is the single flat record the whole run consumes. Its
//! `Default` impl is the baseline layer of the merge: any field a later
//! source leaves absent keeps the value defined here.

use serde::Serialize;

/// Close reason applied when an item is closed as stale.
///
/// Kept as a plain string because the empty value ("use the platform
/// default") is part of the accepted value space; membership is enforced
/// by the validator.
pub const CLOSE_REASONS: [&str; 3] = ["", "completed", "not_planned"];

/// Fully-typed run configuration.
///
/// Numeric issue/pr overrides use `f64::NAN` as the "inherit the general
/// field" sentinel; boolean overrides use `None`. Resolving an override
/// against its general field happens per item in the processor, not here.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// API token the processor authenticates with. Redacted in diagnostics.
    pub repo_token: String,

    /// Comment posted when an issue is marked stale (empty: no comment).
    pub stale_issue_message: String,
    /// Comment posted when a pull request is marked stale.
    pub stale_pr_message: String,
    /// Comment posted when a stale issue is closed.
    pub close_issue_message: String,
    /// Comment posted when a stale pull request is closed.
    pub close_pr_message: String,

    /// Days of inactivity before an item is marked stale.
    pub days_before_stale: f64,
    /// Issue-specific override for `days_before_stale` (NaN: inherit).
    pub days_before_issue_stale: f64,
    /// PR-specific override for `days_before_stale` (NaN: inherit).
    pub days_before_pr_stale: f64,
    /// Days after staleness before an item is closed (negative: never).
    pub days_before_close: f64,
    pub days_before_issue_close: f64,
    pub days_before_pr_close: f64,

    /// Label applied to stale issues.
    pub stale_issue_label: String,
    /// Label applied when an issue is closed (empty: none).
    pub close_issue_label: String,
    /// Comma-separated labels exempting an issue from staleness.
    pub exempt_issue_labels: String,
    pub stale_pr_label: String,
    pub close_pr_label: String,
    pub exempt_pr_labels: String,

    /// Comma-separated labels an item must carry to be processed at all.
    pub only_labels: String,
    pub only_issue_labels: String,
    pub only_pr_labels: String,
    /// Comma-separated labels of which at least one must be present.
    pub any_of_labels: String,
    pub any_of_issue_labels: String,
    pub any_of_pr_labels: String,

    /// Mutation budget for one run.
    pub operations_per_run: f64,

    /// Drop the stale state when an item sees activity.
    pub remove_stale_when_updated: bool,
    pub remove_issue_stale_when_updated: Option<bool>,
    pub remove_pr_stale_when_updated: Option<bool>,

    /// Dry-run: log decisions, perform no mutations.
    pub debug_only: bool,
    /// Process oldest items first.
    pub ascending: bool,
    /// Delete the source branch when closing a stale pull request.
    pub delete_branch: bool,

    /// Items updated before this date are never processed (empty: unset).
    pub start_date: String,

    /// Comma-separated milestones exempting an item.
    pub exempt_milestones: String,
    pub exempt_issue_milestones: String,
    pub exempt_pr_milestones: String,
    /// Exempt every item that has any milestone.
    pub exempt_all_milestones: bool,
    pub exempt_all_issue_milestones: Option<bool>,
    pub exempt_all_pr_milestones: Option<bool>,

    /// Comma-separated assignees exempting an item.
    pub exempt_assignees: String,
    pub exempt_issue_assignees: String,
    pub exempt_pr_assignees: String,
    /// Exempt every item that has any assignee.
    pub exempt_all_assignees: bool,
    pub exempt_all_issue_assignees: Option<bool>,
    pub exempt_all_pr_assignees: Option<bool>,

    /// Emit per-run statistics on the diagnostics channel.
    pub enable_statistics: bool,

    /// Comma-separated labels added when an item leaves the stale state.
    pub labels_to_add_when_unstale: String,
    /// Comma-separated labels removed when an item goes stale.
    pub labels_to_remove_when_stale: String,
    /// Comma-separated labels removed when an item leaves the stale state.
    pub labels_to_remove_when_unstale: String,

    /// Ignore item updates when computing staleness.
    pub ignore_updates: bool,
    pub ignore_issue_updates: Option<bool>,
    pub ignore_pr_updates: Option<bool>,

    /// Never mark draft pull requests stale.
    pub exempt_draft_pr: bool,

    /// One of `CLOSE_REASONS`; enforced by the validator.
    pub close_issue_reason: String,

    /// Only process items that have at least one assignee.
    pub include_only_assigned: bool,

    /// Operator-supplied search terms; rewritten in place by the filter
    /// compiler into fully-scoped, state-qualified queries.
    pub only_matching_filter: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            repo_token: String::new(),
            stale_issue_message: String::new(),
            stale_pr_message: String::new(),
            close_issue_message: String::new(),
            close_pr_message: String::new(),
            days_before_stale: 60.0,
            days_before_issue_stale: f64::NAN,
            days_before_pr_stale: f64::NAN,
            days_before_close: 7.0,
            days_before_issue_close: f64::NAN,
            days_before_pr_close: f64::NAN,
            stale_issue_label: "Stale".to_string(),
            close_issue_label: String::new(),
            exempt_issue_labels: String::new(),
            stale_pr_label: "Stale".to_string(),
            close_pr_label: String::new(),
            exempt_pr_labels: String::new(),
            only_labels: String::new(),
            only_issue_labels: String::new(),
            only_pr_labels: String::new(),
            any_of_labels: String::new(),
            any_of_issue_labels: String::new(),
            any_of_pr_labels: String::new(),
            operations_per_run: 30.0,
            remove_stale_when_updated: true,
            remove_issue_stale_when_updated: None,
            remove_pr_stale_when_updated: None,
            debug_only: false,
            ascending: false,
            delete_branch: false,
            start_date: String::new(),
            exempt_milestones: String::new(),
            exempt_issue_milestones: String::new(),
            exempt_pr_milestones: String::new(),
            exempt_all_milestones: false,
            exempt_all_issue_milestones: None,
            exempt_all_pr_milestones: None,
            exempt_assignees: String::new(),
            exempt_issue_assignees: String::new(),
            exempt_pr_assignees: String::new(),
            exempt_all_assignees: false,
            exempt_all_issue_assignees: None,
            exempt_all_pr_assignees: None,
            enable_statistics: true,
            labels_to_add_when_unstale: String::new(),
            labels_to_remove_when_stale: String::new(),
            labels_to_remove_when_unstale: String::new(),
            ignore_updates: false,
            ignore_issue_updates: None,
            ignore_pr_updates: None,
            exempt_draft_pr: false,
            close_issue_reason: "not_planned".to_string(),
            include_only_assigned: false,
            only_matching_filter: vec![String::new()],
        }
    }
}
