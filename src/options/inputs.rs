//! Named-input adapter (layer 2)
//!
//! Reads the action's named inputs — raw strings keyed by fixed kebab-case
//! names — and coerces each to its declared type. The coercion rules are
//! deliberate about absence:
//! - strings: empty is absent
//! - numbers: a failed parse is absent, and so is an explicit `0`
//! - booleans: only the literal `true`/`false` are values, everything else
//!   is absent (tri-state)
//! - string arrays: a JSON array when the raw value parses as one,
//!   otherwise a single-element array holding the raw text

use std::collections::HashMap;

use super::patch::OptionsPatch;

/// Name of the JSON override blob input (layer 3); read by the resolver,
/// never mapped onto the patch itself.
pub const JSON_OVERRIDES_INPUT: &str = "json-overrides";

/// One-shot source of named input strings.
pub trait InputSource {
    /// Raw string for a kebab-case input name, `None` when unset.
    fn raw(&self, name: &str) -> Option<String>;
}

/// Reads inputs from `INPUT_*` environment variables the way the Actions
/// runner publishes them: name uppercased, spaces replaced by underscores,
/// hyphens preserved.
#[derive(Debug, Default)]
pub struct EnvInputs;

impl EnvInputs {
    /// Environment variable name for a given input name.
    pub fn var_name(input: &str) -> String {
        format!("INPUT_{}", input.replace(' ', "_").to_uppercase())
    }
}

impl InputSource for EnvInputs {
    fn raw(&self, name: &str) -> Option<String> {
        std::env::var(Self::var_name(name)).ok()
    }
}

/// In-memory source keyed by the kebab-case input names. Backs tests and
/// keeps the adapter decoupled from the process environment.
#[derive(Debug, Default)]
pub struct MapInputs(HashMap<String, String>);

impl MapInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, name: &str, value: &str) -> Self {
        self.0.insert(name.to_string(), value.to_string());
        self
    }
}

impl InputSource for MapInputs {
    fn raw(&self, name: &str) -> Option<String> {
        self.0.get(name).cloned()
    }
}

/// String input: the raw value, absent if unset or empty.
fn string_input(source: &dyn InputSource, name: &str) -> Option<String> {
    source.raw(name).filter(|raw| !raw.is_empty())
}

/// Numeric input: parsed `f64`, absent if unset, unparseable, or zero.
///
/// Zero counting as absent is inherited behavior: an override of `0` can
/// never displace an earlier present value.
fn number_input(source: &dyn InputSource, name: &str) -> Option<f64> {
    source
        .raw(name)?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| *n != 0.0)
}

/// Boolean input: exactly `true` or `false`, anything else is absent.
fn bool_input(source: &dyn InputSource, name: &str) -> Option<bool> {
    match source.raw(name)?.as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// String-array input: a JSON array when the raw value parses as one,
/// otherwise a single-element array holding the raw text. Empty is absent.
fn list_input(source: &dyn InputSource, name: &str) -> Option<Vec<String>> {
    let raw = source.raw(name).filter(|raw| !raw.is_empty())?;
    Some(serde_json::from_str::<Vec<String>>(&raw).unwrap_or_else(|_| vec![raw]))
}

/// Gather every named input into a patch.
pub fn patch_from_inputs(source: &dyn InputSource) -> OptionsPatch {
    OptionsPatch {
        repo_token: string_input(source, "repo-token"),
        stale_issue_message: string_input(source, "stale-issue-message"),
        stale_pr_message: string_input(source, "stale-pr-message"),
        close_issue_message: string_input(source, "close-issue-message"),
        close_pr_message: string_input(source, "close-pr-message"),
        days_before_stale: number_input(source, "days-before-stale"),
        days_before_issue_stale: number_input(source, "days-before-issue-stale"),
        days_before_pr_stale: number_input(source, "days-before-pr-stale"),
        days_before_close: number_input(source, "days-before-close"),
        days_before_issue_close: number_input(source, "days-before-issue-close"),
        days_before_pr_close: number_input(source, "days-before-pr-close"),
        stale_issue_label: string_input(source, "stale-issue-label"),
        close_issue_label: string_input(source, "close-issue-label"),
        exempt_issue_labels: string_input(source, "exempt-issue-labels"),
        stale_pr_label: string_input(source, "stale-pr-label"),
        close_pr_label: string_input(source, "close-pr-label"),
        exempt_pr_labels: string_input(source, "exempt-pr-labels"),
        only_labels: string_input(source, "only-labels"),
        only_issue_labels: string_input(source, "only-issue-labels"),
        only_pr_labels: string_input(source, "only-pr-labels"),
        any_of_labels: string_input(source, "any-of-labels"),
        any_of_issue_labels: string_input(source, "any-of-issue-labels"),
        any_of_pr_labels: string_input(source, "any-of-pr-labels"),
        operations_per_run: number_input(source, "operations-per-run"),
        remove_stale_when_updated: bool_input(source, "remove-stale-when-updated"),
        remove_issue_stale_when_updated: bool_input(source, "remove-issue-stale-when-updated"),
        remove_pr_stale_when_updated: bool_input(source, "remove-pr-stale-when-updated"),
        debug_only: bool_input(source, "debug-only"),
        ascending: bool_input(source, "ascending"),
        delete_branch: bool_input(source, "delete-branch"),
        start_date: string_input(source, "start-date"),
        exempt_milestones: string_input(source, "exempt-milestones"),
        exempt_issue_milestones: string_input(source, "exempt-issue-milestones"),
        exempt_pr_milestones: string_input(source, "exempt-pr-milestones"),
        exempt_all_milestones: bool_input(source, "exempt-all-milestones"),
        exempt_all_issue_milestones: bool_input(source, "exempt-all-issue-milestones"),
        exempt_all_pr_milestones: bool_input(source, "exempt-all-pr-milestones"),
        exempt_assignees: string_input(source, "exempt-assignees"),
        exempt_issue_assignees: string_input(source, "exempt-issue-assignees"),
        exempt_pr_assignees: string_input(source, "exempt-pr-assignees"),
        exempt_all_assignees: bool_input(source, "exempt-all-assignees"),
        exempt_all_issue_assignees: bool_input(source, "exempt-all-issue-assignees"),
        exempt_all_pr_assignees: bool_input(source, "exempt-all-pr-assignees"),
        enable_statistics: bool_input(source, "enable-statistics"),
        labels_to_add_when_unstale: string_input(source, "labels-to-add-when-unstale"),
        labels_to_remove_when_stale: string_input(source, "labels-to-remove-when-stale"),
        labels_to_remove_when_unstale: string_input(source, "labels-to-remove-when-unstale"),
        ignore_updates: bool_input(source, "ignore-updates"),
        ignore_issue_updates: bool_input(source, "ignore-issue-updates"),
        ignore_pr_updates: bool_input(source, "ignore-pr-updates"),
        exempt_draft_pr: bool_input(source, "exempt-draft-pr"),
        close_issue_reason: string_input(source, "close-issue-reason"),
        include_only_assigned: bool_input(source, "include-only-assigned"),
        only_matching_filter: list_input(source, "only-matching-filter"),
    }
}
