//! Merge engine
//!
//! Folds the layers in precedence order: defaults, then each patch in the
//! order given, later patches winning. A patch field overwrites the base
//! **only if** it is present. Present excludes a missing field, a numeric
//! NaN, and an empty string; arrays and booleans carried by a patch always
//! override. The asymmetry lets a later source omit — or explicitly
//! blank — a field and inherit the earlier value instead of forcing it to
//! a falsy default.

use super::defaults::Options;
use super::patch::OptionsPatch;

/// Absence predicate for carried values.
trait Present {
    fn is_present(&self) -> bool;
}

impl Present for String {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Present for f64 {
    fn is_present(&self) -> bool {
        !self.is_nan()
    }
}

impl Present for bool {
    fn is_present(&self) -> bool {
        true
    }
}

impl Present for Vec<String> {
    // Arrays always override, empty ones included.
    fn is_present(&self) -> bool {
        true
    }
}

/// Overwrite `slot` when the patch carries a present value.
fn overlay<T: Present>(slot: &mut T, incoming: Option<T>) {
    if let Some(value) = incoming {
        if value.is_present() {
            *slot = value;
        }
    }
}

/// Tri-state slot: a carried boolean always lands, absence inherits.
fn overlay_tri_state(slot: &mut Option<bool>, incoming: Option<bool>) {
    if incoming.is_some() {
        *slot = incoming;
    }
}

impl Options {
    /// Apply one source's patch onto this record.
    pub fn apply(&mut self, patch: OptionsPatch) {
        overlay(&mut self.repo_token, patch.repo_token);
        overlay(&mut self.stale_issue_message, patch.stale_issue_message);
        overlay(&mut self.stale_pr_message, patch.stale_pr_message);
        overlay(&mut self.close_issue_message, patch.close_issue_message);
        overlay(&mut self.close_pr_message, patch.close_pr_message);
        overlay(&mut self.days_before_stale, patch.days_before_stale);
        overlay(&mut self.days_before_issue_stale, patch.days_before_issue_stale);
        overlay(&mut self.days_before_pr_stale, patch.days_before_pr_stale);
        overlay(&mut self.days_before_close, patch.days_before_close);
        overlay(&mut self.days_before_issue_close, patch.days_before_issue_close);
        overlay(&mut self.days_before_pr_close, patch.days_before_pr_close);
        overlay(&mut self.stale_issue_label, patch.stale_issue_label);
        overlay(&mut self.close_issue_label, patch.close_issue_label);
        overlay(&mut self.exempt_issue_labels, patch.exempt_issue_labels);
        overlay(&mut self.stale_pr_label, patch.stale_pr_label);
        overlay(&mut self.close_pr_label, patch.close_pr_label);
        overlay(&mut self.exempt_pr_labels, patch.exempt_pr_labels);
        overlay(&mut self.only_labels, patch.only_labels);
        overlay(&mut self.only_issue_labels, patch.only_issue_labels);
        overlay(&mut self.only_pr_labels, patch.only_pr_labels);
        overlay(&mut self.any_of_labels, patch.any_of_labels);
        overlay(&mut self.any_of_issue_labels, patch.any_of_issue_labels);
        overlay(&mut self.any_of_pr_labels, patch.any_of_pr_labels);
        overlay(&mut self.operations_per_run, patch.operations_per_run);
        overlay(&mut self.remove_stale_when_updated, patch.remove_stale_when_updated);
        overlay_tri_state(
            &mut self.remove_issue_stale_when_updated,
            patch.remove_issue_stale_when_updated,
        );
        overlay_tri_state(
            &mut self.remove_pr_stale_when_updated,
            patch.remove_pr_stale_when_updated,
        );
        overlay(&mut self.debug_only, patch.debug_only);
        overlay(&mut self.ascending, patch.ascending);
        overlay(&mut self.delete_branch, patch.delete_branch);
        overlay(&mut self.start_date, patch.start_date);
        overlay(&mut self.exempt_milestones, patch.exempt_milestones);
        overlay(&mut self.exempt_issue_milestones, patch.exempt_issue_milestones);
        overlay(&mut self.exempt_pr_milestones, patch.exempt_pr_milestones);
        overlay(&mut self.exempt_all_milestones, patch.exempt_all_milestones);
        overlay_tri_state(
            &mut self.exempt_all_issue_milestones,
            patch.exempt_all_issue_milestones,
        );
        overlay_tri_state(&mut self.exempt_all_pr_milestones, patch.exempt_all_pr_milestones);
        overlay(&mut self.exempt_assignees, patch.exempt_assignees);
        overlay(&mut self.exempt_issue_assignees, patch.exempt_issue_assignees);
        overlay(&mut self.exempt_pr_assignees, patch.exempt_pr_assignees);
        overlay(&mut self.exempt_all_assignees, patch.exempt_all_assignees);
        overlay_tri_state(
            &mut self.exempt_all_issue_assignees,
            patch.exempt_all_issue_assignees,
        );
        overlay_tri_state(&mut self.exempt_all_pr_assignees, patch.exempt_all_pr_assignees);
        overlay(&mut self.enable_statistics, patch.enable_statistics);
        overlay(&mut self.labels_to_add_when_unstale, patch.labels_to_add_when_unstale);
        overlay(&mut self.labels_to_remove_when_stale, patch.labels_to_remove_when_stale);
        overlay(
            &mut self.labels_to_remove_when_unstale,
            patch.labels_to_remove_when_unstale,
        );
        overlay(&mut self.ignore_updates, patch.ignore_updates);
        overlay_tri_state(&mut self.ignore_issue_updates, patch.ignore_issue_updates);
        overlay_tri_state(&mut self.ignore_pr_updates, patch.ignore_pr_updates);
        overlay(&mut self.exempt_draft_pr, patch.exempt_draft_pr);
        overlay(&mut self.close_issue_reason, patch.close_issue_reason);
        overlay(&mut self.include_only_assigned, patch.include_only_assigned);
        overlay(&mut self.only_matching_filter, patch.only_matching_filter);
    }

    /// Fold defaults plus patches in precedence order (first patch is the
    /// lowest-precedence source, the last one wins).
    pub fn merged(patches: impl IntoIterator<Item = OptionsPatch>) -> Options {
        let mut options = Options::default();
        for patch in patches {
            options.apply(patch);
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patch() -> OptionsPatch {
        OptionsPatch::default()
    }

    #[test]
    fn test_later_layer_wins() {
        let low = OptionsPatch {
            days_before_stale: Some(10.0),
            stale_issue_label: Some("aging".to_string()),
            ..patch()
        };
        let high = OptionsPatch {
            days_before_stale: Some(20.0),
            ..patch()
        };
        let merged = Options::merged([low, high]);
        assert_eq!(merged.days_before_stale, 20.0);
        // Untouched by the later layer: earlier value survives.
        assert_eq!(merged.stale_issue_label, "aging");
    }

    #[test]
    fn test_absent_field_inherits_default() {
        let merged = Options::merged([patch()]);
        assert_eq!(merged.days_before_stale, 60.0);
        assert_eq!(merged.close_issue_reason, "not_planned");
    }

    #[test]
    fn test_nan_never_overrides() {
        let low = OptionsPatch {
            days_before_issue_stale: Some(5.0),
            ..patch()
        };
        let high = OptionsPatch {
            days_before_issue_stale: Some(f64::NAN),
            ..patch()
        };
        let merged = Options::merged([low, high]);
        assert_eq!(merged.days_before_issue_stale, 5.0);
    }

    #[test]
    fn test_empty_string_never_overrides() {
        let low = OptionsPatch {
            stale_issue_message: Some("going stale".to_string()),
            ..patch()
        };
        let high = OptionsPatch {
            stale_issue_message: Some(String::new()),
            ..patch()
        };
        let merged = Options::merged([low, high]);
        assert_eq!(merged.stale_issue_message, "going stale");
    }

    #[test]
    fn test_false_overrides() {
        // Booleans have no absence sentinel once carried.
        let high = OptionsPatch {
            remove_stale_when_updated: Some(false),
            ..patch()
        };
        let merged = Options::merged([high]);
        assert!(!merged.remove_stale_when_updated);
    }

    #[test]
    fn test_tri_state_explicit_false_is_kept() {
        let high = OptionsPatch {
            ignore_pr_updates: Some(false),
            ..patch()
        };
        let merged = Options::merged([high]);
        assert_eq!(merged.ignore_pr_updates, Some(false));
        assert_eq!(merged.ignore_issue_updates, None);
    }

    #[test]
    fn test_empty_array_overrides() {
        let high = OptionsPatch {
            only_matching_filter: Some(Vec::new()),
            ..patch()
        };
        let merged = Options::merged([high]);
        assert!(merged.only_matching_filter.is_empty());
    }
}
