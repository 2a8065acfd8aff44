//! Options resolution integration tests
//!
//! Exercises the full resolve path through the public API: layering,
//! absence semantics, and validation ordering across all three sources.

use stale_sweep::options::{validate, MapInputs, Options, ResolvedOptions, JSON_OVERRIDES_INPUT};

#[test]
fn test_named_input_over_defaults() {
    // One named input, empty override blob: the input wins, everything
    // else keeps its default.
    let inputs = MapInputs::new()
        .set("days-before-stale", "10")
        .set(JSON_OVERRIDES_INPUT, "{}");

    let resolved = ResolvedOptions::resolve(&inputs).unwrap();
    let options = &resolved.options;

    assert_eq!(options.days_before_stale, 10.0);
    assert_eq!(options.days_before_close, 7.0);
    assert_eq!(options.operations_per_run, 30.0);
    assert_eq!(options.stale_issue_label, "Stale");
    assert_eq!(options.close_issue_reason, "not_planned");
}

#[test]
fn test_override_blob_has_highest_precedence() {
    let inputs = MapInputs::new()
        .set("days-before-stale", "10")
        .set("stale-issue-label", "aging")
        .set(
            JSON_OVERRIDES_INPUT,
            r#"{"days-before-stale": 25, "close-issue-reason": "completed"}"#,
        );

    let options = ResolvedOptions::resolve(&inputs).unwrap().options;

    // Present in the blob: blob wins.
    assert_eq!(options.days_before_stale, 25.0);
    assert_eq!(options.close_issue_reason, "completed");
    // Absent from the blob: the named input survives.
    assert_eq!(options.stale_issue_label, "aging");
}

#[test]
fn test_absent_later_source_inherits_earlier_value() {
    let inputs = MapInputs::new()
        .set("stale-pr-message", "about to go stale")
        .set(JSON_OVERRIDES_INPUT, r#"{"stale-pr-message": ""}"#);

    let options = ResolvedOptions::resolve(&inputs).unwrap().options;

    // An empty string in the blob is the absence sentinel, not a value.
    assert_eq!(options.stale_pr_message, "about to go stale");
}

#[test]
fn test_zero_numeric_input_does_not_override() {
    // The documented quirk: 0 coerces to absent, so the default budget
    // stands.
    let inputs = MapInputs::new().set("operations-per-run", "0");

    let options = ResolvedOptions::resolve(&inputs).unwrap().options;

    assert_eq!(options.operations_per_run, 30.0);
}

#[test]
fn test_tri_state_booleans_survive_resolution() {
    let inputs = MapInputs::new()
        .set("remove-pr-stale-when-updated", "false")
        .set(JSON_OVERRIDES_INPUT, r#"{"exempt-all-issue-milestones": true}"#);

    let options = ResolvedOptions::resolve(&inputs).unwrap().options;

    assert_eq!(options.remove_pr_stale_when_updated, Some(false));
    assert_eq!(options.exempt_all_issue_milestones, Some(true));
    // Untouched overrides stay on the inherit sentinel.
    assert_eq!(options.remove_issue_stale_when_updated, None);
    assert_eq!(options.exempt_all_pr_milestones, None);
    assert!(options.days_before_issue_stale.is_nan());
}

#[test]
fn test_filter_list_from_blob_overrides_input() {
    let inputs = MapInputs::new()
        .set("only-matching-filter", "label:bug")
        .set(JSON_OVERRIDES_INPUT, r#"{"only-matching-filter": ["milestone:v2", "label:ops"]}"#);

    let options = ResolvedOptions::resolve(&inputs).unwrap().options;

    assert_eq!(
        options.only_matching_filter,
        vec!["milestone:v2".to_string(), "label:ops".to_string()]
    );
}

#[test]
fn test_unparsable_blob_leaves_named_inputs_standing() {
    let inputs = MapInputs::new()
        .set("days-before-close", "3")
        .set(JSON_OVERRIDES_INPUT, "{broken");

    let options = ResolvedOptions::resolve(&inputs).unwrap().options;

    assert_eq!(options.days_before_close, 3.0);
}

#[test]
fn test_fail_fast_reports_stale_days_first() {
    // Both the stale-days field and the close reason are invalid. No
    // typed source can smuggle NaN through the merge, so drive the
    // battery directly: the first check in sequence must win.
    let options = Options {
        days_before_stale: f64::NAN,
        close_issue_reason: "archived".to_string(),
        ..Options::default()
    };

    let message = validate(&options).unwrap_err().to_string();

    assert!(message.contains("days-before-stale"));
    assert!(!message.contains("archived"));
}

#[test]
fn test_invalid_close_reason_names_valid_literals() {
    let inputs = MapInputs::new().set("close-issue-reason", "archived");

    let message = ResolvedOptions::resolve(&inputs).unwrap_err().to_string();

    assert!(message.contains("completed"));
    assert!(message.contains("not_planned"));
}

#[test]
fn test_invalid_start_date_is_fatal() {
    let inputs = MapInputs::new().set("start-date", "soonish");

    let message = ResolvedOptions::resolve(&inputs).unwrap_err().to_string();

    assert!(message.contains("start-date"));
    assert!(message.contains("soonish"));
}

#[test]
fn test_valid_start_date_accepted() {
    let inputs = MapInputs::new().set("start-date", "2026-01-01");

    assert!(ResolvedOptions::resolve(&inputs).is_ok());
}
