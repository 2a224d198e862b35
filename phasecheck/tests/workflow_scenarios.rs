//! Library-level walks through a multi-phase workflow.
//!
//! Each test advances one feature directory the way the executor and checker
//! agents would, re-evaluating after every edit.

use phasecheck::core::types::PhaseState;
use phasecheck::evaluate::evaluate_feature;
use phasecheck::exit_codes;
use phasecheck::test_support::{TestFeature, phase_section, report_body};

fn status(phases: &[(u32, &str, usize, usize)]) -> String {
    let mut doc = "# Status update\n\n".to_string();
    for (number, title, checked, unchecked) in phases {
        doc.push_str(&phase_section(*number, title, *checked, *unchecked));
    }
    doc
}

fn state_of(feature: &TestFeature) -> (u32, PhaseState, i32) {
    let result = evaluate_feature(feature.paths()).expect("evaluate");
    (result.phase, result.state, result.exit_code)
}

/// Three phases driven from nothing to complete, with one failed check.
///
/// ```text
/// 1: not started -> in progress -> awaiting -> PASS
/// 2: not started -> awaiting -> FAIL -> awaiting (report removed) -> PASS
/// 3: awaiting -> PASS => all complete
/// ```
#[test]
fn full_workflow_reaches_all_complete() {
    let feature = TestFeature::new("daily-practice").expect("feature");

    feature
        .write_status(&status(&[(1, "Setup", 0, 2), (2, "Build", 0, 2), (3, "Polish", 0, 1)]))
        .expect("write");
    assert_eq!(
        state_of(&feature),
        (1, PhaseState::NotStarted, exit_codes::PROCEED)
    );

    feature
        .write_status(&status(&[(1, "Setup", 1, 1), (2, "Build", 0, 2), (3, "Polish", 0, 1)]))
        .expect("write");
    assert_eq!(state_of(&feature), (1, PhaseState::InProgress, exit_codes::HALT));

    feature
        .write_status(&status(&[(1, "Setup", 2, 0), (2, "Build", 0, 2), (3, "Polish", 0, 1)]))
        .expect("write");
    assert_eq!(
        state_of(&feature),
        (1, PhaseState::AwaitingVerification, exit_codes::HALT)
    );

    feature
        .write_report(1, &report_body("PASS", None))
        .expect("write");
    assert_eq!(
        state_of(&feature),
        (2, PhaseState::NotStarted, exit_codes::PROCEED)
    );

    feature
        .write_status(&status(&[(1, "Setup", 2, 0), (2, "Build", 2, 0), (3, "Polish", 0, 1)]))
        .expect("write");
    feature
        .write_report(2, &report_body("FAIL", Some("clippy warnings")))
        .expect("write");
    let failed = evaluate_feature(feature.paths()).expect("evaluate");
    assert_eq!(failed.phase, 2);
    assert_eq!(failed.state, PhaseState::Failed);
    assert_eq!(failed.reason.as_deref(), Some("clippy warnings"));
    assert_eq!(failed.verified_phases, vec![1]);

    std::fs::remove_file(feature.paths().report_path(2)).expect("remove report");
    assert_eq!(
        state_of(&feature),
        (2, PhaseState::AwaitingVerification, exit_codes::HALT)
    );

    feature
        .write_report(2, &report_body("PASS", None))
        .expect("write");
    feature
        .write_status(&status(&[(1, "Setup", 2, 0), (2, "Build", 2, 0), (3, "Polish", 1, 0)]))
        .expect("write");
    assert_eq!(
        state_of(&feature),
        (3, PhaseState::AwaitingVerification, exit_codes::HALT)
    );

    feature
        .write_report(3, &report_body("PASS", None))
        .expect("write");
    let done = evaluate_feature(feature.paths()).expect("evaluate");
    assert_eq!(done.phase, 3);
    assert_eq!(done.state, PhaseState::AllComplete);
    assert_eq!(done.exit_code, exit_codes::PROCEED);
    assert_eq!(done.verified_phases, vec![1, 2, 3]);
    assert!(done.final_phase);
}

/// Later phases are never inspected once an earlier one stops the walk, so a
/// broken report further down does not matter yet.
#[test]
fn malformed_later_report_is_not_read_before_its_turn() {
    let feature = TestFeature::new("daily-practice").expect("feature");
    feature
        .write_status(&status(&[(1, "Setup", 1, 0), (2, "Build", 1, 0)]))
        .expect("write");
    feature
        .write_report(2, "**Status**: MAYBE\n")
        .expect("write");
    assert_eq!(
        state_of(&feature),
        (1, PhaseState::AwaitingVerification, exit_codes::HALT)
    );

    feature
        .write_report(1, &report_body("PASS", None))
        .expect("write");
    let err = evaluate_feature(feature.paths()).expect_err("malformed report");
    assert!(err.to_string().contains("MAYBE"));
}

#[test]
fn evaluation_does_not_modify_feature_directory() {
    let feature = TestFeature::new("daily-practice").expect("feature");
    let doc = status(&[(1, "Setup", 1, 0)]);
    feature.write_status(&doc).expect("write");
    feature
        .write_report(1, &report_body("FAIL", None))
        .expect("write");

    let first = evaluate_feature(feature.paths()).expect("evaluate");
    let second = evaluate_feature(feature.paths()).expect("evaluate");
    assert_eq!(first, second);

    let on_disk = std::fs::read_to_string(&feature.paths().status_path).expect("read");
    assert_eq!(on_disk, doc);
    let entries = std::fs::read_dir(&feature.paths().feature_dir)
        .expect("read dir")
        .count();
    assert_eq!(entries, 2);
}

#[test]
fn custom_config_layout_is_honoured() {
    let feature = TestFeature::new("daily-practice").expect("feature");
    let mut config = feature.config().clone();
    config.report_file_prefix = "check-".to_string();
    let paths = phasecheck::io::paths::FeaturePaths::new(&config, "daily-practice");

    feature
        .write_status(&status(&[(1, "Setup", 1, 0)]))
        .expect("write");
    std::fs::write(paths.report_path(1), report_body("PASS", None)).expect("write");

    let result = evaluate_feature(&paths).expect("evaluate");
    assert_eq!(result.state, PhaseState::AllComplete);

    let default_layout = evaluate_feature(feature.paths()).expect("evaluate");
    assert_eq!(default_layout.state, PhaseState::AwaitingVerification);
}
