/*!
 * Tests for structural sanity reporting
 */

use bankdeck::bank::sanity::check_suite;
use bankdeck::{Section, Suite};
use crate::common;

#[test]
fn test_check_suite_withWellFormedSuite_shouldBeSane() {
    let suite = common::sample_suite(vec![
        common::sample_item("X1", 0),
        common::sample_item("X2", 3),
    ]);

    let report = check_suite(&suite);

    assert!(report.is_sane(), "unexpected findings: {:?}", report.warnings);
}

#[test]
fn test_check_suite_withThreeBranches_shouldFlagBranchCount() {
    let mut item = common::sample_item("X1", 0);
    item.branches.pop();
    let suite = common::sample_suite(vec![item]);

    let report = check_suite(&suite);

    assert!(!report.is_sane());
    assert!(report
        .warnings
        .iter()
        .any(|w| w.contains("unexpected branch count: 3")));
}

#[test]
fn test_check_suite_withDuplicateSerials_shouldFlagDuplicate() {
    let suite = common::sample_suite(vec![
        common::sample_item("X1", 0),
        common::sample_item("X1", 1),
    ]);

    let report = check_suite(&suite);

    assert!(!report.is_sane());
    assert!(report
        .warnings
        .iter()
        .any(|w| w.contains("Duplicated item serial X1")));
}

#[test]
fn test_check_suite_withEmptyQuestion_shouldFlagItem() {
    let mut item = common::sample_item("X1", 0);
    item.question.clear();
    let suite = common::sample_suite(vec![item]);

    let report = check_suite(&suite);

    assert!(report.warnings.iter().any(|w| w.contains("empty question")));
}

#[test]
fn test_check_suite_withEmptyBranchText_shouldFlagItem() {
    let mut item = common::sample_item("X1", 0);
    item.branches[2].clear();
    let suite = common::sample_suite(vec![item]);

    let report = check_suite(&suite);

    assert!(report.warnings.iter().any(|w| w.contains("empty branch")));
}

#[test]
fn test_check_suite_withOutOfRangeCorrectIndex_shouldFlagItem() {
    let mut item = common::sample_item("X1", 0);
    item.correct_branch_index = 7;
    let suite = common::sample_suite(vec![item]);

    let report = check_suite(&suite);

    assert!(report
        .warnings
        .iter()
        .any(|w| w.contains("abnormal correct branch index 7")));
}

#[test]
fn test_check_suite_withNoBranches_shouldFlagItem() {
    let mut item = common::sample_item("X1", 0);
    item.branches.clear();
    let suite = common::sample_suite(vec![item]);

    let report = check_suite(&suite);

    assert!(report.warnings.iter().any(|w| w.contains("has no branches")));
}

#[test]
fn test_check_suite_withMissingSuiteFields_shouldFlagEachField() {
    let suite = Suite::new("", "", "", 0, Vec::<Section>::new());

    let report = check_suite(&suite);

    assert!(report.warnings.iter().any(|w| w.contains("Missing version")));
    assert!(report.warnings.iter().any(|w| w.contains("Missing region")));
    assert!(report.warnings.iter().any(|w| w.contains("Missing level")));
    assert!(report.warnings.iter().any(|w| w.contains("No sections")));
}

#[test]
fn test_check_suite_withWarnings_shouldNeverMutateSuite() {
    let mut item = common::sample_item("X1", 0);
    item.branches.pop();
    let suite = common::sample_suite(vec![item]);
    let before = serde_json::to_string(&suite).unwrap();

    let _ = check_suite(&suite);

    assert_eq!(serde_json::to_string(&suite).unwrap(), before);
}
