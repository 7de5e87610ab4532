/*!
 * Structural sanity checks over a parsed suite.
 *
 * A pure read pass: nothing is mutated and nothing aborts. The verdict is
 * advisory (export proceeds regardless) but the warnings let a human
 * audit source-data quality after every run.
 */

use std::collections::HashSet;

use crate::bank::model::{Item, Suite, SANE_BRANCH_COUNT};

/// Outcome of the sanity pass: overall verdict plus human-readable
/// findings, one per anomaly.
#[derive(Debug, Clone, Default)]
pub struct SanityReport {
    pub warnings: Vec<String>,
}

impl SanityReport {
    pub fn is_sane(&self) -> bool {
        self.warnings.is_empty()
    }

    fn flag(&mut self, message: String) {
        self.warnings.push(message);
    }
}

fn check_item(item: &Item, report: &mut SanityReport) {
    if item.question.is_empty() {
        report.flag(format!("Item {} has empty question", item.serial));
    }
    if item.branches.is_empty() {
        report.flag(format!("Item {} has no branches", item.serial));
    }
    if item.branches.len() != SANE_BRANCH_COUNT {
        report.flag(format!(
            "Item {} has unexpected branch count: {}",
            item.serial,
            item.branches.len()
        ));
    } else {
        for branch in &item.branches {
            if branch.is_empty() {
                report.flag(format!("Item {} has empty branch", item.serial));
            }
        }
        if item
            .branches
            .get(item.correct_branch_index)
            .is_none_or(|b| b.is_empty())
        {
            report.flag(format!(
                "Item {} has abnormal correct branch index {}",
                item.serial, item.correct_branch_index
            ));
        }
    }
}

/// Check a finalized suite and report every structural anomaly found.
pub fn check_suite(suite: &Suite) -> SanityReport {
    let mut report = SanityReport::default();

    if suite.version.is_empty() {
        report.flag(format!("Suite {}: Missing version", suite.level));
    }
    if suite.region.is_empty() {
        report.flag(format!("Suite {}: Missing region", suite.level));
    }
    if suite.level.is_empty() {
        report.flag(format!("Suite {}: Missing level", suite.level));
    }
    if suite.sections.is_empty() {
        report.flag(format!("Suite {}: No sections", suite.level));
    } else {
        for section in &suite.sections {
            let mut seen: HashSet<&str> = HashSet::new();
            for item in &section.items {
                if !seen.insert(&item.serial) {
                    report.flag(format!(
                        "Duplicated item serial {} in section {}",
                        item.serial, section.label
                    ));
                }
            }
            for item in &section.items {
                check_item(item, &mut report);
            }
        }
    }

    report
}
