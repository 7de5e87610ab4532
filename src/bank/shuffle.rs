/*!
 * Deterministic branch shuffling.
 *
 * Reorders every item's answer choices with draws from [`LegacyRng`],
 * preserving which choice is correct and keeping a "catch-all" choice
 * (one asserting that all the other choices are correct) in the final
 * position when present.
 */

use crate::bank::model::{Item, Suite};
use crate::bank::rng::LegacyRng;

/// Exact texts of known catch-all branches across the corpora. Anything
/// not in this list is an ordinary choice.
const CATCH_ALL_PHRASES: [&str; 5] = [
    "All these choices are correct",
    "All of these choices are correct",
    "三项都可能",
    "以上三项全部正确",
    "其他三项全部正确",
];

/// A branch that includes all other branches
pub fn is_catch_all(branch: &str) -> bool {
    CATCH_ALL_PHRASES.contains(&branch)
}

/// Fisher-Yates over the whole slice, one draw per position. Draw indices
/// come from the legacy ratio generator, so the permutation is fully
/// determined by the generator state.
fn shuffle_in_place(values: &mut [String], rng: &mut LegacyRng) {
    let mut remaining = values.len();
    while remaining != 0 {
        let draw = rng.next_ratio();
        let pick = ((draw * remaining as f64) as usize).min(remaining - 1);
        remaining -= 1;
        values.swap(remaining, pick);
    }
}

/// Shuffle one item's branches and recompute its correct index.
///
/// Correctness is tracked by branch text, not index: the recorded text is
/// looked up again after shuffling. If two branches share identical text
/// only the first match is found, which can misassign correctness; a
/// known limitation of the corpora, deliberately left unpatched. An item
/// whose correct index is already out of range (malformed source record)
/// keeps its index; the sanity pass reports it.
pub fn shuffle_item(item: &mut Item, rng: &mut LegacyRng) {
    let correct_text = item.branches.get(item.correct_branch_index).cloned();
    let catch_all = item.branches.iter().find(|b| is_catch_all(b)).cloned();

    shuffle_in_place(&mut item.branches, rng);

    if let Some(catch_all) = catch_all {
        // We only handle one catch-all branch
        item.branches.retain(|b| *b != catch_all);
        item.branches.push(catch_all);
    }

    if let Some(text) = correct_text {
        if let Some(index) = item.branches.iter().position(|b| *b == text) {
            item.correct_branch_index = index;
        }
    }
}

/// Shuffle every item of the suite in section order, consuming draws from
/// a single generator so the whole suite is one reproducible sequence.
pub fn shuffle_suite(suite: &mut Suite, rng: &mut LegacyRng) {
    for section in &mut suite.sections {
        for item in &mut section.items {
            shuffle_item(item, rng);
        }
    }
}
