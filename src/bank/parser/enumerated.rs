use once_cell::sync::Lazy;
use regex::Regex;

use crate::bank::model::{Item, Section};

// Section header: anything ending in the fixed domain keyword 題庫
static SECTION_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.*)題庫").unwrap());

// Title line: correct choice digit in (full-width) parens, serial, question
static TITLE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[（(]\s?([0-9])\s?[）)]\s([0-9]*)\.\s(.*)").unwrap());

// Choice line: digit in parens, no serial, no dot
static BRANCH_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[（(][0-9][)）]\s?(.*)").unwrap());

// Embedded figure code inside a question
static PICTURE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"圖\s?([A-Z][0-9]?-[0-9])").unwrap());

/// Parse the enumerated dialect: sections headed by the 題庫 keyword,
/// title lines carrying the 1-based correct-choice digit, and numbered
/// parenthetical choice lines. A new title finalizes the previous item.
pub fn parse(content: &str) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    let mut section = Section::default();
    let mut item = Item::default();

    for raw in content.lines() {
        let line = raw.trim();

        if let Some(caps) = SECTION_REGEX.captures(line) {
            if !section.label.is_empty() {
                if !item.question.is_empty() {
                    section.items.push(std::mem::take(&mut item));
                }
                sections.push(std::mem::replace(&mut section, Section::default()));
            }
            section.label = caps[1].to_string();
        }

        if let Some(caps) = TITLE_REGEX.captures(line) {
            if !item.question.is_empty() {
                section.items.push(std::mem::take(&mut item));
            }
            let digit: usize = caps[1].parse().unwrap_or(1);
            item.correct_branch_index = digit.saturating_sub(1);
            item.serial = caps[2].to_string();
            item.question = caps[3].to_string();

            if let Some(pic) = PICTURE_REGEX.captures(line) {
                item.picture = Some(pic[1].to_string());
            }
        } else if let Some(caps) = BRANCH_REGEX.captures(line) {
            item.branches.push(caps[1].to_string());
        }
    }

    // Item finalization is boundary-driven in this dialect; the trailing
    // section is pushed as-is
    sections.push(section);
    sections
}
