use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::bank::model::{Item, Section};

// Section header: level code + sub letter, separator, free description
static SECTION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([TGE][0-9][A-Z])\s[–-]?\s?(.*)").unwrap());

// Title line: serial, correct letter in parens, optional bracketed reference
static TITLE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\w+)\s\((\w)\)(\s\[(.+)\])?").unwrap());

// Answer choice line: "A. text" through "D. text"
static BRANCH_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([ABCD]\.)\s(.*)").unwrap());

// Embedded figure reference inside a question body
static FIGURE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[Ii]n [Ff]igure\s([A-Z0-9-]*)\s?").unwrap());

/// Parse the titled dialect: labelled sections, title lines opening an
/// item, `A.`-`D.` choice lines, and a `~` terminator finalizing the item.
///
/// A title arriving while a previous item is still open (missing tilde) is
/// a format violation in the source corpus: the in-progress item is
/// discarded with a warning rather than guessed at.
pub fn parse(content: &str) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    let mut section = Section::default();
    let mut item = Item::default();
    let mut parsing_branches = false;

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
            section.description = caps[2].to_string();
        }

        if line.starts_with('~') {
            parsing_branches = false;
            section.items.push(std::mem::take(&mut item));
        } else if let Some(caps) = TITLE_REGEX.captures(line) {
            if parsing_branches {
                warn!("Unexpected new title while parsing of an existing is ongoing. Missing tilde?");
                warn!("Discarding in-progress item: {:?}", item);
            }
            parsing_branches = true;
            let letter = caps[2].chars().next().unwrap_or('A');
            item = Item {
                serial: caps[1].to_string(),
                correct_branch_index: (letter as u32).saturating_sub('A' as u32) as usize,
                reference: caps.get(4).map(|m| m.as_str().to_string()),
                ..Item::default()
            };
        } else if parsing_branches {
            if let Some(caps) = BRANCH_REGEX.captures(line) {
                item.branches.push(caps[2].to_string());
            } else {
                item.question = line.to_string();
                if let Some(caps) = FIGURE_REGEX.captures(line) {
                    if !caps[1].is_empty() {
                        item.picture = Some(caps[1].to_string());
                    }
                }
            }
        }
    }

    // An item still open here never saw its terminator and is dropped;
    // the trailing section is real and kept
    sections.push(section);
    sections
}
