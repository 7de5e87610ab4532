use once_cell::sync::Lazy;
use regex::Regex;

use crate::bank::model::{Item, Section, SOLE_SECTION_LABEL};

// Bracketed single-character tag plus trailing body, anywhere in the line
static TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(\w)\](.*)").unwrap());

/// Parse the marker dialect: every data line carries a `[X]` tag.
///
/// `I` opens a new item (any unfinalized predecessor is discarded, a
/// well-formed record was already finalized by its own `P` tag), `Q` sets
/// the question, `P` sets the picture and finalizes the item. Every other
/// tag letter appends its body to the branches in encounter order; the tag
/// ordering is exam-data structure, not alphabetic.
pub fn parse(content: &str) -> Vec<Section> {
    let mut items: Vec<Item> = Vec::new();
    let mut item = Item::default();

    for line in content.lines() {
        let Some(caps) = TAG_REGEX.captures(line) else {
            continue;
        };
        let marker = &caps[1];
        let body = caps[2].to_string();

        match marker {
            "I" => {
                item = Item {
                    serial: body,
                    ..Item::default()
                };
            }
            "Q" => {
                item.question = body;
            }
            "P" => {
                // The picture tag doubles as the item terminator; an empty
                // body means no picture (repair may fill it in later)
                item.picture = if body.is_empty() { None } else { Some(body) };
                items.push(std::mem::take(&mut item));
            }
            _ => {
                item.branches.push(body);
            }
        }
    }

    // This corpus has no section boundaries
    vec![Section {
        label: SOLE_SECTION_LABEL.to_string(),
        description: String::new(),
        items,
    }]
}
