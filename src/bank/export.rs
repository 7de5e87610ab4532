/*!
 * Suite serialization: the lossless JSON archive and the delimited
 * flashcard deck.
 *
 * The archive is rendered from the pre-shuffle suite so the canonical
 * branch order survives for audit. The deck is rendered after shuffling
 * and carries a content fingerprint per item that is independent of the
 * shuffle order.
 */

use sha2::{Digest, Sha256};

use crate::bank::model::{Item, Suite};
use crate::errors::ExportError;

/// Column separator of deck rows
pub const DECK_DELIMITER: char = '|';

/// Hex characters kept from the SHA-256 digest
const FINGERPRINT_LEN: usize = 12;

/// Pretty-printed JSON dump of the full suite.
pub fn archive_json(suite: &Suite) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(suite)?)
}

/// Stable content fingerprint of an item: SHA-256 over the question plus
/// the branch texts sorted lexicographically, so the fingerprint survives
/// branch reordering.
pub fn item_fingerprint(item: &Item) -> String {
    let mut sorted = item.branches.clone();
    sorted.sort();

    let mut hasher = Sha256::new();
    hasher.update(item.question.as_bytes());
    hasher.update(sorted.join(",").as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    digest[..FINGERPRINT_LEN].to_string()
}

/// Letter naming the correct branch post-shuffle: 'A' + index.
pub fn correct_letter(index: usize) -> char {
    char::from_u32('A' as u32 + index as u32).unwrap_or('A')
}

/// Minimal inline image reference, empty when the item has no picture.
/// The optional prefix and extension come from the source descriptor:
/// some corpora store bare figure labels, others real filenames.
pub fn picture_field(picture: Option<&str>, prefix: Option<&str>, ext: Option<&str>) -> String {
    let Some(picture) = picture else {
        return String::new();
    };
    let mut name = String::new();
    if let Some(prefix) = prefix {
        name.push_str(prefix);
    }
    name.push_str(picture);
    if let Some(ext) = ext {
        name.push('.');
        name.push_str(ext);
    }
    format!("<img src='{}'/>", name)
}

/// Render the deck: one delimited row per item, newline between rows.
///
/// Columns: serial, fingerprint, question, correct letter, picture field,
/// reference, then every branch in presentation order.
pub fn deck_csv(suite: &Suite, picture_prefix: Option<&str>, picture_ext: Option<&str>) -> String {
    let mut rows: Vec<String> = Vec::with_capacity(suite.item_count());
    for section in &suite.sections {
        for item in &section.items {
            let mut segments: Vec<&str> = Vec::with_capacity(6 + item.branches.len());
            let fingerprint = item_fingerprint(item);
            let letter = correct_letter(item.correct_branch_index).to_string();
            let picture = picture_field(item.picture.as_deref(), picture_prefix, picture_ext);

            segments.push(&item.serial);
            segments.push(&fingerprint);
            segments.push(&item.question);
            segments.push(&letter);
            segments.push(&picture);
            segments.push(item.reference.as_deref().unwrap_or(""));
            for branch in &item.branches {
                segments.push(branch);
            }
            rows.push(segments.join(&DECK_DELIMITER.to_string()));
        }
    }
    rows.join("\n")
}
