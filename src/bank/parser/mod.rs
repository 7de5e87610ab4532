/*!
 * Dialect parsers for the three regional question-bank text formats.
 *
 * Each dialect is a narrow, hand-matched, line-oriented state machine:
 * - `marker` (cn): single-letter bracketed line tags
 * - `titled` (us): section headers, title lines, `~` terminators
 * - `enumerated` (tw): numbered parenthetical titles and choices
 *
 * The grammars are fixed against known corpora. Lines a dialect does not
 * recognize are silently skipped; the corpora carry plenty of headers,
 * blank lines and page artifacts. Only an unknown region tag is fatal.
 */

mod enumerated;
mod marker;
mod titled;

use crate::bank::model::Section;
use crate::errors::ParseError;

/// The three fixed text grammars a source corpus may follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Bracketed single-letter line tags, one implicit section
    Marker,
    /// US-style sectioned format with title lines and `~` terminators
    Titled,
    /// TW-style numbered parenthetical titles and choices
    Enumerated,
}

impl Dialect {
    /// Map a source descriptor region tag to its dialect. There is no
    /// fallback parser: an unrecognized region fails the whole suite.
    pub fn from_region(region: &str) -> Result<Self, ParseError> {
        match region {
            "cn" => Ok(Dialect::Marker),
            "us" => Ok(Dialect::Titled),
            "tw" => Ok(Dialect::Enumerated),
            other => Err(ParseError::UnknownRegion(other.to_string())),
        }
    }
}

/// Parse normalized text into ordered sections of ordered items.
pub fn parse(content: &str, dialect: Dialect) -> Vec<Section> {
    match dialect {
        Dialect::Marker => marker::parse(content),
        Dialect::Titled => titled::parse(content),
        Dialect::Enumerated => enumerated::parse(content),
    }
}
