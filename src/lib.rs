/*!
 * # bankdeck - exam question banks to flashcard decks
 *
 * A Rust library and CLI that converts fixed-format exam question-bank
 * text files into structured archives and shuffled flashcard decks.
 *
 * ## Features
 *
 * - Three regional source dialects (marker, titled, enumerated) parsed by
 *   hand-matched line-oriented state machines
 * - Deterministic, seed-reproducible branch shuffling that preserves the
 *   correct choice and keeps "catch-all" choices last
 * - Structural sanity reporting without blocking export
 * - Lossless JSON archive (pre-shuffle) plus delimited deck rows
 *   (post-shuffle) with stable per-item content fingerprints
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration and the source descriptor table
 * - `bank`: The question-bank domain:
 *   - `bank::model`: Items, sections and suites
 *   - `bank::parser`: The three dialect state machines
 *   - `bank::rng`: The legacy seeded generator
 *   - `bank::shuffle`: Catch-all aware deterministic shuffling
 *   - `bank::sanity`: Structural validation reporting
 *   - `bank::repair`: Best-effort picture-link repair
 *   - `bank::export`: Archive and deck rendering
 * - `file_utils`: File system operations and legacy-encoding decode
 * - `app_controller`: The batch driver
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod bank;
pub mod errors;
pub mod file_utils;

// Re-export main types for easier usage
pub use app_config::{Config, SourceSpec};
pub use app_controller::Controller;
pub use bank::{Dialect, Item, LegacyRng, SanityReport, Section, Suite};
pub use errors::{AppError, ExportError, ParseError};
