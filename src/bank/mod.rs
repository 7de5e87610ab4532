/*!
 * Question-bank domain: data model, dialect parsers, deterministic
 * shuffling, sanity checks and export rendering.
 */

pub mod export;
pub mod model;
pub mod parser;
pub mod repair;
pub mod rng;
pub mod sanity;
pub mod shuffle;

pub use model::{Item, Section, Suite};
pub use parser::Dialect;
pub use rng::LegacyRng;
pub use sanity::SanityReport;
