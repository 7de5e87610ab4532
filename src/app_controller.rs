use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};

use crate::app_config::{Config, SourceSpec};
use crate::bank::export;
use crate::bank::parser::{self, Dialect};
use crate::bank::repair::{fix_missing_picture_labels, FsProbe, PictureProbe};
use crate::bank::rng::LegacyRng;
use crate::bank::sanity;
use crate::bank::shuffle::shuffle_suite;
use crate::bank::Suite;
use crate::file_utils::FileManager;

// @module: Batch controller for question-bank conversion

/// Main application controller: runs the whole pipeline for every source
/// descriptor in the configuration, one suite at a time.
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    /// Run the batch: one fully parsed, repaired, validated, archived,
    /// shuffled and exported suite per descriptor. `level_filter` limits
    /// the run to the named levels when non-empty.
    ///
    /// A fatal error on any descriptor (unknown region, unreadable file)
    /// aborts the whole batch; sanity findings never do.
    pub fn run(&self, level_filter: &[String]) -> Result<()> {
        let selected: Vec<&SourceSpec> = self
            .config
            .sources
            .iter()
            .filter(|s| level_filter.is_empty() || level_filter.contains(&s.level))
            .collect();

        if selected.is_empty() {
            warn!("No source descriptors match the requested levels");
            return Ok(());
        }

        let progress = ProgressBar::new(selected.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} suites ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress.set_style(style.progress_chars("█▓▒░"));

        for source in selected {
            progress.set_message(format!("{}/{}", source.region, source.level));
            self.transform_source(source, &FsProbe)
                .with_context(|| format!("Failed to convert {}/{}", source.region, source.level))?;
            progress.inc(1);
        }

        progress.finish_and_clear();
        info!("Batch complete");
        Ok(())
    }

    /// Convert one source descriptor end to end and return the shuffled
    /// suite (useful for assertions in tests; the artifacts are already
    /// on disk by the time this returns).
    pub fn transform_source(&self, source: &SourceSpec, probe: &dyn PictureProbe) -> Result<Suite> {
        info!("Transforming for level {} of {}", source.level, source.region);

        let source_path = self.config.source_path(source);
        let text = FileManager::read_decoded(&source_path, &source.encoding)?;

        let dialect = Dialect::from_region(&source.region)?;
        let sections = parser::parse(&text, dialect);

        let mut suite = Suite::new(
            &source.level,
            &source.region,
            &source.version,
            self.config.seed_delta,
            sections,
        );

        fix_missing_picture_labels(&mut suite, &self.config.images_dir(source), probe);

        let report = sanity::check_suite(&suite);
        for finding in &report.warnings {
            warn!("{}", finding);
        }
        if report.is_sane() {
            info!("Suite {} is normal.", suite.level);
        } else {
            warn!("Suite {} has abnormal structure!", suite.level);
        }

        info!(
            "Collected {} items in {} sections",
            suite.item_count(),
            suite.sections.len()
        );

        // Archive first: it must carry the canonical pre-shuffle order
        let archive_path = self.config.archive_path(source);
        info!("Exporting JSON to {}", archive_path.display());
        FileManager::write_to_file(&archive_path, &export::archive_json(&suite)?)?;

        let mut rng = LegacyRng::new(suite.random_seed);
        shuffle_suite(&mut suite, &mut rng);

        let deck_path = self.config.deck_path(source);
        info!("Exporting CSV to {}", deck_path.display());
        let deck = export::deck_csv(
            &suite,
            source.picture_prefix.as_deref(),
            source.picture_ext.as_deref(),
        );
        FileManager::write_to_file(&deck_path, &deck)?;

        info!("Done.");
        Ok(suite)
    }
}
