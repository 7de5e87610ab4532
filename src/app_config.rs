use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings, plus the source
/// descriptor table that drives the batch run.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Root directory holding one subdirectory per region
    #[serde(default = "default_source_root")]
    pub source_root: PathBuf,

    /// Subdirectory (under each region) receiving generated artifacts
    #[serde(default = "default_generated_subdir")]
    pub generated_subdir: String,

    /// Delta added to the level-derived random seed. Must stay zero for
    /// decks to be reproducible from the level label alone.
    #[serde(default)]
    pub seed_delta: i64,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Source corpora to convert, one suite per entry
    #[serde(default = "default_sources")]
    pub sources: Vec<SourceSpec>,
}

/// One source corpus descriptor: which file to convert and how.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SourceSpec {
    /// Exam level identifier (also the seed source)
    pub level: String,

    /// Region tag selecting the dialect parser and the on-disk subtree
    pub region: String,

    /// Source filename under `<source_root>/<region>/`
    pub filename: String,

    /// Character encoding label of the source file (e.g. "gbk", "utf-8")
    pub encoding: String,

    /// Optional prefix prepended to picture names in deck rows
    #[serde(default)]
    pub picture_prefix: Option<String>,

    /// Optional file extension appended to picture names in deck rows
    #[serde(default)]
    pub picture_ext: Option<String>,

    /// Source corpus version string, part of the output filename
    pub version: String,
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.sources.is_empty() {
            return Err(anyhow!("No source descriptors configured"));
        }

        let mut seen: HashSet<(String, String)> = HashSet::new();
        for source in &self.sources {
            if source.level.is_empty()
                || source.region.is_empty()
                || source.filename.is_empty()
                || source.version.is_empty()
            {
                return Err(anyhow!(
                    "Source descriptor '{}/{}' has empty mandatory fields",
                    source.region,
                    source.level
                ));
            }
            if encoding_rs::Encoding::for_label(source.encoding.as_bytes()).is_none() {
                return Err(anyhow!(
                    "Unknown encoding label '{}' for source {}/{}",
                    source.encoding,
                    source.region,
                    source.level
                ));
            }
            if !seen.insert((source.region.clone(), source.level.clone())) {
                return Err(anyhow!(
                    "Duplicate source descriptor for {}/{}, output files would collide",
                    source.region,
                    source.level
                ));
            }
        }
        Ok(())
    }

    /// Path of the source text file for a descriptor
    pub fn source_path(&self, source: &SourceSpec) -> PathBuf {
        self.source_root.join(&source.region).join(&source.filename)
    }

    /// Directory probed for conventionally named images during repair
    pub fn images_dir(&self, source: &SourceSpec) -> PathBuf {
        self.source_root.join(&source.region).join("images")
    }

    /// Collision-free output stem: `<REGION-UPPER>-<level>-<version>`
    pub fn output_basename(&self, source: &SourceSpec) -> String {
        format!(
            "{}-{}-{}",
            source.region.to_uppercase(),
            source.level,
            source.version
        )
    }

    /// Path of the archive artifact for a descriptor
    pub fn archive_path(&self, source: &SourceSpec) -> PathBuf {
        self.generated_dir(source)
            .join(self.output_basename(source) + ".json")
    }

    /// Path of the deck artifact for a descriptor
    pub fn deck_path(&self, source: &SourceSpec) -> PathBuf {
        self.generated_dir(source)
            .join(self.output_basename(source) + ".csv")
    }

    fn generated_dir(&self, source: &SourceSpec) -> PathBuf {
        self.source_root
            .join(&source.region)
            .join(&self.generated_subdir)
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source_root: default_source_root(),
            generated_subdir: default_generated_subdir(),
            seed_delta: 0,
            log_level: LogLevel::default(),
            sources: default_sources(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_source_root() -> PathBuf {
    PathBuf::from("data")
}

fn default_generated_subdir() -> String {
    "generated".to_string()
}

fn spec(
    level: &str,
    region: &str,
    filename: &str,
    encoding: &str,
    picture_ext: Option<&str>,
    version: &str,
) -> SourceSpec {
    SourceSpec {
        level: level.to_string(),
        region: region.to_string(),
        filename: filename.to_string(),
        encoding: encoding.to_string(),
        picture_prefix: None,
        picture_ext: picture_ext.map(str::to_string),
        version: version.to_string(),
    }
}

/// The known corpus table. Levels A/B/C are the 2017 marker-dialect pools
/// (GBK encoded); the three US license classes are UTF-8 titled pools.
fn default_sources() -> Vec<SourceSpec> {
    vec![
        spec("A", "cn", "a2017.txt", "gbk", None, "v171031"),
        spec("B", "cn", "b2017.txt", "gbk", None, "v171031"),
        spec("C", "cn", "c2017.txt", "gbk", None, "v171031"),
        spec("Technician", "us", "t2018.txt", "utf-8", Some("jpg"), "2018-2022"),
        spec("General", "us", "g2019.txt", "utf-8", Some("jpg"), "2019-2023"),
        spec("Extra", "us", "e2020.txt", "utf-8", Some("png"), "2020-2024"),
    ]
}
