use serde::Serialize;

// @module: Question bank data model

/// Expected number of answer choices per item across all corpora
pub const SANE_BRANCH_COUNT: usize = 4;

/// Label of the implicit section produced by unsectioned corpora
pub const SOLE_SECTION_LABEL: &str = "Sole";

/// One exam question with its answer choices
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Item identifier, format varies by dialect
    pub serial: String,

    /// Question text
    pub question: String,

    /// Answer choices in significant order: defines the correctness
    /// mapping pre-shuffle, becomes presentation order post-shuffle
    pub branches: Vec<String>,

    /// Index into `branches` identifying the correct choice
    pub correct_branch_index: usize,

    /// Optional citation string (titled dialect only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Optional image reference, filename or figure label, no extension
    /// by convention
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

/// A labelled group of items, in source order
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub label: String,
    pub description: String,
    pub items: Vec<Item>,
}

impl Section {
    pub fn with_label(label: impl Into<String>, description: impl Into<String>) -> Self {
        Section {
            label: label.into(),
            description: description.into(),
            items: Vec::new(),
        }
    }
}

/// The complete parsed question bank for one exam level
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suite {
    pub level: String,
    pub region: String,
    pub version: String,
    pub random_seed: u64,
    pub sections: Vec<Section>,
}

impl Suite {
    /// Build a suite around already-parsed sections. The seed is derived
    /// from the level label alone so runs are reproducible without any
    /// external state.
    pub fn new(
        level: impl Into<String>,
        region: impl Into<String>,
        version: impl Into<String>,
        seed_delta: i64,
        sections: Vec<Section>,
    ) -> Self {
        let level = level.into();
        let seed = Self::seed_for_level(&level, seed_delta);
        Suite {
            level,
            region: region.into(),
            version: version.into(),
            random_seed: seed,
            sections,
        }
    }

    /// Seed derivation: code point of the first character of the level
    /// label plus a configurable delta (zero in every shipped config).
    pub fn seed_for_level(level: &str, seed_delta: i64) -> u64 {
        let base = level.chars().next().map_or(0, |c| c as i64);
        (base + seed_delta).max(0) as u64
    }

    /// Total item count across all sections
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }
}
