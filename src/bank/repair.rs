use std::path::{Path, PathBuf};

use log::info;

use crate::bank::model::Suite;

// @module: Best-effort picture-link repair

/// Filesystem-existence capability used by the repair pass. Injected so
/// tests can probe a fake tree instead of the real corpus layout.
pub trait PictureProbe {
    fn exists(&self, path: &Path) -> bool;
}

/// Production probe backed by the real filesystem.
pub struct FsProbe;

impl PictureProbe for FsProbe {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// Fill in missing picture references by probing for a conventionally
/// named image next to the corpus.
///
/// Known upstream omission: some source records ship an image under
/// `<images_dir>/<serial>.jpg` but leave the picture field blank. This is
/// a data-quality patch, not parsing; items with an explicit picture are
/// never touched.
pub fn fix_missing_picture_labels(suite: &mut Suite, images_dir: &Path, probe: &dyn PictureProbe) {
    for section in &mut suite.sections {
        for item in &mut section.items {
            if item.picture.is_some() {
                continue;
            }
            let filename = format!("{}.jpg", item.serial);
            let candidate: PathBuf = images_dir.join(&filename);
            if probe.exists(&candidate) {
                info!("Fixing item {} missing link to picture", item.serial);
                item.picture = Some(filename);
            }
        }
    }
}
