use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::Path;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Read a legacy-encoded source file and return unified text.
    ///
    /// Decodes with the labelled encoding, then normalizes line endings
    /// (`\r\n` to `\n`) and the stray record-separator control character
    /// (`\u{1e}`) some corpora carry to `-`, so the dialect parsers only
    /// ever see clean lines.
    pub fn read_decoded<P: AsRef<Path>>(path: P, encoding_label: &str) -> Result<String> {
        let path = path.as_ref();
        let encoding = encoding_rs::Encoding::for_label(encoding_label.as_bytes())
            .ok_or_else(|| anyhow!("Unknown encoding label: {}", encoding_label))?;

        let bytes = fs::read(path).with_context(|| format!("Failed to read file: {:?}", path))?;
        let (text, _, had_errors) = encoding.decode(&bytes);
        if had_errors {
            return Err(anyhow!(
                "File {:?} is not valid {}: decoding produced replacement characters",
                path,
                encoding.name()
            ));
        }

        Ok(text.replace("\r\n", "\n").replace('\u{1e}', "-"))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }
}
