//! Read an Arc export, extract its bookmarks and write a Netscape file.

use crate::config::Config;
use crate::error::Result;
use crate::export::{BookmarkExporter, NetscapeExporter};
use crate::extract::{extract_with_stats, ExtractStats};
use crate::models::Bookmark;
use log::{debug, info};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Knobs for the output document
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConvertOptions {
    pub exporter: NetscapeExporter,
}

impl From<&Config> for ConvertOptions {
    fn from(config: &Config) -> Self {
        Self {
            exporter: NetscapeExporter::new(config.folder_title.clone(), config.escape_html),
        }
    }
}

/// Outcome of a successful conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub count: usize,
    pub output: PathBuf,
    pub stats: ExtractStats,
}

impl ConversionReport {
    /// A conversion that wrote a file with no bookmarks in it
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Read and parse an export file
pub fn read_export(path: &Path) -> Result<Value> {
    let mut bytes = fs::read(path)?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());
    let root: Value = simd_json::serde::from_slice(&mut bytes)?;
    Ok(root)
}

/// Extract bookmarks from an export file without writing anything
pub fn load_bookmarks(input: &Path) -> Result<(Vec<Bookmark>, ExtractStats)> {
    let root = read_export(input)?;
    Ok(extract_with_stats(&root, chrono::Utc::now().timestamp()))
}

/// Run the whole pipeline. Any read, parse or write error aborts the
/// conversion; an export without bookmarks still produces a file.
pub fn convert(input: &Path, output: &Path, options: &ConvertOptions) -> Result<ConversionReport> {
    let (bookmarks, stats) = load_bookmarks(input)?;

    options.exporter.export(&bookmarks, output)?;
    info!(
        "Wrote {} bookmarks from {} to {}",
        bookmarks.len(),
        input.display(),
        output.display()
    );

    Ok(ConversionReport {
        count: bookmarks.len(),
        output: output.to_path_buf(),
        stats,
    })
}
