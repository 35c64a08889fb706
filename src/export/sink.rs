use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::export::png::EncodedImage;
use crate::foundation::error::BoothResult;

/// Target that offers an encoded capture to the user under a filename.
///
/// Each capture is offered exactly once; a failed offer is reported, never retried.
pub trait DownloadSink {
    /// Offer `image` as `filename`.
    fn offer(&mut self, filename: &str, image: &EncodedImage) -> BoothResult<()>;
}

/// Keeps every offer in memory, for tests and embedding hosts.
#[derive(Debug, Default)]
pub struct InMemoryDownloads {
    offers: Vec<(String, EncodedImage)>,
}

impl InMemoryDownloads {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers in the order they were made.
    pub fn offers(&self) -> &[(String, EncodedImage)] {
        &self.offers
    }

    /// The most recent offer.
    pub fn last(&self) -> Option<&(String, EncodedImage)> {
        self.offers.last()
    }
}

impl DownloadSink for InMemoryDownloads {
    fn offer(&mut self, filename: &str, image: &EncodedImage) -> BoothResult<()> {
        self.offers.push((filename.to_string(), image.clone()));
        Ok(())
    }
}

/// Writes each offer to `<dir>/<filename>`, replacing an existing file of the same name.
#[derive(Debug, Clone)]
pub struct DirectoryDownloads {
    dir: PathBuf,
}

impl DirectoryDownloads {
    /// Write into `dir`, created on first offer if missing.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for DirectoryDownloads {
    fn offer(&mut self, filename: &str, image: &EncodedImage) -> BoothResult<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create download dir '{}'", self.dir.display()))?;
        let path = self.dir.join(filename);
        std::fs::write(&path, &image.bytes)
            .with_context(|| format!("write capture '{}'", path.display()))?;
        tracing::debug!(path = %path.display(), "capture written");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/sink.rs"]
mod tests;
