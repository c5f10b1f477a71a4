//! Writing extraction results to disk.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Options for writing output files.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    /// Create missing parent directories instead of failing
    pub create_dirs: bool,
}

impl OutputOptions {
    /// Create new output options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable creation of missing parent directories.
    pub fn with_create_dirs(mut self, create: bool) -> Self {
        self.create_dirs = create;
        self
    }
}

/// Write `contents` to `path`, replacing any existing file.
///
/// Fails with [`Error::OutputDirMissing`] when the parent directory does not
/// exist, unless [`OutputOptions::create_dirs`] is set.
pub fn write_output<P: AsRef<Path>>(path: P, contents: &str, options: &OutputOptions) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.is_dir() {
            if !options.create_dirs {
                return Err(Error::OutputDirMissing(parent.to_path_buf()));
            }
            log::debug!("Creating output directory {}", parent.display());
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, contents)?;
    log::info!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
