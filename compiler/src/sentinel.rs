use crate::error::Result;
use crate::error::io_at;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

pub const SENTINEL_FILE_NAME: &str = ".compiled";

/// Marker written into a compiled tree. Its content is the absolute source
/// path the tree was produced from.
///
/// Validity is path identity only: edits under an unchanged source path are
/// not noticed.
#[derive(Debug, Clone)]
pub struct Sentinel {
    path: PathBuf,
}

impl Sentinel {
    pub fn in_output(output_dir: &Path) -> Self {
        Self {
            path: output_dir.join(SENTINEL_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Recorded source path, `None` when the tree was never compiled.
    pub fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let recorded = fs::read_to_string(&self.path).map_err(io_at(&self.path))?;
        Ok(Some(recorded))
    }

    pub fn is_current(&self, source_dir: &Path) -> Result<bool> {
        let Some(recorded) = self.read()? else {
            return Ok(false);
        };
        Ok(recorded == source_identity(source_dir))
    }

    pub fn record(&self, source_dir: &Path) -> Result<()> {
        fs::write(&self.path, source_identity(source_dir)).map_err(io_at(&self.path))
    }
}

/// Absolute form of `source_dir` as stored in the sentinel. Symlinks are
/// resolved when the directory exists.
pub fn source_identity(source_dir: &Path) -> String {
    let absolute = dunce::canonicalize(source_dir)
        .or_else(|_| std::path::absolute(source_dir))
        .unwrap_or_else(|_| source_dir.to_path_buf());
    absolute.to_string_lossy().into_owned()
}
