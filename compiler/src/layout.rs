use crate::sentinel::SENTINEL_FILE_NAME;
use std::path::Path;
use std::path::PathBuf;

const SOURCE_DIR: &str = "doc";
const OUTPUT_DIR: &str = "out";

/// On-disk layout of a documentation workspace:
///
/// ```text
/// <root>/doc/<language>/<version>/*            downloaded pages
/// <root>/out/<language>/<version>/*            compiled pages
/// <root>/out/<language>/<version>/.compiled    sentinel
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocLayout {
    root: PathBuf,
}

impl DocLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn source_root(&self) -> PathBuf {
        self.root.join(SOURCE_DIR)
    }

    pub fn output_root(&self) -> PathBuf {
        self.root.join(OUTPUT_DIR)
    }

    pub fn manual(&self, language: &str, version: &str) -> ManualPaths {
        ManualPaths {
            source: self.source_root().join(language).join(version),
            output: self.output_root().join(language).join(version),
        }
    }
}

/// Source and destination directories of one `(language, version)` manual.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualPaths {
    pub source: PathBuf,
    pub output: PathBuf,
}

impl ManualPaths {
    pub fn sentinel(&self) -> PathBuf {
        self.output.join(SENTINEL_FILE_NAME)
    }

    pub fn compiled_file(&self, name: &str) -> PathBuf {
        self.output.join(name)
    }
}
