use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompilerError {
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to list {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

pub type Result<T> = std::result::Result<T, CompilerError>;

pub(crate) fn io_at(path: &Path) -> impl FnOnce(std::io::Error) -> CompilerError + '_ {
    move |source| CompilerError::Io {
        path: path.to_path_buf(),
        source,
    }
}
