use luadoc_compiler::CompilerError;
use luadoc_protocol::LocationError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavigatorError {
    #[error(transparent)]
    Location(#[from] LocationError),

    #[error("viewer asked for `{uri}`: {source}")]
    InvalidDocument {
        uri: String,
        #[source]
        source: LocationError,
    },

    #[error("compilation failed: {0}")]
    Compiler(#[from] CompilerError),

    #[error("{} has no <title> element", path.display())]
    MissingTitle { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("panel error: {0}")]
    Panel(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NavigatorError>;
