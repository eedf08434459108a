//! Downloads the static manual pages into `doc/<language>/<version>/`.
//!
//! Every file is fetched independently and reported on its own; a stalled
//! or failed response only affects that one file.

mod error;
mod fetcher;

pub use error::FetchError;
pub use error::Result;
pub use fetcher::DEFAULT_ASSETS;
pub use fetcher::FetchOptions;
pub use fetcher::FetchOutcome;
pub use fetcher::FetchReport;
pub use fetcher::FetchStatus;
pub use fetcher::FetchTarget;
pub use fetcher::Fetcher;
