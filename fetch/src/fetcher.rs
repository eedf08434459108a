use crate::error::DownloadError;
use crate::error::FetchError;
use crate::error::Result;
use futures::future::join_all;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tracing::info;
use tracing::warn;
use url::Url;

/// Files published for every manual version.
pub const DEFAULT_ASSETS: [&str; 8] = [
    "readme.html",
    "contents.html",
    "manual.html",
    "index.css",
    "lua.css",
    "manual.css",
    "logo.gif",
    "osi-certified-72x60.png",
];

/// One manual to download: every asset is fetched from `<origin>/<name>`
/// into `<directory>/<name>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchTarget {
    /// Human-readable key such as `en-us/54`.
    pub label: String,
    pub origin: String,
    pub directory: PathBuf,
}

#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Per-request timeout. `None` waits for as long as the server keeps the
    /// connection open.
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    Downloaded { bytes: u64 },
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    pub label: String,
    pub url: String,
    pub path: PathBuf,
    pub status: FetchStatus,
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self.status, FetchStatus::Downloaded { .. })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchReport {
    pub outcomes: Vec<FetchOutcome>,
}

impl FetchReport {
    pub fn succeeded(&self) -> impl Iterator<Item = &FetchOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.is_success())
    }

    pub fn failed(&self) -> impl Iterator<Item = &FetchOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.is_success())
    }

    pub fn total_bytes(&self) -> u64 {
        self.outcomes
            .iter()
            .map(|outcome| match outcome.status {
                FetchStatus::Downloaded { bytes } => bytes,
                FetchStatus::Failed { .. } => 0,
            })
            .sum()
    }
}

/// Best-effort downloader for the fixed per-version asset list.
///
/// All files are requested concurrently; one failing file never holds back
/// or aborts the others.
pub struct Fetcher {
    http: reqwest::Client,
    assets: Vec<String>,
}

impl Fetcher {
    pub fn new(assets: Vec<String>, options: FetchOptions) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            assets,
        })
    }

    pub fn with_default_assets(options: FetchOptions) -> Result<Self> {
        Self::new(
            DEFAULT_ASSETS.iter().map(ToString::to_string).collect(),
            options,
        )
    }

    pub fn assets(&self) -> &[String] {
        &self.assets
    }

    /// Creates every target directory, then downloads all assets of all
    /// targets. Only setup problems are returned as errors; per-file results
    /// are in the report.
    pub async fn fetch_all(&self, targets: &[FetchTarget]) -> Result<FetchReport> {
        let mut jobs = Vec::with_capacity(targets.len() * self.assets.len());
        for target in targets {
            tokio::fs::create_dir_all(&target.directory)
                .await
                .map_err(|source| FetchError::CreateDir {
                    path: target.directory.clone(),
                    source,
                })?;
            for name in &self.assets {
                let url = asset_url(&target.origin, name)?;
                jobs.push((target.label.clone(), url, target.directory.join(name)));
            }
        }

        let outcomes = join_all(
            jobs.into_iter()
                .map(|(label, url, path)| self.fetch_one(label, url, path)),
        )
        .await;
        Ok(FetchReport { outcomes })
    }

    async fn fetch_one(&self, label: String, url: Url, path: PathBuf) -> FetchOutcome {
        let status = match self.download(url.clone(), &path).await {
            Ok(bytes) => {
                info!("OK: {url} ({bytes} bytes)");
                FetchStatus::Downloaded { bytes }
            }
            Err(err) => {
                warn!("failed to download {url}: {err}");
                FetchStatus::Failed {
                    error: err.to_string(),
                }
            }
        };
        FetchOutcome {
            label,
            url: url.to_string(),
            path,
            status,
        }
    }

    async fn download(&self, url: Url, path: &Path) -> std::result::Result<u64, DownloadError> {
        let mut response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::Status(status));
        }
        let write_err = |source| DownloadError::Write {
            path: path.to_path_buf(),
            source,
        };
        let mut file = tokio::fs::File::create(path).await.map_err(write_err)?;
        let mut bytes = 0u64;
        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk).await.map_err(write_err)?;
            bytes += chunk.len() as u64;
        }
        file.flush().await.map_err(write_err)?;
        Ok(bytes)
    }
}

fn asset_url(origin: &str, name: &str) -> Result<Url> {
    let raw = format!("{}/{name}", origin.trim_end_matches('/'));
    Url::parse(&raw).map_err(|source| FetchError::InvalidOrigin {
        origin: origin.to_string(),
        source,
    })
}
