use luadoc_compiler::DocLayout;
use luadoc_fetch::DEFAULT_ASSETS;
use luadoc_fetch::FetchOptions;
use luadoc_fetch::FetchTarget;
use luadoc_navigator::PanelOptions;
use luadoc_protocol::DEFAULT_LOCATION;
use luadoc_protocol::DocLocation;
use serde::Deserialize;
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Optional configuration file looked up in the workspace root.
pub const CONFIG_FILE_NAME: &str = "luadoc.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// One published manual and where to download it from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocSource {
    pub language: String,
    pub version: String,
    /// Base URL; assets are fetched from `<origin>/<name>`.
    pub origin: String,
}

impl DocSource {
    pub fn new(language: &str, version: &str, origin: &str) -> Self {
        Self {
            language: language.to_string(),
            version: version.to_string(),
            origin: origin.to_string(),
        }
    }

    /// `"<language>/<version>"`.
    pub fn key(&self) -> String {
        format!("{}/{}", self.language, self.version)
    }

    pub fn fetch_target(&self, layout: &DocLayout) -> FetchTarget {
        FetchTarget {
            label: self.key(),
            origin: self.origin.clone(),
            directory: layout.manual(&self.language, &self.version).source,
        }
    }
}

/// Settings for fetching, compiling and showing the manuals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuaDocConfig {
    /// Panel type handed to the host when the panel is created.
    #[serde(default = "default_view_type")]
    pub view_type: String,

    /// Name of the "open documentation" command.
    #[serde(default = "default_open_command")]
    pub open_command: String,

    /// Location opened when the command gets no argument.
    #[serde(default = "default_location")]
    pub default_location: String,

    /// File names downloaded for every manual.
    #[serde(default = "default_assets")]
    pub assets: Vec<String>,

    #[serde(default = "default_sources")]
    pub sources: Vec<DocSource>,

    /// Per-request download timeout. Unset waits indefinitely.
    #[serde(default)]
    pub fetch_timeout_secs: Option<u64>,
}

fn default_view_type() -> String {
    "lua-doc".to_string()
}

fn default_open_command() -> String {
    "extension.lua.doc".to_string()
}

fn default_location() -> String {
    DEFAULT_LOCATION.to_string()
}

fn default_assets() -> Vec<String> {
    DEFAULT_ASSETS.iter().map(ToString::to_string).collect()
}

fn default_sources() -> Vec<DocSource> {
    vec![
        DocSource::new("en-us", "51", "https://www.lua.org/manual/5.1"),
        DocSource::new("en-us", "52", "https://www.lua.org/manual/5.2"),
        DocSource::new("en-us", "53", "https://www.lua.org/manual/5.3"),
        DocSource::new("en-us", "54", "https://www.lua.org/manual/5.4"),
    ]
}

impl Default for LuaDocConfig {
    fn default() -> Self {
        Self {
            view_type: default_view_type(),
            open_command: default_open_command(),
            default_location: default_location(),
            assets: default_assets(),
            sources: default_sources(),
            fetch_timeout_secs: None,
        }
    }
}

impl LuaDocConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `<root>/luadoc.toml` when present, defaults otherwise.
    pub fn load_from_root(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sources.is_empty() {
            return Err(ConfigError::Invalid("no documentation sources".to_string()));
        }
        if self.assets.is_empty() {
            return Err(ConfigError::Invalid("asset list is empty".to_string()));
        }
        if self.open_command.is_empty() {
            return Err(ConfigError::Invalid("open_command is empty".to_string()));
        }
        let mut seen = HashSet::new();
        for source in &self.sources {
            if !seen.insert(source.key()) {
                return Err(ConfigError::Invalid(format!(
                    "source {} is listed twice",
                    source.key()
                )));
            }
        }
        DocLocation::parse(&self.default_location).map_err(|err| {
            ConfigError::Invalid(format!("default_location: {err}"))
        })?;
        Ok(())
    }

    pub fn source(&self, language: &str, version: &str) -> Option<&DocSource> {
        self.sources
            .iter()
            .find(|source| source.language == language && source.version == version)
    }

    pub fn fetch_targets(&self, layout: &DocLayout) -> Vec<FetchTarget> {
        self.sources
            .iter()
            .map(|source| source.fetch_target(layout))
            .collect()
    }

    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            timeout: self.fetch_timeout_secs.map(Duration::from_secs),
        }
    }

    pub fn panel_options(&self) -> PanelOptions {
        PanelOptions::new(self.view_type.clone())
    }
}
