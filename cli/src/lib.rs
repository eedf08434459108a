//! The `luadoc` command line: download, compile and browse the Lua manuals
//! from a terminal or from any process that speaks the JSON-line panel
//! protocol.

pub mod compile_cmd;
pub mod fetch_cmd;
pub mod open_cmd;
mod stdio_panel;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use clap::Subcommand;
use luadoc_core::LuaDocConfig;
use std::path::PathBuf;

pub use stdio_panel::HostInput;
pub use stdio_panel::PanelEvent;
pub use stdio_panel::StdioHost;
pub use stdio_panel::StdioPanel;
pub use stdio_panel::file_uri;

#[derive(Debug, Parser)]
#[command(name = "luadoc", version, about = "Lua reference manual viewer")]
pub struct Cli {
    /// Workspace holding `doc/` and `out/` (defaults to current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Configuration file (defaults to `<root>/luadoc.toml` when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Download the manuals into doc/
    Fetch(fetch_cmd::FetchArgs),

    /// Compile one manual into out/
    Compile(compile_cmd::CompileArgs),

    /// Show the manual in a JSON-line panel on stdin/stdout
    Open(open_cmd::OpenArgs),
}

/// Workspace root plus the configuration that applies to it.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
    pub config: LuaDocConfig,
}

impl Workspace {
    pub fn resolve(root: Option<PathBuf>, config: Option<PathBuf>) -> Result<Self> {
        let root = match root {
            Some(root) => root,
            None => std::env::current_dir().context("failed to get current directory")?,
        };
        let config = match config {
            Some(path) => LuaDocConfig::load(&path),
            None => LuaDocConfig::load_from_root(&root),
        }
        .context("failed to load configuration")?;
        Ok(Self { root, config })
    }
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let workspace = Workspace::resolve(self.root, self.config)?;
        match self.command {
            Command::Fetch(args) => fetch_cmd::run(&workspace, args).await,
            Command::Compile(args) => compile_cmd::run(&workspace, args),
            Command::Open(args) => open_cmd::run(&workspace, args),
        }
    }
}

/// Splits a `<language>/<version>` manual key.
pub(crate) fn parse_manual_key(key: &str) -> Result<(String, String)> {
    match key.split_once('/') {
        Some((language, version))
            if !language.is_empty() && !version.is_empty() && !version.contains('/') =>
        {
            Ok((language.to_string(), version.to_string()))
        }
        _ => anyhow::bail!("expected <language>/<version>, got `{key}`"),
    }
}
