use crate::HostInput;
use crate::PanelEvent;
use crate::StdioHost;
use crate::Workspace;
use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use luadoc_core::LuaDoc;
use luadoc_protocol::ViewerMessage;
use std::io;
use std::io::BufRead;
use std::io::Write;
use tracing::info;
use tracing::warn;

#[derive(Debug, Parser)]
pub struct OpenArgs {
    /// `<language>/<version>/<file>[#<anchor>]` (defaults to the configured location)
    #[arg(value_name = "LOCATION")]
    pub location: Option<String>,
}

pub fn run(workspace: &Workspace, args: OpenArgs) -> Result<()> {
    run_session(
        workspace,
        args.location.as_deref(),
        io::stdin().lock(),
        io::stdout(),
    )
}

/// Runs the open command, then feeds input lines to the panel until EOF.
pub fn run_session<R: BufRead, W: Write>(
    workspace: &Workspace,
    location: Option<&str>,
    input: R,
    output: W,
) -> Result<()> {
    let mut doc = LuaDoc::activate(
        workspace.root.clone(),
        workspace.config.clone(),
        StdioHost::new(output),
    );
    let command = doc.open_command().to_string();
    doc.execute(&command, location);

    for line in input.lines() {
        let line = line.context("failed to read panel input")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<HostInput>(line) {
            Ok(HostInput::Goto { uri }) => {
                doc.on_viewer_message(&ViewerMessage::Goto { uri });
            }
            Ok(HostInput::Open { location }) => {
                doc.execute(&command, location.as_deref());
            }
            Ok(HostInput::Close) => {
                if !doc.navigator().is_open() {
                    continue;
                }
                doc.navigator()
                    .host()
                    .emit(&PanelEvent::Disposed)
                    .context("failed to write panel event")?;
                doc.on_panel_disposed();
            }
            Err(err) => warn!("ignoring unreadable input {line:?}: {err}"),
        }
    }
    info!("input closed, ending session");
    Ok(())
}
