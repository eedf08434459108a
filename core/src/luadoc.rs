use crate::config::LuaDocConfig;
use luadoc_compiler::DocLayout;
use luadoc_navigator::NavigationOutcome;
use luadoc_navigator::Navigator;
use luadoc_navigator::PanelHost;
use luadoc_protocol::ViewerMessage;
use std::path::PathBuf;
use tracing::error;
use tracing::warn;

/// The documentation feature as seen by the host: one command plus the
/// panel callbacks.
///
/// Nothing here returns an error. Failures are logged and the panel keeps
/// whatever it showed before, so a broken page never takes the host down.
pub struct LuaDoc<H: PanelHost> {
    config: LuaDocConfig,
    navigator: Navigator<H>,
}

impl<H: PanelHost> LuaDoc<H> {
    /// Wires the navigator for the workspace at `root`.
    pub fn activate(root: impl Into<PathBuf>, config: LuaDocConfig, host: H) -> Self {
        let navigator = Navigator::new(DocLayout::new(root), config.panel_options(), host);
        Self { config, navigator }
    }

    pub fn config(&self) -> &LuaDocConfig {
        &self.config
    }

    pub fn navigator(&self) -> &Navigator<H> {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut Navigator<H> {
        &mut self.navigator
    }

    pub fn open_command(&self) -> &str {
        &self.config.open_command
    }

    /// Runs a host command by name. Only the open command is known.
    pub fn execute(&mut self, command: &str, location: Option<&str>) -> Option<NavigationOutcome> {
        if command != self.config.open_command {
            warn!("unknown command `{command}`");
            return None;
        }
        self.open(location)
    }

    /// Opens `location`, or the configured default location.
    pub fn open(&mut self, location: Option<&str>) -> Option<NavigationOutcome> {
        let location = location.unwrap_or(&self.config.default_location);
        match self.navigator.activate(location) {
            Ok(outcome) => Some(outcome),
            Err(err) => {
                error!("failed to open documentation at {location}: {err}");
                None
            }
        }
    }

    pub fn on_viewer_message(&mut self, message: &ViewerMessage) -> Option<NavigationOutcome> {
        match self.navigator.on_viewer_message(message) {
            Ok(outcome) => outcome,
            Err(err) => {
                error!("failed to handle {message:?}: {err}");
                None
            }
        }
    }

    pub fn on_panel_disposed(&mut self) {
        self.navigator.on_panel_disposed();
    }
}
