use crate::error::NavigatorError;
use crate::error::Result;
use crate::page::ERROR_TITLE;
use crate::page::extract_title;
use crate::page::not_found_html;
use crate::panel::Panel;
use crate::panel::PanelHost;
use crate::panel::PanelOptions;
use crate::state::DisplayState;
use crate::state::route_viewer_message;
use luadoc_compiler::CompileOutcome;
use luadoc_compiler::DocLayout;
use luadoc_compiler::ensure_compiled;
use luadoc_protocol::DocLocation;
use luadoc_protocol::HostMessage;
use luadoc_protocol::ViewerMessage;
use std::fs;
use std::path::Path;
use tracing::debug;
use tracing::info;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The requested page is on screen. `reloaded` is false when it already
    /// was and only the anchor (if any) was sent.
    Displayed { reloaded: bool },
    /// The manual has no sources; the not-found page is on screen.
    NotFound,
}

struct OpenPanel<P> {
    panel: P,
    state: DisplayState,
}

/// Owns the single documentation panel and routes navigation requests to
/// compiled pages.
///
/// With no panel the navigator is idle. `activate` creates the panel on
/// first use and reveals it afterwards; `on_panel_disposed` returns to idle.
pub struct Navigator<H: PanelHost> {
    layout: DocLayout,
    options: PanelOptions,
    host: H,
    panel: Option<OpenPanel<H::Panel>>,
}

impl<H: PanelHost> Navigator<H> {
    pub fn new(layout: DocLayout, options: PanelOptions, host: H) -> Self {
        Self {
            layout,
            options,
            host,
            panel: None,
        }
    }

    pub fn layout(&self) -> &DocLayout {
        &self.layout
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn is_open(&self) -> bool {
        self.panel.is_some()
    }

    pub fn panel(&self) -> Option<&H::Panel> {
        self.panel.as_ref().map(|open| &open.panel)
    }

    /// `None` while idle.
    pub fn display_state(&self) -> Option<&DisplayState> {
        self.panel.as_ref().map(|open| &open.state)
    }

    /// Opens `location` (`"<language>/<version>/<file>[#<anchor>]"`).
    ///
    /// A malformed location fails before any panel is created. Any other
    /// error leaves the panel showing what it showed before.
    pub fn activate(&mut self, location: &str) -> Result<NavigationOutcome> {
        let location = DocLocation::parse(location)?;
        let open = open_or_reveal(&mut self.panel, &mut self.host, &self.options)?;
        display(&self.layout, open, &location)
    }

    /// Handles a message posted by the page's navigation script.
    ///
    /// Returns `Ok(None)` when there is nothing to navigate from (no panel,
    /// or no document on screen).
    pub fn on_viewer_message(
        &mut self,
        message: &ViewerMessage,
    ) -> Result<Option<NavigationOutcome>> {
        let Some(open) = self.panel.as_mut() else {
            warn!("ignoring {message:?}: no documentation panel is open");
            return Ok(None);
        };
        let location = route_viewer_message(&open.state, message).map_err(|source| {
            let ViewerMessage::Goto { uri } = message;
            NavigatorError::InvalidDocument {
                uri: uri.clone(),
                source,
            }
        })?;
        let Some(location) = location else {
            warn!("ignoring {message:?}: no document is displayed");
            return Ok(None);
        };
        display(&self.layout, open, &location).map(Some)
    }

    /// The user closed the panel.
    pub fn on_panel_disposed(&mut self) {
        if self.panel.take().is_some() {
            info!("documentation panel closed");
        }
    }
}

fn open_or_reveal<'a, H: PanelHost>(
    slot: &'a mut Option<OpenPanel<H::Panel>>,
    host: &mut H,
    options: &PanelOptions,
) -> Result<&'a mut OpenPanel<H::Panel>> {
    match slot {
        Some(open) => {
            open.panel.reveal().map_err(NavigatorError::Panel)?;
            Ok(open)
        }
        None => {
            let panel = host.create_panel(options).map_err(NavigatorError::Panel)?;
            info!("created {} panel", options.view_type);
            Ok(slot.insert(OpenPanel {
                panel,
                state: DisplayState::Blank,
            }))
        }
    }
}

fn display<P: Panel>(
    layout: &DocLayout,
    open: &mut OpenPanel<P>,
    location: &DocLocation,
) -> Result<NavigationOutcome> {
    let manual = layout.manual(&location.language, &location.version);
    let panel = &open.panel;
    let resolver = |path: &Path| panel.asset_uri(path);
    match ensure_compiled(&manual.source, &manual.output, &resolver)? {
        CompileOutcome::SourceMissing => {
            open.panel
                .set_title(ERROR_TITLE)
                .map_err(NavigatorError::Panel)?;
            open.panel
                .set_html(&not_found_html(&location.language, &location.version))
                .map_err(NavigatorError::Panel)?;
            open.state = DisplayState::NotFound {
                language: location.language.clone(),
                version: location.version.clone(),
            };
            return Ok(NavigationOutcome::NotFound);
        }
        CompileOutcome::Compiled(report) => {
            debug!("compiled {} files for {}", report.total(), location.manual_key());
        }
        CompileOutcome::UpToDate => {}
    }

    let reloaded = !open.state.shows_document(location);
    if reloaded {
        let path = manual.compiled_file(&location.file);
        let html = fs::read_to_string(&path).map_err(|source| NavigatorError::Io {
            path: path.clone(),
            source,
        })?;
        let title = extract_title(&html)
            .ok_or_else(|| NavigatorError::MissingTitle { path: path.clone() })?
            .to_string();
        open.panel
            .set_title(&title)
            .map_err(NavigatorError::Panel)?;
        open.panel.set_html(&html).map_err(NavigatorError::Panel)?;
        info!("showing {location} ({title})");
        open.state = DisplayState::Document {
            location: location.clone(),
            title,
        };
    }

    if let Some(anchor) = &location.anchor {
        open.panel
            .post_message(&HostMessage::Goto {
                anchor: anchor.clone(),
            })
            .map_err(NavigatorError::Panel)?;
    }
    if let DisplayState::Document {
        location: shown, ..
    } = &mut open.state
    {
        shown.anchor = location.anchor.clone();
    }
    Ok(NavigationOutcome::Displayed { reloaded })
}
