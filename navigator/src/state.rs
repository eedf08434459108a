use luadoc_protocol::DocLocation;
use luadoc_protocol::LocationError;
use luadoc_protocol::ViewerMessage;
use luadoc_protocol::split_anchor;

/// What an open panel currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DisplayState {
    /// Created, nothing rendered yet.
    #[default]
    Blank,
    /// The not-found page for a manual without sources.
    NotFound { language: String, version: String },
    /// A compiled page. `location.anchor` is the last anchor requested.
    Document { location: DocLocation, title: String },
}

impl DisplayState {
    /// True when `location` names the page already on screen, anchors aside.
    pub fn shows_document(&self, location: &DocLocation) -> bool {
        match self {
            DisplayState::Document { location: shown, .. } => {
                shown.language == location.language
                    && shown.version == location.version
                    && shown.file == location.file
            }
            DisplayState::Blank | DisplayState::NotFound { .. } => false,
        }
    }

    pub fn location(&self) -> Option<&DocLocation> {
        match self {
            DisplayState::Document { location, .. } => Some(location),
            DisplayState::Blank | DisplayState::NotFound { .. } => None,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            DisplayState::Document { title, .. } => Some(title.as_str()),
            DisplayState::NotFound { .. } => Some(crate::page::ERROR_TITLE),
            DisplayState::Blank => None,
        }
    }
}

/// Resolves a viewer message against the manual currently on screen.
///
/// `Ok(None)` means there is no document to resolve against.
pub fn route_viewer_message(
    state: &DisplayState,
    message: &ViewerMessage,
) -> Result<Option<DocLocation>, LocationError> {
    let Some(current) = state.location() else {
        return Ok(None);
    };
    match message {
        ViewerMessage::Goto { uri } => {
            let (file, anchor) = split_anchor(uri);
            current.sibling(file, anchor).map(Some)
        }
    }
}
