use luadoc_protocol::HostMessage;
use std::io;
use std::path::Path;

/// How the host should configure a newly created panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelOptions {
    pub view_type: String,
    /// The compiled pages rely on the injected navigation script.
    pub enable_scripts: bool,
    pub enable_find_widget: bool,
    pub retain_context_when_hidden: bool,
}

impl PanelOptions {
    pub fn new(view_type: impl Into<String>) -> Self {
        Self {
            view_type: view_type.into(),
            enable_scripts: true,
            enable_find_widget: true,
            retain_context_when_hidden: true,
        }
    }
}

/// A host-provided view that renders one HTML document at a time.
pub trait Panel {
    /// Bring the panel to the front.
    fn reveal(&mut self) -> io::Result<()>;

    fn set_title(&mut self, title: &str) -> io::Result<()>;

    fn set_html(&mut self, html: &str) -> io::Result<()>;

    fn post_message(&mut self, message: &HostMessage) -> io::Result<()>;

    /// URI under which the panel can load the local file at `path`.
    fn asset_uri(&self, path: &Path) -> String;
}

/// Creates panels. Viewer messages and dispose notifications travel the
/// other way: the host hands them to the navigator.
pub trait PanelHost {
    type Panel: Panel;

    fn create_panel(&mut self, options: &PanelOptions) -> io::Result<Self::Panel>;
}
