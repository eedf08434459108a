use luadoc_navigator::Panel;
use luadoc_navigator::PanelHost;
use luadoc_navigator::PanelOptions;
use luadoc_protocol::HostMessage;
use serde::Deserialize;
use serde::Serialize;
use std::cell::RefCell;
use std::io;
use std::io::Write;
use std::path::Path;
use std::rc::Rc;
use url::Url;

/// One line of panel output on stdout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PanelEvent {
    Created { view_type: String },
    Revealed,
    Title { title: String },
    Html { html: String },
    PostMessage { message: HostMessage },
    Disposed,
}

/// One line of input on stdin: either a message from the page's navigation
/// script or a request from whoever embeds the panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum HostInput {
    /// Posted by the navigation script.
    Goto { uri: String },
    /// Run the open command again.
    Open {
        #[serde(default)]
        location: Option<String>,
    },
    /// The user closed the panel.
    Close,
}

type SharedWriter<W> = Rc<RefCell<W>>;

fn emit<W: Write>(writer: &SharedWriter<W>, event: &PanelEvent) -> io::Result<()> {
    let mut writer = writer.borrow_mut();
    serde_json::to_writer(&mut *writer, event).map_err(io::Error::from)?;
    writer.write_all(b"\n")?;
    writer.flush()
}

/// Panel host that renders panels as JSON lines on a writer.
pub struct StdioHost<W: Write> {
    writer: SharedWriter<W>,
}

impl<W: Write> StdioHost<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Rc::new(RefCell::new(writer)),
        }
    }

    pub fn emit(&self, event: &PanelEvent) -> io::Result<()> {
        emit(&self.writer, event)
    }
}

impl<W: Write> PanelHost for StdioHost<W> {
    type Panel = StdioPanel<W>;

    fn create_panel(&mut self, options: &PanelOptions) -> io::Result<StdioPanel<W>> {
        emit(
            &self.writer,
            &PanelEvent::Created {
                view_type: options.view_type.clone(),
            },
        )?;
        Ok(StdioPanel {
            writer: Rc::clone(&self.writer),
        })
    }
}

pub struct StdioPanel<W: Write> {
    writer: SharedWriter<W>,
}

impl<W: Write> Panel for StdioPanel<W> {
    fn reveal(&mut self) -> io::Result<()> {
        emit(&self.writer, &PanelEvent::Revealed)
    }

    fn set_title(&mut self, title: &str) -> io::Result<()> {
        emit(
            &self.writer,
            &PanelEvent::Title {
                title: title.to_string(),
            },
        )
    }

    fn set_html(&mut self, html: &str) -> io::Result<()> {
        emit(
            &self.writer,
            &PanelEvent::Html {
                html: html.to_string(),
            },
        )
    }

    fn post_message(&mut self, message: &HostMessage) -> io::Result<()> {
        emit(
            &self.writer,
            &PanelEvent::PostMessage {
                message: message.clone(),
            },
        )
    }

    fn asset_uri(&self, path: &Path) -> String {
        file_uri(path)
    }
}

/// `file://` URI for a compiled asset. Relative paths resolve against the
/// current directory.
pub fn file_uri(path: &Path) -> String {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    match Url::from_file_path(&absolute) {
        Ok(url) => url.to_string(),
        Err(()) => path.display().to_string(),
    }
}
