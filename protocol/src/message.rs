use serde::Deserialize;
use serde::Serialize;

/// Sent by the host to the panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum HostMessage {
    /// Scroll the element named `anchor` into view.
    Goto { anchor: String },
}

/// Posted by the panel's navigation script back to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ViewerMessage {
    /// Open another document of the same manual. `uri` is
    /// `"<file>[#<anchor>]"`, taken verbatim from the clicked link.
    Goto { uri: String },
}
