//! Types shared between the documentation host and the panel that renders
//! the compiled manual pages.

mod location;
mod message;

pub use location::DEFAULT_LOCATION;
pub use location::DocLocation;
pub use location::LocationError;
pub use location::split_anchor;
pub use message::HostMessage;
pub use message::ViewerMessage;
