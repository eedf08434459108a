//! Root of the `luadoc-core` library: configuration and the host-facing
//! "open documentation" command.

mod config;
mod luadoc;

pub use config::CONFIG_FILE_NAME;
pub use config::ConfigError;
pub use config::DocSource;
pub use config::LuaDocConfig;
pub use luadoc::LuaDoc;
