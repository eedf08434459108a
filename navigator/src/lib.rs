/*!
# Documentation navigator

Routes "open documentation" requests and viewer link clicks to compiled
manual pages shown in a single host panel.

```text
activate("en-us/54/manual.html#pdf-print")
  └─> parse location
        └─> create or reveal the panel
              └─> ensure out/en-us/54 is compiled (not-found page if no sources)
                    └─> load manual.html unless already shown
                          └─> post {command: "goto", anchor: "pdf-print"}
```

The panel itself belongs to the host and is reached through the [`Panel`]
and [`PanelHost`] traits.
*/

mod error;
mod navigator;
mod page;
mod panel;
mod state;

pub use error::NavigatorError;
pub use error::Result;
pub use navigator::NavigationOutcome;
pub use navigator::Navigator;
pub use page::ERROR_TITLE;
pub use page::extract_title;
pub use page::not_found_html;
pub use panel::Panel;
pub use panel::PanelHost;
pub use panel::PanelOptions;
pub use state::DisplayState;
pub use state::route_viewer_message;
