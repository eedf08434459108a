/*!
# Documentation compiler

Turns a downloaded manual (`doc/<language>/<version>/`) into pages the
embedded viewer can display (`out/<language>/<version>/`).

- HTML pages get a navigation script and viewer-addressable asset URIs
- Stylesheets lose every line mentioning `color`
- Everything else is copied byte for byte
- A `.compiled` sentinel records which source directory produced the output

## Example

```rust,no_run
use luadoc_compiler::{DocLayout, ensure_compiled};
use std::path::Path;

fn main() -> luadoc_compiler::Result<()> {
    let layout = DocLayout::new("/path/to/workspace");
    let manual = layout.manual("en-us", "54");
    let resolver = |path: &Path| format!("file://{}", path.display());
    let outcome = ensure_compiled(&manual.source, &manual.output, &resolver)?;
    println!("{outcome:?}");
    Ok(())
}
```
*/

mod compile;
mod css;
mod error;
mod html;
mod layout;
mod script;
mod sentinel;

pub use compile::AssetUriResolver;
pub use compile::CompileOutcome;
pub use compile::CompileReport;
pub use compile::compile;
pub use compile::ensure_compiled;
pub use css::strip_color_lines;
pub use error::CompilerError;
pub use error::Result;
pub use html::inject_navigation_script;
pub use html::rewrite_asset_references;
pub use layout::DocLayout;
pub use layout::ManualPaths;
pub use script::NAVIGATION_SCRIPT;
pub use sentinel::SENTINEL_FILE_NAME;
pub use sentinel::Sentinel;
pub use sentinel::source_identity;
