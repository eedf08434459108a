use crate::script::NAVIGATION_SCRIPT;
use once_cell::sync::Lazy;
use regex_lite::Regex;

fn compile_regex(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|err| panic!("invalid regex literal {pattern}: {err}"))
}

static BODY_CLOSE: Lazy<Regex> = Lazy::new(|| compile_regex(r"(?i)</body>"));

/// Inserts the navigation script right before the first closing body tag.
/// Pages without one are returned unchanged.
pub fn inject_navigation_script(html: &str) -> String {
    let Some(close) = BODY_CLOSE.find(html) else {
        return html.to_string();
    };
    let mut out = String::with_capacity(html.len() + NAVIGATION_SCRIPT.len());
    out.push_str(&html[..close.start()]);
    out.push_str(NAVIGATION_SCRIPT);
    out.push_str(&html[close.start()..]);
    out
}

/// Replaces every literal occurrence of each asset name with its URI.
///
/// This is plain substring substitution over the whole document, so a name
/// that also shows up in prose is rewritten too.
pub fn rewrite_asset_references(html: String, assets: &[(String, String)]) -> String {
    assets
        .iter()
        .fold(html, |html, (name, uri)| html.replace(name.as_str(), uri))
}
