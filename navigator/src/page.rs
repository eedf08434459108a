use once_cell::sync::Lazy;
use regex_lite::Regex;

/// Title shown while the not-found page is displayed.
pub const ERROR_TITLE: &str = "Error";

fn compile_regex(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|err| panic!("invalid regex literal {pattern}: {err}"))
}

static TITLE: Lazy<Regex> = Lazy::new(|| compile_regex(r"(?i)<title>(.*?)</title>"));

/// Text of the first single-line `<title>` element.
pub fn extract_title(html: &str) -> Option<&str> {
    TITLE
        .captures(html)
        .and_then(|captures| captures.get(1))
        .map(|title| title.as_str())
}

pub fn not_found_html(language: &str, version: &str) -> String {
    format!(
        r#"
<!DOCTYPE html>
<html lang="en">
    <head></head>
    <body>
        <h1>Not Found doc/{}/{}/</h1>
    </body>
</html>"#,
        escape_html(language),
        escape_html(version)
    )
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
