/// Lines containing this substring are dropped; the viewer supplies its own
/// colors. Matching is literal and case-sensitive.
const STRIPPED_MARKER: &str = "color";

pub fn strip_color_lines(css: &str) -> String {
    css.split('\n')
        .filter(|line| !line.contains(STRIPPED_MARKER))
        .collect::<Vec<_>>()
        .join("\n")
}
