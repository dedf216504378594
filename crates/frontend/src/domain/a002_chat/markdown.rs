//! Markdown-lite rendering for chat bubbles.
//!
//! Supported: `**bold**`, `*italic*`, newlines and `N. ` list markers at the
//! start of a line. Lines starting with `* ` are bullets and stay literal.
//! Input is HTML-escaped first, so the output is safe for `inner_html`.

use once_cell::sync::Lazy;
use regex::Regex;

static BOLD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*([^*\n]+)\*\*").expect("valid bold regex"));
// The opening `*` must touch a non-space character, which keeps `* item`
// bullets out of emphasis.
static ITALIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*([^*\s][^*\n]*)\*").expect("valid italic regex"));
static NUMBERED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(\d+)\.[ \t]+").expect("valid numbered-list regex"));

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render chat text to HTML.
pub fn render_markdown_lite(text: &str) -> String {
    let escaped = escape_html(text);
    let numbered = NUMBERED_RE.replace_all(&escaped, "<strong>$1.</strong> ");
    let bold = BOLD_RE.replace_all(&numbered, "<strong>$1</strong>");
    let italic = ITALIC_RE.replace_all(&bold, "<em>$1</em>");
    italic.replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_unchanged() {
        let text = "The report covers revenue, costs and margins.";
        assert_eq!(render_markdown_lite(text), text);
    }

    #[test]
    fn test_plain_text_is_only_escaped() {
        assert_eq!(
            render_markdown_lite("a < b & \"c\""),
            "a &lt; b &amp; &quot;c&quot;"
        );
        assert_eq!(
            render_markdown_lite("<script>alert(1)</script>"),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_bold_and_italic() {
        assert_eq!(
            render_markdown_lite("This is **key** and *nice*"),
            "This is <strong>key</strong> and <em>nice</em>"
        );
    }

    #[test]
    fn test_newlines_become_breaks() {
        assert_eq!(render_markdown_lite("one\ntwo"), "one<br>two");
    }

    #[test]
    fn test_numbered_markers_on_every_line() {
        assert_eq!(
            render_markdown_lite("Steps:\n1. Upload\n2. Ask"),
            "Steps:<br><strong>1.</strong> Upload<br><strong>2.</strong> Ask"
        );
    }

    #[test]
    fn test_asterisk_bullets_stay_literal() {
        assert_eq!(
            render_markdown_lite("* first\n* second"),
            "* first<br>* second"
        );
        assert_eq!(
            render_markdown_lite("* a *b* point"),
            "* a <em>b</em> point"
        );
    }

    #[test]
    fn test_emphasis_does_not_span_lines() {
        assert_eq!(render_markdown_lite("*a\nb*"), "*a<br>b*");
    }
}
