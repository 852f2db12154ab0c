//! Inline text formatter.
//!
//! Converts a small inline markup syntax into HTML through a fixed sequence
//! of global substitutions. Later rules see the output of earlier ones.
//!
//! | Syntax          | Output                      |
//! |-----------------|-----------------------------|
//! | `*text*`        | `<strong>text</strong>`     |
//! | `_text_`        | `<em>text</em>`             |
//! | `~text~`        | `<del>text</del>`           |
//! | `--text--`      | `<mark>text</mark>`         |
//! | `[label](url)`  | `<a href="url">label</a>`   |
//! | blank line      | `</p><p>`                   |
//!
//! Input is not escaped. Markup in the source passes through verbatim.

use regex::Regex;
use std::sync::LazyLock;

static STRONG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());
static EMPHASIS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_(.*?)_").unwrap());
static STRIKE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"~(.*?)~").unwrap());
static HIGHLIGHT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"--(.*?)--").unwrap());
static LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").unwrap());
static PARAGRAPH_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Format inline markup as HTML.
///
/// Empty input yields an empty string. Output that does not start with a tag
/// is opened with `<p>`; a closing `</p>` is appended when the last paragraph
/// opened is not closed after it.
pub fn format(source: &str) -> String {
    if source.is_empty() {
        return String::new();
    }

    let out = STRONG.replace_all(source, "<strong>$1</strong>");
    let out = EMPHASIS.replace_all(&out, "<em>$1</em>");
    let out = STRIKE.replace_all(&out, "<del>$1</del>");
    let out = HIGHLIGHT.replace_all(&out, "<mark>$1</mark>");
    let out = LINK.replace_all(&out, "<a href=\"$2\">$1</a>");
    let mut html = PARAGRAPH_BREAK.replace_all(&out, "</p><p>").into_owned();

    if !html.starts_with('<') {
        html.insert_str(0, "<p>");
    }
    if has_open_paragraph(&html) {
        html.push_str("</p>");
    }

    html
}

/// Whether the last `<p>` tag has no `</p>` after it.
fn has_open_paragraph(html: &str) -> bool {
    let opened = html.rfind("<p>").max(html.rfind("<p "));
    match (opened, html.rfind("</p>")) {
        (Some(open), Some(close)) => open > close,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // =========================================================================
    // Substitutions
    // =========================================================================

    #[test]
    fn test_empty() {
        assert_eq!(format(""), "");
    }

    #[test]
    fn test_plain_text_is_wrapped() {
        assert_eq!(format("Hello"), "<p>Hello</p>");
    }

    #[test]
    fn test_bold() {
        assert_eq!(format("a *bold* b"), "<p>a <strong>bold</strong> b</p>");
    }

    #[test]
    fn test_italic() {
        assert_eq!(format("an _it_ word"), "<p>an <em>it</em> word</p>");
    }

    #[test]
    fn test_strikethrough() {
        assert_eq!(format("was ~old~"), "<p>was <del>old</del></p>");
    }

    #[test]
    fn test_highlight() {
        assert_eq!(format("see --this--"), "<p>see <mark>this</mark></p>");
    }

    #[test]
    fn test_link() {
        assert_eq!(
            format("go [a](http://x) now"),
            "<p>go <a href=\"http://x\">a</a> now</p>"
        );
    }

    #[test]
    fn test_substitutions_are_lazy() {
        assert_eq!(
            format("*one* and *two*"),
            "<strong>one</strong> and <strong>two</strong>"
        );
    }

    #[test]
    fn test_underscore_in_url_is_rewritten_first() {
        // Emphasis runs before links, so underscores inside a URL pair up.
        assert_eq!(
            format("[x](a_b_c)"),
            "<a href=\"a<em>b</em>c\">x</a>"
        );
    }

    // =========================================================================
    // Paragraphs
    // =========================================================================

    #[test]
    fn test_blank_line_breaks_paragraph() {
        assert_eq!(format("one\n\ntwo"), "<p>one</p><p>two</p>");
    }

    #[test]
    fn test_whitespace_only_line_breaks_paragraph() {
        assert_eq!(format("one\n  \n\ntwo"), "<p>one</p><p>two</p>");
    }

    #[test]
    fn test_single_newline_is_kept() {
        assert_eq!(format("one\ntwo"), "<p>one\ntwo</p>");
    }

    #[test]
    fn test_leading_tag_is_not_wrapped() {
        assert_eq!(format("<div>raw</div>"), "<div>raw</div>");
    }

    #[test]
    fn test_leading_inline_markup_is_not_closed() {
        assert_eq!(format("*bold*"), "<strong>bold</strong>");
    }

    #[test]
    fn test_existing_paragraph_is_not_closed_twice() {
        assert_eq!(format("<p>done</p>"), "<p>done</p>");
    }

    #[test]
    fn test_trailing_paragraph_after_leading_markup_is_closed() {
        assert_eq!(format("*a*\n\nb"), "<strong>a</strong></p><p>b</p>");
        assert_eq!(
            format("[x](/y)\n\nz"),
            "<a href=\"/y\">x</a></p><p>z</p>"
        );
    }
}
