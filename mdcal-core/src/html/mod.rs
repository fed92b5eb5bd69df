//! HTML output.
//!
//! Two self-contained static pages: the calendar page itself (events
//! plus client-side tag filtering) and an index page listing previously
//! generated calendars. No server, no external assets.

mod generate;
mod index;

pub use generate::generate_html;
pub use index::{IndexEntry, render_index};

/// Escape text for interpolation into HTML body or attribute context.
pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_covers_the_dangerous_five() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_html_leaves_plain_text_alone() {
        assert_eq!(escape_html("Trail Run 2025"), "Trail Run 2025");
    }
}
