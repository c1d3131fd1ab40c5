//! HTML markup that is known to be safe to emit.
//!
//! Every piece of user text passes through [`Markup::escape`] before it can
//! reach a document. Fragments the renderer builds itself (tables, lists)
//! are assembled from escaped text and fixed tags, then handed around as
//! `Markup` so the template never has to guess what is already escaped.

use std::fmt;

/// A fragment of HTML that is safe to insert verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    /// Escapes `text` so it renders literally inside element content or a
    /// quoted attribute value.
    pub fn escape(text: &str) -> Self {
        Self(escape_html(text))
    }

    /// Wraps HTML that was built from fixed tags and escaped text.
    ///
    /// Never pass raw user input here; use [`Markup::escape`].
    pub fn trusted(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Appends another fragment.
    pub fn push(&mut self, other: &Markup) {
        self.0.push_str(&other.0);
    }

    /// Appends fixed markup.
    pub fn push_trusted(&mut self, html: &str) {
        self.0.push_str(html);
    }

    /// Appends `text` after escaping it.
    pub fn push_escaped(&mut self, text: &str) {
        self.0.push_str(&escape_html(text));
    }

    /// Borrow the HTML.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the HTML.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns `true` if the fragment is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escapes the five characters that are significant in HTML text and
/// attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_special_chars() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#x27;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_html_plain_text_unchanged() {
        assert_eq!(escape_html("1.8K users"), "1.8K users");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_escape_does_not_double_escape_trusted() {
        let mut m = Markup::trusted("<li>");
        m.push_escaped("a < b");
        m.push_trusted("</li>");
        assert_eq!(m.as_str(), "<li>a &lt; b</li>");
    }

    #[test]
    fn test_push_and_display() {
        let mut m = Markup::default();
        assert!(m.is_empty());
        m.push(&Markup::escape("x&y"));
        assert_eq!(m.to_string(), "x&amp;y");
        assert_eq!(m.into_string(), "x&amp;y");
    }
}
