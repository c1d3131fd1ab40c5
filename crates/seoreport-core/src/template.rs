//! Single-pass `{{name}}` substitution over [`Markup`] bindings.
//!
//! The source is scanned once, left to right. Bound values are copied into
//! the output and never rescanned, so a user who types `{{submitted_by}}`
//! into a field sees exactly that text in the report.

use std::collections::HashMap;

use crate::markup::Markup;
use crate::{Error, Result};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// A document template with named placeholders.
#[derive(Debug, Clone)]
pub struct Template<'a> {
    source: &'a str,
    bindings: HashMap<&'a str, Markup>,
}

impl<'a> Template<'a> {
    /// Creates a template over `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            bindings: HashMap::new(),
        }
    }

    /// Binds a placeholder to a markup fragment.
    pub fn bind(mut self, name: &'a str, value: Markup) -> Self {
        self.bindings.insert(name, value);
        self
    }

    /// Binds a placeholder to user text, escaping it.
    pub fn bind_text(self, name: &'a str, text: &str) -> Self {
        self.bind(name, Markup::escape(text))
    }

    /// Substitutes every placeholder.
    ///
    /// Fails if a placeholder has no binding or is never closed.
    pub fn render(&self) -> Result<String> {
        let mut out = String::with_capacity(self.source.len() * 2);
        let mut rest = self.source;

        while let Some(open) = rest.find(OPEN) {
            out.push_str(&rest[..open]);
            let after_open = &rest[open + OPEN.len()..];
            let close = after_open
                .find(CLOSE)
                .ok_or_else(|| Error::template("unterminated placeholder"))?;
            let name = after_open[..close].trim();
            let value = self
                .bindings
                .get(name)
                .ok_or_else(|| Error::template(format!("unbound placeholder `{name}`")))?;
            out.push_str(value.as_str());
            rest = &after_open[close + CLOSE.len()..];
        }
        out.push_str(rest);

        Ok(out)
    }
}
