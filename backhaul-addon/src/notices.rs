//! User-visible admin notices.
//!
//! Notices accumulate under a category key during a request and are
//! rendered in one pass when the admin page draws.

use std::collections::BTreeMap;

/// Keyed registry of messages to surface on the next render pass.
#[derive(Debug, Clone, Default)]
pub struct Notices {
    notices: BTreeMap<String, Vec<String>>,
}

impl Notices {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the messages stored under `category`.
    pub fn set_notices(&mut self, category: &str, messages: Vec<String>) {
        self.notices.insert(category.to_string(), messages);
    }

    /// Removes the messages stored under `category`.
    pub fn clear(&mut self, category: &str) {
        self.notices.remove(category);
    }

    /// Removes every pending notice.
    pub fn clear_all(&mut self) {
        self.notices.clear();
    }

    /// Returns every pending message, in category order.
    #[must_use]
    pub fn all(&self) -> Vec<&str> {
        self.notices
            .values()
            .flatten()
            .map(String::as_str)
            .collect()
    }

    /// Returns true if no notices are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    /// Renders every pending notice as an error box.
    #[must_use]
    pub fn render(&self) -> String {
        let mut html = String::new();
        for message in self.all() {
            html.push_str("<div class=\"error\"><p>");
            html.push_str(&esc_html(message));
            html.push_str("</p></div>\n");
        }
        html
    }
}

/// Escapes text for safe HTML interpolation.
#[must_use]
pub fn esc_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}
