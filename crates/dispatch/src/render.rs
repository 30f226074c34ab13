//! HTML render target for server-assembled pages.
//!
//! [`HtmlTarget`] materializes [`ScriptElement`] descriptors as
//! `<script>` tags in an HTML buffer, the static-injection equivalent of
//! inserting into a live document. Attribute emission: `src` always;
//! `type` / `integrity` / `crossorigin` as quoted values when present;
//! `async` and `defer` as boolean attributes, emitted only when true
//! (omitting `async` on a parsed script tag *is* `async = false`).

use sitekit_core::element::ScriptElement;

use crate::dispatcher::RenderTarget;

/// Appends `<script>` tags to an HTML buffer.
#[derive(Debug, Default)]
pub struct HtmlTarget {
    buffer: String,
}

impl HtmlTarget {
    /// Create an empty target.
    pub fn new() -> Self {
        Self::default()
    }

    /// HTML accumulated so far.
    pub fn as_html(&self) -> &str {
        &self.buffer
    }

    /// Consume the target and return the accumulated HTML.
    pub fn into_html(self) -> String {
        self.buffer
    }
}

impl RenderTarget for HtmlTarget {
    fn insert_script(&mut self, element: ScriptElement) {
        self.buffer.push_str("<script");
        push_attr(&mut self.buffer, "src", &element.src);

        if let Some(ty) = &element.r#type {
            push_attr(&mut self.buffer, "type", ty);
        }
        if element.r#async {
            self.buffer.push_str(" async");
        }
        if element.defer == Some(true) {
            self.buffer.push_str(" defer");
        }
        if let Some(integrity) = &element.integrity {
            push_attr(&mut self.buffer, "integrity", integrity);
        }
        if let Some(mode) = element.cross_origin {
            push_attr(&mut self.buffer, "crossorigin", mode.as_str());
        }

        self.buffer.push_str("></script>");
    }
}

/// Append a quoted `name="value"` attribute.
fn push_attr(buffer: &mut String, name: &str, value: &str) {
    buffer.push(' ');
    buffer.push_str(name);
    buffer.push_str("=\"");
    buffer.push_str(&escape_attr(value));
    buffer.push('"');
}

/// Escape a value for a double-quoted HTML attribute.
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
