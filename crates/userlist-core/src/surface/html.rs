//! HTML export of a page's list container.

use super::{DisplaySurface, Page};

impl Page {
    /// Render the container as `<ul id=..><li><a class="user_link" href=..>nick</a></li>..</ul>`.
    /// Empty string when the page has no container.
    pub fn to_html(&self) -> String {
        if !self.has_container() {
            return String::new();
        }
        let mut out = format!("<ul id=\"{}\">", escape_html(self.container_id()));
        for entry in self.entries() {
            out.push_str(&format!(
                "<li><a class=\"user_link\" href=\"{}\">{}</a></li>",
                escape_html(&entry.href),
                escape_html(&entry.nickname)
            ));
        }
        out.push_str("</ul>");
        out
    }
}

/// Escape text for use in element content and double-quoted attributes.
fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
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
