//! Server-rendered HTML.
//!
//! Views are plain functions from controller state to a `String`; every
//! interpolated value goes through [`escape`].

pub mod admin;
pub mod landing;
pub mod layout;
pub mod login;

use crate::controllers::Notice;

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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

/// The live region announcing notices. Always present so assistive
/// technology picks up later insertions.
pub fn notices(items: &[&Notice]) -> String {
    let mut html = String::from(r#"<div class="notices" role="status" aria-live="polite">"#);
    for notice in items {
        html.push_str(&format!(
            r#"<p class="notice notice-{}">{}</p>"#,
            notice.level.as_str(),
            escape(&notice.message)
        ));
    }
    html.push_str("</div>");
    html
}
