//! Minimal HTML helpers shared by the components.

use std::fmt::Write;

/// Escape text for use in element content or a double-quoted attribute.
#[must_use]
pub fn escape(text: &str) -> String {
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

/// Build a `class` attribute value from a base class and optional extras.
#[must_use]
pub fn class_list<'a>(base: &str, extras: impl IntoIterator<Item = Option<&'a str>>) -> String {
    let mut classes = base.to_string();
    for extra in extras.into_iter().flatten() {
        let extra = extra.trim();
        if !extra.is_empty() {
            let _ = write!(classes, " {extra}");
        }
    }
    classes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_class_list() {
        assert_eq!(class_list("cell", [None]), "cell");
        assert_eq!(class_list("cell", [Some("selected"), Some("  ")]), "cell selected");
    }
}
