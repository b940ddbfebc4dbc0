//! Formatting utilities (menu markup → Telegram HTML).
//!
//! Menu copy is written in a tiny markup subset: `*bold*` and `[label](url)`.
//! Telegram's legacy Markdown mode chokes on stray underscores and asterisks,
//! so the adapter always sends HTML produced here.

use std::sync::OnceLock;

use regex::Regex;

/// Escape HTML special characters for Telegram HTML parse mode.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Convert the menu markup subset to Telegram-compatible HTML.
pub fn markup_to_html(input: &str) -> String {
    let text = escape_html(input);

    // Links: [text](url) -> <a href="url">text</a>
    let text = link_re()
        .replace_all(&text, r#"<a href="$2">$1</a>"#)
        .to_string();

    // Emphasis never spans lines.
    text.split('\n')
        .map(|line| replace_single_delim(line, '*', "<b>", "</b>"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn link_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // Conservative: no nested brackets or parentheses.
        Regex::new(r"\[([^\]]+)\]\(([^)\s]+)\)").expect("valid regex")
    })
}

fn replace_single_delim(text: &str, delim: char, open: &str, close: &str) -> String {
    let parts: Vec<&str> = text.split(delim).collect();
    // An odd number of delimiters leaves the last one unpaired; keep it literal.
    let paired = if parts.len() % 2 == 1 {
        parts.len()
    } else {
        parts.len() - 1
    };

    let mut out = String::with_capacity(text.len() + 16);
    for (idx, part) in parts.iter().enumerate() {
        if idx > 0 {
            if idx < paired {
                out.push_str(if idx % 2 == 1 { open } else { close });
            } else {
                out.push(delim);
            }
        }
        out.push_str(part);
    }
    out
}
