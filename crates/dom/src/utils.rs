//! Utility functions for DOM processing

use smallvec::SmallVec;

/// Class tokens of one element; most elements carry fewer than four
pub type ClassTokens<'a> = SmallVec<[&'a str; 4]>;

/// Cap text length to avoid output explosion
///
/// Cuts on a char boundary at or below `max_len` bytes.
pub fn cap_text_length(text: &str, max_len: usize) -> String {
    if text.len() <= max_len {
        return text.to_string();
    }
    let mut end = max_len;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

/// Split a class attribute on single spaces
///
/// An empty value yields `[""]`, and runs of spaces yield empty tokens.
/// Kept that way so `Dom::class_list` stays compatible with plain
/// string splitting; use [`class_tokens`] for the cleaned-up list.
pub fn split_class_list(class_name: &str) -> ClassTokens<'_> {
    class_name.split(' ').collect()
}

/// Whitespace-separated, non-empty class tokens
pub fn class_tokens(class_name: &str) -> ClassTokens<'_> {
    class_name.split_ascii_whitespace().collect()
}

/// Join text fragments, each followed by a single space, then trim
pub fn join_text<'a, I>(fragments: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut text = String::new();
    for fragment in fragments {
        text.push_str(fragment);
        text.push(' ');
    }
    text.trim().to_string()
}

/// Escape character data for HTML text content
pub fn escape_text(text: &str, output: &mut String) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '\u{a0}' => output.push_str("&nbsp;"),
            _ => output.push(c),
        }
    }
}
