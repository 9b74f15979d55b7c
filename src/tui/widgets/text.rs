//! Word-wrap helper shared by the page widgets
//!
//! Widgets pre-wrap their copy so card heights can be sized from the exact
//! line count instead of guessing what `Paragraph` wrapping would produce.

/// Greedy word wrap. Width is counted in characters; words longer than the
/// width are hard-split on character boundaries.
pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0;

    for word in text.split_whitespace() {
        let word_chars = word.chars().count();
        if current_chars > 0 && current_chars + 1 + word_chars <= width {
            current.push(' ');
            current.push_str(word);
            current_chars += 1 + word_chars;
            continue;
        }
        if current_chars > 0 {
            lines.push(std::mem::take(&mut current));
        }
        let mut rest = word;
        let mut rest_chars = word_chars;
        while rest_chars > width {
            let boundary = rest.char_indices().nth(width).map_or(rest.len(), |(i, _)| i);
            let (head, tail) = rest.split_at(boundary);
            lines.push(head.to_string());
            rest = tail;
            rest_chars -= width;
        }
        current = rest.to_string();
        current_chars = rest_chars;
    }

    if current_chars > 0 {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
