use unicode_width::UnicodeWidthStr;

/// What: Wrap text into lines that fit within `available_width` display columns.
///
/// Output:
/// - Wrapped lines; at least one (possibly empty) line.
///
/// Details:
/// - Uses Unicode display width, so Devanagari and wide glyphs measure correctly.
/// - Wraps at whitespace; a single word wider than the line stays whole.
#[must_use]
pub fn wrap_text_to_lines(content: &str, available_width: u16) -> Vec<String> {
    let width = usize::from(available_width.max(1));
    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0usize;

    for word in content.split_whitespace() {
        let word_width = word.width();
        let test_width = current_width + usize::from(current_width > 0) + word_width;
        if test_width > width && current_width > 0 {
            lines.push(std::mem::take(&mut current_line));
            current_line.push_str(word);
            current_width = word_width;
        } else {
            if current_width > 0 {
                current_line.push(' ');
            }
            current_line.push_str(word);
            current_width = test_width;
        }
    }
    if !current_line.is_empty() || lines.is_empty() {
        lines.push(current_line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(
            wrap_text_to_lines("one two three four", 9),
            vec!["one two", "three", "four"]
        );
        assert_eq!(wrap_text_to_lines("   ", 10), vec![String::new()]);
        assert_eq!(wrap_text_to_lines("unbreakableword", 4), vec!["unbreakableword"]);
    }
}
