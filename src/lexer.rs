pub const COMMENT: char = '#';

const SEPARATORS: &[char] = &[' ', '\t', ',', '\r'];

/// The code part of `line`, everything before the first `#`.
pub fn strip_comment(line: &str) -> &str {
    match line.find(COMMENT) {
        Some(start) => &line[..start],
        None => line,
    }
}

/// Splits one source line into tokens. Commas count as whitespace, so
/// `mov ax, 1` and `mov ax 1` lex the same.
pub fn tokenize(line: &str) -> Vec<&str> {
    strip_comment(line)
        .split(SEPARATORS)
        .filter(|token| !token.is_empty())
        .collect()
}
