//! Literal escaping for pattern text.

/// Characters with a meaning of their own in pattern syntax.
const METACHARACTERS: &[char] = &[
    '.', '*', '+', '?', '^', '$', '{', '}', '(', ')', '|', '[', ']', '\\',
];

fn escape_with(text: &str, mut needs_escape: impl FnMut(char) -> bool) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if needs_escape(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Escapes `text` so that it matches itself literally.
///
/// ```
/// assert_eq!(fluent_regex::escape("1+1=2?"), r"1\+1=2\?");
/// ```
pub fn escape(text: &str) -> String {
    escape_with(text, |c| METACHARACTERS.contains(&c))
}

/// Escapes the contents of a bracketed character class.
///
/// A single `-` is left alone so that ranges such as `a-z` keep working. The
/// class set operators `&&`, `~~` and `--` are broken up by escaping `&`, `~`
/// and any `-` that directly follows another `-`.
pub fn escape_class(text: &str) -> String {
    let mut prev = None;
    escape_with(text, |c| {
        let needs_escape = METACHARACTERS.contains(&c)
            || matches!(c, '&' | '~')
            || (c == '-' && prev == Some('-'));
        prev = Some(c);
        needs_escape
    })
}
