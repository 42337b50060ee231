//! Trailing comment removal.

/// Strip an unquoted `#` comment from a single line.
///
/// A `'` or `"` opens a quoted run that only the same character closes; a `#`
/// inside a quoted run is kept. Quote state never carries over to the next
/// line and backslash escapes are not recognized.
pub fn strip_comment(line: &str) -> &str {
    if !line.contains('#') {
        return line;
    }

    let mut quote: Option<char> = None;
    for (idx, ch) in line.char_indices() {
        match ch {
            '"' | '\'' => match quote {
                None => quote = Some(ch),
                Some(open) if open == ch => quote = None,
                Some(_) => {}
            },
            '#' if quote.is_none() => return &line[..idx],
            _ => {}
        }
    }

    line
}
