use std::borrow::Cow;

/// `[[text]]` becomes the hex MD5 digest of `text`.
pub fn hash_directive(line: &str) -> Option<String> {
    let content = delimited(line, "[[", "]]")?;
    Some(format!("{:x}", md5::compute(content.as_bytes())))
}

/// `((text))` becomes `text` with every `c` and `C` removed.
pub fn strip_directive(line: &str) -> Option<String> {
    let content = delimited(line, "((", "))")?;
    Some(content.chars().filter(|&ch| ch != 'c' && ch != 'C').collect())
}

/// Replace the whole line if it is one of the two directives.
/// The hash directive wins when both could apply.
pub fn apply_directives(line: &str) -> Cow<'_, str> {
    if let Some(hashed) = hash_directive(line) {
        Cow::Owned(hashed)
    } else if let Some(stripped) = strip_directive(line) {
        Cow::Owned(stripped)
    } else {
        Cow::Borrowed(line)
    }
}

/// One bold span, then one emphasis span. Unmatched markers are left dangling.
pub fn apply_emphasis(line: &str) -> String {
    let line = replace_pair(line, "**", "<b>", "</b>");
    replace_pair(&line, "__", "<em>", "</em>")
}

fn replace_pair(line: &str, marker: &str, open: &str, close: &str) -> String {
    line.replacen(marker, open, 1).replacen(marker, close, 1)
}

// Opening and closing delimiters never share characters, so a match
// always leaves a (possibly empty) inner slice.
fn delimited<'a>(line: &'a str, open: &str, close: &str) -> Option<&'a str> {
    line.strip_prefix(open)?.strip_suffix(close)
}
