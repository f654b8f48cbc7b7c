use crate::inline;

/// Scan state for one document. Ordered and unordered lists share the flag.
#[derive(Debug, Default)]
struct ConversionState {
    inside_list: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Heading,
    UnorderedItem,
    OrderedItem,
    Other,
}

impl LineKind {
    /// First match wins.
    fn classify(line: &str) -> Self {
        if line.starts_with('#') {
            LineKind::Heading
        } else if line.starts_with("- ") || line.starts_with("* ") {
            LineKind::UnorderedItem
        } else if line.starts_with("1. ") {
            LineKind::OrderedItem
        } else {
            LineKind::Other
        }
    }
}

/// Convert a whole Markdown document to HTML, one line at a time.
///
/// Every fragment (tag, list item, paragraph) becomes one output line; the
/// result has no trailing newline and an empty document yields an empty string.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut state = ConversionState::default();
    let mut fragments: Vec<String> = Vec::new();

    for line in split_lines(markdown) {
        let kind = LineKind::classify(line);
        log::trace!("{:?}: {:?}", kind, line);

        match kind {
            LineKind::Heading => fragments.push(heading(line)),
            LineKind::UnorderedItem => {
                open_list(&mut state, &mut fragments, "<ul>");
                fragments.push(list_item(line, 2));
            }
            LineKind::OrderedItem => {
                open_list(&mut state, &mut fragments, "<ol>");
                fragments.push(list_item(line, 3));
            }
            LineKind::Other => {
                if state.inside_list {
                    log::debug!("closing list");
                    fragments.push("</ul>".to_string());
                    state.inside_list = false;
                } else if trim_blank(line).is_empty() {
                    continue;
                }

                if let Some(paragraph) = paragraph(line) {
                    fragments.push(paragraph);
                }
            }
        }
    }

    if state.inside_list {
        log::debug!("closing list left open at end of document");
        fragments.push("</ul>".to_string());
    }
    if fragments.last().is_some_and(|last| last.starts_with("<ol>")) {
        fragments.push("</ol>".to_string());
    }

    fragments.join("\n")
}

/// The level is the number of `#` anywhere in the line, not just the leading run.
fn heading(line: &str) -> String {
    let level = line.chars().filter(|&ch| ch == '#').count();
    let text = trim_blank(skip_chars(line, level));
    format!("<h{level}>{text}</h{level}>")
}

fn list_item(line: &str, marker_len: usize) -> String {
    format!("<li>{}</li>", trim_blank(skip_chars(line, marker_len)))
}

fn open_list(state: &mut ConversionState, fragments: &mut Vec<String>, tag: &str) {
    if !state.inside_list {
        log::debug!("opening list with {}", tag);
        fragments.push(tag.to_string());
        state.inside_list = true;
    }
}

fn paragraph(line: &str) -> Option<String> {
    let line = inline::apply_emphasis(&inline::apply_directives(line));
    let text = trim_blank(&line);
    if text.is_empty() {
        None
    } else {
        Some(format!("<p>{text}</p>"))
    }
}

/// Unicode whitespace plus the ASCII separators `\x1c`..=`\x1f`.
fn is_blank(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '\x1c'..='\x1f')
}

fn trim_blank(text: &str) -> &str {
    text.trim_matches(is_blank)
}

fn skip_chars(line: &str, count: usize) -> &str {
    match line.char_indices().nth(count) {
        Some((offset, _)) => &line[offset..],
        None => "",
    }
}

fn is_line_boundary(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split on every line boundary, treating `\r\n` as one. A trailing boundary
/// does not start an extra empty line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((offset, ch)) = chars.next() {
        if !is_line_boundary(ch) {
            continue;
        }
        lines.push(&text[start..offset]);
        start = offset + ch.len_utf8();
        if ch == '\r' {
            if let Some(&(next, '\n')) = chars.peek() {
                chars.next();
                start = next + 1;
            }
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}
