//! Line splitting and decomposition.
//!
//! MiniYaml is strictly line oriented. Text is first split into
//! [`SourceLine`]s, each tagged with its location, and every line is then
//! decomposed on its own into indentation depth, key, value and comment by
//! [`decompose`]. Nothing here knows about the tree; structural validation
//! happens in the builder.
//!
//! Decomposition borrows from the input line wherever it can. Only values
//! containing an escaped `\#` need a fresh allocation.

use crate::value::SourceLocation;
use std::borrow::Cow;
use std::sync::Arc;

/// Number of spaces that make up one indentation level.
pub const SPACES_PER_LEVEL: usize = 4;

/// One raw input line and where it came from. The text is kept verbatim.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceLine<'a> {
    pub text: &'a str,
    pub location: SourceLocation,
}

/// Splits `text` into lines numbered from 1.
///
/// Both `\n` and `\r\n` terminate a line, and a trailing newline does not
/// produce an extra empty line. Line contents are not trimmed.
///
/// # Examples
///
/// ```rust
/// use miniyaml::line::split_lines;
///
/// let lines: Vec<_> = split_lines("A:\r\n\tB: 1\n", "game.yaml".into()).collect();
/// assert_eq!(lines.len(), 2);
/// assert_eq!(lines[1].text, "\tB: 1");
/// assert_eq!(lines[1].location.to_string(), "game.yaml:2");
/// ```
pub fn split_lines(text: &str, source: Arc<str>) -> impl Iterator<Item = SourceLine<'_>> {
    text.lines().enumerate().map(move |(i, text)| SourceLine {
        text,
        location: SourceLocation::new(Arc::clone(&source), i + 1),
    })
}

/// The parts of a single decomposed line.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct LineParts<'a> {
    /// Indentation depth, 0-based.
    pub depth: usize,
    pub key: Option<&'a str>,
    pub value: Option<Cow<'a, str>>,
    /// Raw text after the comment marker; `None` unless comments are kept.
    pub comment: Option<&'a str>,
}

/// Decomposes one line of the form `<indent><key>: <value> #<comment>`.
///
/// - A tab is one level; every run of four spaces is one level.
/// - The first `:` splits key from value. `:` has no escape form.
/// - The first `#` not preceded by `\` starts the comment.
/// - Keys are trimmed. Values are trimmed except where guarded by a
///   backslash before a leading or trailing space or tab.
/// - `\#` inside a value is unescaped to `#`.
///
/// Empty keys and values become `None`. Comments are only returned when
/// `keep_comments` is set.
///
/// # Examples
///
/// ```rust
/// use miniyaml::line::decompose;
///
/// let parts = decompose("\tMap: va\\#lue #checksum", true);
/// assert_eq!(parts.depth, 1);
/// assert_eq!(parts.key, Some("Map"));
/// assert_eq!(parts.value.as_deref(), Some("va#lue"));
/// assert_eq!(parts.comment, Some("checksum"));
/// ```
#[must_use]
pub fn decompose(line: &str, keep_comments: bool) -> LineParts<'_> {
    let (depth, rest) = split_indent(line);

    let bytes = rest.as_bytes();
    let mut colon = None;
    let mut hash = None;
    for (i, &b) in bytes.iter().enumerate() {
        if colon.is_none() && b == b':' {
            colon = Some(i);
        }

        if b == b'#' && (i == 0 || bytes[i - 1] != b'\\') {
            hash = Some(i);
            break;
        }
    }

    let body = &rest[..hash.unwrap_or(rest.len())];
    let comment = match hash {
        Some(i) if keep_comments => Some(&rest[i + 1..]),
        _ => None,
    };

    // A colon found before the comment marker always lies inside `body`.
    let (key, value) = match colon {
        Some(i) => (&body[..i], Some(&body[i + 1..])),
        None => (body, None),
    };

    LineParts {
        depth,
        key: Some(key.trim()).filter(|k| !k.is_empty()),
        value: value.and_then(resolve_value),
        comment,
    }
}

/// Computes the indentation depth and returns the text after it.
fn split_indent(line: &str) -> (usize, &str) {
    let mut depth = 0;
    let mut spaces = 0;
    let mut start = 0;

    for &b in line.as_bytes() {
        match b {
            b' ' => {
                spaces += 1;
                if spaces >= SPACES_PER_LEVEL {
                    spaces = 0;
                    depth += 1;
                }
            }
            b'\t' => depth += 1,
            _ => break,
        }
        start += 1;
    }

    (depth, &line[start..])
}

fn resolve_value(raw: &str) -> Option<Cow<'_, str>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let unguarded = strip_guards(trimmed);
    if unguarded.contains('#') {
        Some(Cow::Owned(unguarded.replace("\\#", "#")))
    } else {
        Some(Cow::Borrowed(unguarded))
    }
}

/// Drops the backslash of a leading `\ ` / `\<tab>` or trailing ` \` /
/// `<tab>\` guard, keeping the guarded whitespace.
fn strip_guards(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() < 2 {
        return value;
    }

    let is_blank = |b: u8| b == b' ' || b == b'\t';
    let n = bytes.len();
    let leading = usize::from(bytes[0] == b'\\' && is_blank(bytes[1]));
    let trailing = usize::from(bytes[n - 1] == b'\\' && is_blank(bytes[n - 2]));

    &value[leading..n - trailing]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_and_space_indentation() {
        assert_eq!(decompose("A", false).depth, 0);
        assert_eq!(decompose("\tA", false).depth, 1);
        assert_eq!(decompose("\t\tA", false).depth, 2);
        assert_eq!(decompose("    A", false).depth, 1);
        assert_eq!(decompose("        A", false).depth, 2);
        assert_eq!(decompose("   A", false).depth, 0);
        assert_eq!(decompose("       A", false).depth, 1);
        assert_eq!(decompose("  \tA", false).depth, 1);
        assert_eq!(decompose("  \t  A", false).depth, 2);
        assert_eq!(decompose("    \tA", false).depth, 2);
    }

    #[test]
    fn test_key_and_value() {
        let parts = decompose("  Address :  0.0.0.0:1234  ", false);
        assert_eq!(parts.key, Some("Address"));
        assert_eq!(parts.value.as_deref(), Some("0.0.0.0:1234"));
        assert_eq!(parts.comment, None);
    }

    #[test]
    fn test_key_without_value() {
        let parts = decompose("Game:", false);
        assert_eq!(parts.key, Some("Game"));
        assert_eq!(parts.value, None);

        let parts = decompose("Clients:   ", false);
        assert_eq!(parts.value, None);

        let parts = decompose("\tJustAKey", false);
        assert_eq!(parts.key, Some("JustAKey"));
        assert_eq!(parts.value, None);
    }

    #[test]
    fn test_value_without_key() {
        let parts = decompose(": orphan", false);
        assert_eq!(parts.key, None);
        assert_eq!(parts.value.as_deref(), Some("orphan"));
    }

    #[test]
    fn test_comment_split() {
        let parts = decompose("A: 1 #note", true);
        assert_eq!(parts.key, Some("A"));
        assert_eq!(parts.value.as_deref(), Some("1"));
        assert_eq!(parts.comment, Some("note"));

        let parts = decompose("A: 1 #note", false);
        assert_eq!(parts.comment, None);
        assert_eq!(parts.value.as_deref(), Some("1"));
    }

    #[test]
    fn test_comment_before_colon() {
        let parts = decompose("Key # remark: not a value", true);
        assert_eq!(parts.key, Some("Key"));
        assert_eq!(parts.value, None);
        assert_eq!(parts.comment, Some(" remark: not a value"));
    }

    #[test]
    fn test_comment_only_and_blank_lines() {
        let parts = decompose("\t# just a comment", true);
        assert_eq!(parts.depth, 1);
        assert_eq!(parts.key, None);
        assert_eq!(parts.value, None);
        assert_eq!(parts.comment, Some(" just a comment"));

        let parts = decompose("", true);
        assert_eq!(parts, LineParts::default());

        let parts = decompose("    ", true);
        assert_eq!(parts.depth, 1);
        assert_eq!(parts.key, None);
    }

    #[test]
    fn test_escaped_hash() {
        let parts = decompose("A: va\\#lue", true);
        assert_eq!(parts.value.as_deref(), Some("va#lue"));
        assert_eq!(parts.comment, None);

        let parts = decompose("A: \\#1 \\#2 #real", true);
        assert_eq!(parts.value.as_deref(), Some("#1 #2"));
        assert_eq!(parts.comment, Some("real"));
    }

    #[test]
    fn test_plain_value_is_borrowed() {
        let parts = decompose("A: plain", false);
        assert!(matches!(parts.value, Some(Cow::Borrowed("plain"))));
    }

    #[test]
    fn test_whitespace_guards() {
        let parts = decompose("A: \\  padded", false);
        assert_eq!(parts.value.as_deref(), Some("  padded"));

        let parts = decompose("A: padded \\", false);
        assert_eq!(parts.value.as_deref(), Some("padded "));

        let parts = decompose("A: \\\tboth\t\\   ", false);
        assert_eq!(parts.value.as_deref(), Some("\tboth\t"));

        // A backslash not followed by whitespace is ordinary text.
        let parts = decompose("A: \\path\\", false);
        assert_eq!(parts.value.as_deref(), Some("\\path\\"));
    }

    #[test]
    fn test_blank_value_is_absent() {
        assert_eq!(decompose("A:    ", false).value, None);
        assert_eq!(decompose("A:  #c", true).value, None);
    }

    #[test]
    fn test_non_ascii_text() {
        let parts = decompose("\tTitle: Tiberian Dämmerung #ü", true);
        assert_eq!(parts.key, Some("Title"));
        assert_eq!(parts.value.as_deref(), Some("Tiberian Dämmerung"));
        assert_eq!(parts.comment, Some("ü"));
    }

    #[test]
    fn test_split_lines_numbering() {
        let lines: Vec<_> = split_lines("a\n\nb", Arc::from("src")).collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].location.line, 1);
        assert_eq!(lines[1].text, "");
        assert_eq!(lines[2].location, SourceLocation::new("src", 3));
        assert_eq!(&*lines[2].location.filename, "src");
    }
}
