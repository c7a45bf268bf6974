//! Array-literal extraction from the primary TypeScript data file.
//!
//! The primary source is not strict structured data: the exported arrays
//! sit between interface declarations, doc comments, and free-form code.
//! This module locates `export const <name>` and slices out the balanced
//! `[...]` that follows, tracking bracket depth through a tagged state
//! machine so brackets inside strings and comments are ignored.

use crate::error::{Result, SelectorError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    /// Inside a string delimited by the given quote (`'`, `"` or a backtick).
    InString(char),
    InLineComment,
    InBlockComment,
}

/// Extract the array literal assigned to `export const <name>`.
///
/// Returns the source slice from the opening `[` through its matching `]`,
/// inclusive. Fails with [`SelectorError::Parse`] when the declaration is
/// missing or the literal never closes.
pub fn find_array_literal<'a>(source: &'a str, name: &str) -> Result<&'a str> {
    let marker = format!("export const {name}");
    let marker_at = source
        .find(&marker)
        .ok_or_else(|| SelectorError::Parse(format!("cannot find declaration for {name}")))?;

    let eq_at = source[marker_at..]
        .find('=')
        .map(|i| marker_at + i)
        .ok_or_else(|| SelectorError::Parse(format!("cannot parse declaration for {name}")))?;

    let start = source[eq_at..]
        .find('[')
        .map(|i| eq_at + i)
        .ok_or_else(|| SelectorError::Parse(format!("cannot find array start for {name}")))?;

    let mut state = ScanState::Normal;
    let mut escaped = false;
    let mut depth = 0usize;
    let mut chars = source[start..].char_indices().peekable();

    while let Some((offset, ch)) = chars.next() {
        let next = chars.peek().map(|&(_, c)| c);

        match state {
            ScanState::InLineComment => {
                if ch == '\n' {
                    state = ScanState::Normal;
                }
            }
            ScanState::InBlockComment => {
                if ch == '*' && next == Some('/') {
                    chars.next();
                    state = ScanState::Normal;
                }
            }
            ScanState::InString(quote) => {
                if escaped {
                    escaped = false;
                } else if ch == '\\' {
                    escaped = true;
                } else if ch == quote {
                    state = ScanState::Normal;
                }
            }
            ScanState::Normal => match ch {
                '/' if next == Some('/') => {
                    chars.next();
                    state = ScanState::InLineComment;
                }
                '/' if next == Some('*') => {
                    chars.next();
                    state = ScanState::InBlockComment;
                }
                '\'' | '"' | '`' => state = ScanState::InString(ch),
                '[' => depth += 1,
                ']' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(&source[start..start + offset + ch.len_utf8()]);
                    }
                }
                _ => {}
            },
        }
    }

    Err(SelectorError::Parse(format!(
        "cannot find array end for {name}"
    )))
}
