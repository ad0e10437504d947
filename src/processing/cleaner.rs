//! Blank-line removal that leaves fenced code blocks intact.

use crate::constants::FENCE_MARKER;

/// Whether the cleaner is currently inside a fenced code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FenceState {
    #[default]
    Prose,
    Code,
}

impl FenceState {
    fn toggled(self) -> Self {
        match self {
            FenceState::Prose => FenceState::Code,
            FenceState::Code => FenceState::Prose,
        }
    }
}

/// Classification of a single trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Opens or closes a fenced block. Always kept.
    Fence,
    /// Inside a fenced block. Always kept, even when empty.
    Code,
    /// Non-empty line outside a fenced block. Kept.
    Text,
    /// Empty line outside a fenced block. Dropped.
    Blank,
}

/// Classifies an already-trimmed line given the current fence state.
///
/// Any line beginning with three backticks is a fence, whatever follows the
/// marker; openers and closers are not matched against each other.
pub fn classify_line(line: &str, state: FenceState) -> LineKind {
    if line.starts_with(FENCE_MARKER) {
        LineKind::Fence
    } else if state == FenceState::Code {
        LineKind::Code
    } else if line.is_empty() {
        LineKind::Blank
    } else {
        LineKind::Text
    }
}

/// Characters that end a line, besides the two-character `\r\n`.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Removes blank lines outside fenced code blocks.
///
/// Every line is trimmed of leading and trailing whitespace, inside code
/// blocks too. Lines are split on `\r\n` or any of `LINE_BREAKS` (newline,
/// carriage return, vertical tab, form feed, the ASCII file/group/record
/// separators, NEL, and the Unicode line and paragraph separators) and
/// rejoined with `\n`, with no trailing newline. A fence left open at the end
/// of the input simply makes the rest of the text code.
///
/// # Examples
/// ```
/// use blankstrip::clean;
///
/// let text = "# Title\n\n\nSome text.\n\n";
/// assert_eq!(clean(text), "# Title\nSome text.");
///
/// let with_code = "```\n\n  code line  \n\n```\n\nAfter\n\n";
/// assert_eq!(clean(with_code), "```\n\ncode line\n\n```\nAfter");
/// ```
pub fn clean(content: &str) -> String {
    let mut state = FenceState::default();
    let mut kept: Vec<&str> = Vec::new();

    for line in split_lines(content).map(trim_line) {
        match classify_line(line, state) {
            LineKind::Fence => {
                state = state.toggled();
                kept.push(line);
            }
            LineKind::Code | LineKind::Text => kept.push(line),
            LineKind::Blank => {}
        }
    }

    kept.join("\n")
}

/// Trims surrounding whitespace, counting the ASCII separators
/// `\x1c`..=`\x1f` as whitespace too.
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

/// Splits on `\r\n` and every char in `LINE_BREAKS`. A trailing terminator
/// does not yield an extra empty line.
fn split_lines(content: &str) -> impl Iterator<Item = &str> + '_ {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.char_indices().find(|(_, c)| LINE_BREAKS.contains(c)) {
            Some((idx, c)) => {
                let line = &rest[..idx];
                let terminator_len = if rest[idx..].starts_with("\r\n") {
                    2
                } else {
                    c.len_utf8()
                };
                rest = &rest[idx + terminator_len..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}
