use nom::Input as _;

use crate::cst::{Input, Span};

use super::comment::comment_len;
use super::primitive::string_end;

/// Byte length of the longest prefix of `text` without any of `stops` at
/// nesting depth zero.
///
/// Strings, comments, escapes and `()`, `[]`, `{}` pairs are stepped over as
/// a whole, so a `;` inside `url(a;b)` or `"a;b"` does not count as a stop.
/// Stops are only checked outside of any bracket pair, except for a `}` stop
/// with no `{` open: it ends the `(` and `[` groups left open before it.
pub fn balanced_len(text: &str, stops: &[char]) -> usize {
    scan(text, stops).0
}

/// Whether every string, comment and bracket opened in `text` is closed
pub fn is_balanced(text: &str) -> bool {
    scan(text, &[]).1
}

fn scan(text: &str, stops: &[char]) -> (usize, bool) {
    let mut closers: Vec<char> = Vec::new();
    let mut closed = true;
    let mut index = 0;

    while let Some(c) = text[index..].chars().next() {
        if c == '}' && stops.contains(&c) && !closers.contains(&c) {
            closers.clear();
        }
        if closers.is_empty() && stops.contains(&c) {
            return (index, closed);
        }

        match c {
            '"' | '\'' => {
                let (len, terminated) = string_end(&text[index..]);
                closed &= terminated;
                index += len.max(1);
                continue;
            }
            '/' if text[index..].starts_with("/*") => {
                closed &= text[index + 2..].contains("*/");
                index += comment_len(&text[index..]);
                continue;
            }
            '\\' => {
                index += 1;
                if let Some(next) = text[index..].chars().next() {
                    index += next.len_utf8();
                }
                continue;
            }
            '(' => closers.push(')'),
            '[' => closers.push(']'),
            '{' => closers.push('}'),
            ')' | ']' | '}' => {
                if closers.contains(&c) {
                    while let Some(closer) = closers.pop() {
                        if closer == c {
                            break;
                        }
                    }
                }
            }
            _ => {}
        }

        index += c.len_utf8();
    }

    (text.len(), closed && closers.is_empty())
}

/// Length of a bracketed group at the start of `text`, both brackets included.
/// Unclosed groups run to the end of the text.
pub fn group_len(text: &str) -> usize {
    let closer = match text.chars().next() {
        Some('(') => ')',
        Some('[') => ']',
        Some('{') => '}',
        _ => return 0,
    };
    let inner = balanced_len(&text[1..], &[closer]);
    (1 + inner + closer.len_utf8()).min(text.len())
}

/// Splits `len` bytes off the input, returning the rest and the trimmed span
/// of what was taken
pub fn take_trimmed(input: Input, len: usize) -> (Input, Span) {
    let (rest, taken) = input.take_split(len);
    let text = taken.fragment();
    let start = taken.location_offset() + (text.len() - text.trim_start().len());
    let end = taken.location_offset() + text.trim_end().len();
    (rest, Span::new(start, end.max(start)))
}

/// Consumes unparseable input as an opaque node.
///
/// Stops before `;` (which is included), a balanced `{}` block (included) or,
/// inside a block, before the closing `}`. Always consumes at least one
/// character of non-empty input.
pub fn raw_node(input: Input, in_block: bool) -> (Input, Span) {
    let text = input.fragment();
    let stops: &[char] = if in_block { &[';', '{', '}'] } else { &[';', '{'] };
    let mut len = balanced_len(text, stops);

    match text[len..].chars().next() {
        Some(';') => len += 1,
        Some('{') => len += group_len(&text[len..]),
        Some('}') if len == 0 => len += 1,
        _ => {}
    }

    log::debug!(
        "Unrecognized input at offset {}, keeping it verbatim",
        input.location_offset()
    );

    take_trimmed(input, len)
}
