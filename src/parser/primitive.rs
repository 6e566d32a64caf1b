use nom::branch::alt;
use nom::bytes::complete::*;
use nom::character::complete::*;
use nom::combinator::*;
use nom::error::context;
use nom::multi::*;
use nom::{Input as _, Parser};

use crate::cst::{Input, Span, StringLiteral};
use crate::result::ParseResult;

pub fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

pub fn is_name_char(c: char) -> bool {
    is_name_start(c) || c.is_ascii_digit() || c == '-'
}

/// `\` followed by any character
pub fn escape(input: Input) -> ParseResult<Input> {
    recognize((char('\\'), anychar)).parse(input)
}

fn name_chunk(input: Input) -> ParseResult<Input> {
    alt((take_while1(is_name_char), escape)).parse(input)
}

/// CSS identifier: `color`, `-webkit-box`, `--custom`, `\31 0`
pub fn ident(input: Input) -> ParseResult<Input> {
    context(
        "ident",
        recognize((
            alt((
                tag("--"),
                recognize((
                    opt(char('-')),
                    alt((take_while_m_n(1, 1, is_name_start), escape)),
                )),
            )),
            many0(name_chunk),
        )),
    )
    .parse(input)
}

/// A run of name characters without the identifier start restriction (`#123`, `[a=1]`)
pub fn name(input: Input) -> ParseResult<Input> {
    recognize(many1(name_chunk)).parse(input)
}

/// Numeric literal: `1`, `-1.5`, `.5`, `+2`, `1e3`
pub fn number(input: Input) -> ParseResult<Input> {
    context(
        "number",
        recognize((
            opt(one_of("+-")),
            alt((
                recognize((digit1, opt((char('.'), digit1)))),
                recognize((char('.'), digit1)),
            )),
            opt((one_of("eE"), opt(one_of("+-")), digit1)),
        )),
    )
    .parse(input)
}

/// Byte length of the string literal at the start of `text`, quotes included.
///
/// `text` must start with a quote. Unterminated strings end before the next
/// newline, like the CSS tokenizer's bad-string recovery.
pub fn string_len(text: &str) -> usize {
    string_end(text).0
}

/// Like [`string_len`], also telling whether the closing quote was found
pub fn string_end(text: &str) -> (usize, bool) {
    let mut chars = text.char_indices();
    let quote = match chars.next() {
        Some((_, quote)) => quote,
        None => return (0, false),
    };

    while let Some((index, c)) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '\n' => return (index, false),
            c if c == quote => return (index + 1, true),
            _ => {}
        }
    }

    (text.len(), false)
}

/// Content of a quoted literal with escaped delimiters resolved
fn unescape_quotes(raw: &str, quote: char) -> String {
    let mut value = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            value.push(c);
            continue;
        }
        match chars.next() {
            Some(next) if next == quote && quote == '\'' => value.push(next),
            Some(next) => {
                value.push(c);
                value.push(next);
            }
            None => value.push(c),
        }
    }

    value
}

/// `"double"` or `'single'` quoted string
pub fn string(input: Input) -> ParseResult<StringLiteral> {
    let (_, quote) = context("string", one_of("\"'")).parse(input)?;

    let len = string_len(input.fragment());
    let (rest, raw) = input.take_split(len);
    let text = raw.fragment();
    let inner = text[1..].strip_suffix(quote).unwrap_or(&text[1..]);

    Ok((
        rest,
        StringLiteral {
            value: unescape_quotes(inner, quote),
            span: Span::of(raw),
        },
    ))
}
