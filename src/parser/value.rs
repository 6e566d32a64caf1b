use nom::branch::alt;
use nom::bytes::complete::*;
use nom::character::complete::*;
use nom::combinator::*;
use nom::error::context;
use nom::sequence::terminated;
use nom::{Input as _, Parser};

use crate::cst::*;
use crate::result::ParseResult;

use super::comment::{skip_trivia, skip_trivia_checked};
use super::primitive::{ident, name, number, string};
use super::raw::{balanced_len, group_len, take_trimmed};

/// Stops for the arguments of functions and parenthesized groups
const GROUP_STOPS: &[char] = &[')', ';', '}'];

/// Parses value tokens until one of `stops` (or the end of input) is reached
/// at the top level.
///
/// A raw token is merged with the tokens touching it, so unknown syntax such
/// as `progid:DX.Alpha(Opacity=80)` stays one verbatim token.
///
/// The returned input points right after the last token, trailing whitespace
/// and comments are left unconsumed.
pub fn values<'a>(input: Input<'a>, stops: &[char]) -> ParseResult<'a, Vec<Value>> {
    let mut input = input;
    let mut values: Vec<Value> = Vec::new();

    loop {
        let (next, spaced) = skip_trivia_checked(input);
        match next.fragment().chars().next() {
            None => break,
            Some(c) if stops.contains(&c) => break,
            Some(_) => {}
        }
        let (rest, value) = value(next)?;
        input = rest;

        let merged = match values.last() {
            Some(last) if !spaced && touches_raw(last, &value) => {
                Some(Value::Raw(Span::new(last.span().start, value.span().end)))
            }
            _ => None,
        };
        match merged {
            Some(merged) => {
                values.pop();
                values.push(merged);
            }
            None => values.push(value),
        }
    }

    Ok((input, values))
}

fn touches_raw(left: &Value, right: &Value) -> bool {
    let is_raw = |value: &Value| matches!(value, Value::Raw(_));
    !left.is_operator() && !right.is_operator() && (is_raw(left) || is_raw(right))
}

/// A single value token, falls back to a one character raw token
pub fn value(input: Input) -> ParseResult<Value> {
    alt((
        map(unicode_range, Value::Identifier),
        function,
        map(dimension, Value::Dimension),
        map(string, Value::String),
        map(recognize((char('#'), name)), |hash| {
            Value::Identifier(Span::of(hash))
        }),
        map(ident, |identifier| Value::Identifier(Span::of(identifier))),
        map(parenthesized, Value::Parenthesized),
        map(operator, Value::Operator),
        map(raw_group, Value::Raw),
        map(recognize(anychar), |c| Value::Raw(Span::of(c))),
    ))
    .parse(input)
}

/// `U+0025-00FF`, `u+4??`
fn unicode_range(input: Input) -> ParseResult<Span> {
    map(
        recognize((
            one_of("uU"),
            char('+'),
            take_while1(|c: char| c.is_ascii_hexdigit() || c == '?' || c == '-'),
        )),
        Span::of,
    )
    .parse(input)
}

/// `10px`, `50%`, `-.5em`, `0`
pub fn dimension(input: Input) -> ParseResult<Dimension> {
    let start = input;
    let (input, value) = number(input)?;
    let (input, unit) = opt(alt((tag("%"), ident))).parse(input)?;
    Ok((
        input,
        Dimension {
            value: value.fragment().to_string(),
            unit: unit.map(|unit| unit.fragment().to_string()).unwrap_or_default(),
            span: Span::from_range(start, input),
        },
    ))
}

/// `,` `/` `*` `+` `-`
fn operator(input: Input) -> ParseResult<Operator> {
    let start = input;
    let (input, op) = one_of(",/*+-").parse(input)?;
    Ok((
        input,
        Operator {
            op,
            span: Span::from_range(start, input),
        },
    ))
}

/// `[...]` and `{...}` groups are kept as authored
fn raw_group(input: Input) -> ParseResult<Span> {
    peek(one_of("[{")).parse(input)?;
    let len = group_len(input.fragment());
    let (rest, span) = take_trimmed(input, len);
    Ok((rest, span))
}

/// Arguments up to the closing parenthesis, which is optional at the end of
/// a block or the input
fn group_arguments(input: Input) -> ParseResult<Vec<Value>> {
    let (input, arguments) = values(input, GROUP_STOPS)?;
    let input = skip_trivia(input);
    let (input, _) = opt(char(')')).parse(input)?;
    Ok((input, arguments))
}

/// `( ... )`
fn parenthesized(input: Input) -> ParseResult<Parenthesized> {
    let start = input;
    let (input, _) = char('(').parse(input)?;
    let (input, children) = group_arguments(input)?;
    Ok((
        input,
        Parenthesized {
            children,
            span: Span::from_range(start, input),
        },
    ))
}

/// `name(arguments)`, with `url()` and `src()` taking a single url argument
fn function(input: Input) -> ParseResult<Value> {
    let start = input;
    let (input, name) = context("function", terminated(ident, char('('))).parse(input)?;
    let name = name.fragment().to_string();

    if name.eq_ignore_ascii_case("url") || name.eq_ignore_ascii_case("src") {
        let (input, value) = url_argument(input)?;
        return Ok((
            input,
            Value::Url(UrlLiteral {
                function: name.to_lowercase(),
                value,
                span: Span::from_range(start, input),
            }),
        ));
    }

    let (input, arguments) = group_arguments(input)?;
    Ok((
        input,
        Value::Function(FunctionCall {
            name,
            arguments,
            span: Span::from_range(start, input),
        }),
    ))
}

/// The inside of `url(...)`, either a quoted string or unquoted text
fn url_argument(input: Input) -> ParseResult<String> {
    let (input, _) = multispace0(input)?;

    let (input, value) = match string(input) {
        Ok((rest, literal)) => {
            let (rest, _) = multispace0(rest)?;
            let len = literal.span.len();
            (rest, input.fragment()[..len].to_string())
        }
        Err(_) => {
            let len = balanced_len(input.fragment(), &[')']);
            let (rest, raw) = input.take_split(len);
            (rest, raw.fragment().trim_end().to_string())
        }
    };

    let (input, _) = opt(char(')')).parse(input)?;
    Ok((input, value))
}
