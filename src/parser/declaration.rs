use nom::branch::alt;
use nom::character::complete::*;
use nom::combinator::*;
use nom::error::{context, ErrorKind, ParseError};
use nom::sequence::preceded;
use nom::Parser;
use nom_language::error::VerboseError;

use crate::cst::*;
use crate::result::ParseResult;

use super::comment::{skip_trivia, span0};
use super::primitive::ident;
use super::value::values;

/// `property: value [!important]`, terminated by `;` (consumed), or left
/// before a closing `}` or the end of input.
///
/// Fails when anything else follows the value, notably a `{`, so nested
/// rules such as `a:hover { ... }` are not mistaken for declarations.
pub fn declaration(input: Input) -> ParseResult<Declaration> {
    let start = input;
    let (input, property) = context(
        "property",
        alt((recognize((one_of("*_"), ident)), ident)),
    )
    .parse(input)?;
    let (input, _) = preceded(span0, char(':')).parse(input)?;

    let property = property.fragment().to_string();
    let stops: &[char] = if property.starts_with("--") {
        &[';', '}', '!']
    } else {
        &[';', '}', '!', '{']
    };
    let (input, value) = values(input, stops)?;

    let (input, important) = opt(preceded(
        (span0, char('!'), span0),
        map(ident, |word| word.fragment().to_string()),
    ))
    .parse(input)?;

    let end = input;
    let after = skip_trivia(end);
    let (input, end) = match after.fragment().chars().next() {
        Some(';') => {
            let (rest, _) = char(';').parse(after)?;
            (rest, rest)
        }
        Some('}') | None => (end, end),
        Some(_) => {
            return Err(nom::Err::Error(VerboseError::from_error_kind(
                after,
                ErrorKind::Verify,
            )));
        }
    };

    Ok((
        input,
        Declaration {
            property,
            value,
            important,
            span: Span::from_range(start, end),
        },
    ))
}
