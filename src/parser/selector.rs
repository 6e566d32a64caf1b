use nom::branch::alt;
use nom::bytes::complete::*;
use nom::character::complete::*;
use nom::combinator::*;
use nom::error::{context, ErrorKind, ParseError};
use nom::multi::separated_list1;
use nom::sequence::*;
use nom::{Input as _, Parser};
use nom_language::error::VerboseError;

use crate::cst::*;
use crate::result::ParseResult;

use super::comment::{skip_trivia, skip_trivia_checked, span0};
use super::primitive::{ident, name, number, string};
use super::raw::balanced_len;
use super::value::values;

/// Pseudo-classes and pseudo-elements whose argument is a selector list
const SELECTOR_PSEUDOS: &[&str] = &[
    "is",
    "where",
    "not",
    "has",
    "matches",
    "-webkit-any",
    "-moz-any",
    "host",
    "host-context",
    "slotted",
    "cue",
    "current",
    "past",
    "future",
];

/// Pseudo-classes whose argument is an `An+B` expression
const NTH_PSEUDOS: &[&str] = &[
    "nth-child",
    "nth-last-child",
    "nth-of-type",
    "nth-last-of-type",
    "nth-col",
    "nth-last-col",
];

/// Comma separated selectors: `a, b > c, :is(d)`
pub fn selector_list(input: Input) -> ParseResult<SelectorList> {
    let start = input;
    let (input, selectors) = context(
        "selector list",
        separated_list1((span0, char(','), span0), selector),
    )
    .parse(input)?;

    Ok((
        input,
        SelectorList {
            selectors,
            span: Span::from_range(start, input),
        },
    ))
}

/// A complex selector. Whitespace between two compounds becomes a descendant
/// combinator, trailing whitespace is left unconsumed.
pub fn selector(input: Input) -> ParseResult<Selector> {
    let start = input;
    let mut input = input;
    let mut components: Vec<SimpleSelector> = Vec::new();

    loop {
        let (next, spaced) = skip_trivia_checked(input);

        if let Ok((rest, kind)) = combinator(next) {
            components.push(SimpleSelector::Combinator(Combinator {
                kind,
                span: Span::from_range(next, rest),
            }));
            input = skip_trivia(rest);
            continue;
        }

        let Ok((rest, simple)) = simple_selector(next) else {
            break;
        };

        let after_compound = matches!(
            components.last(),
            Some(last) if !matches!(last, SimpleSelector::Combinator(_))
        );
        if spaced && after_compound {
            components.push(SimpleSelector::Combinator(Combinator {
                kind: CombinatorKind::Descendant,
                span: Span::from_range(input, next),
            }));
        }

        components.push(simple);
        input = rest;
    }

    if components.is_empty() {
        return Err(nom::Err::Error(VerboseError::from_error_kind(
            start,
            ErrorKind::Many1,
        )));
    }

    Ok((
        input,
        Selector {
            components,
            span: Span::from_range(start, input),
        },
    ))
}

fn combinator(input: Input) -> ParseResult<CombinatorKind> {
    alt((
        value(CombinatorKind::Column, tag("||")),
        value(CombinatorKind::Child, char('>')),
        value(CombinatorKind::NextSibling, char('+')),
        value(CombinatorKind::SubsequentSibling, char('~')),
    ))
    .parse(input)
}

fn simple_selector(input: Input) -> ParseResult<SimpleSelector> {
    alt((
        map(recognize(char('&')), |nesting| {
            SimpleSelector::Nesting(Span::of(nesting))
        }),
        map(recognize((char('.'), ident)), |class| {
            SimpleSelector::Class(Span::of(class))
        }),
        map(recognize((char('#'), name)), |id| SimpleSelector::Id(Span::of(id))),
        map(attribute, SimpleSelector::Attribute),
        pseudo,
        map(recognize((number, char('%'))), |percentage| {
            SimpleSelector::Raw(Span::of(percentage))
        }),
        map(type_selector, |name| SimpleSelector::Type {
            name: name.fragment().to_string(),
            span: Span::of(name),
        }),
    ))
    .parse(input)
}

/// `div`, `*`, `svg|rect`, `*|*`, `|a`
fn type_selector(input: Input) -> ParseResult<Input> {
    let name_or_any = || alt((ident, tag("*")));
    alt((
        recognize((opt(name_or_any()), char('|'), name_or_any())),
        name_or_any(),
    ))
    .parse(input)
}

/// `[name]`, `[name=value]`, `[name^="value" i]`
fn attribute(input: Input) -> ParseResult<AttributeSelector> {
    let start = input;
    let (input, _) = char('[').parse(input)?;
    let (input, name) = preceded(
        multispace0,
        alt((recognize((opt(alt((ident, tag("*")))), char('|'), ident)), ident)),
    )
    .parse(input)?;
    let (input, _) = multispace0(input)?;

    let (input, matched) = opt((
        matcher,
        preceded(multispace0, attribute_value),
        opt(preceded(multispace0, attribute_flag)),
    ))
    .parse(input)?;
    let (input, _) = preceded(multispace0, char(']')).parse(input)?;

    let (matcher, value, flag) = match matched {
        Some((matcher, value, flag)) => (Some(matcher), Some(value), flag),
        None => (None, None, None),
    };

    Ok((
        input,
        AttributeSelector {
            name: name.fragment().to_string(),
            matcher,
            value,
            flag,
            span: Span::from_range(start, input),
        },
    ))
}

fn matcher(input: Input) -> ParseResult<AttributeMatcher> {
    alt((
        value(AttributeMatcher::Includes, tag("~=")),
        value(AttributeMatcher::DashMatch, tag("|=")),
        value(AttributeMatcher::Prefix, tag("^=")),
        value(AttributeMatcher::Suffix, tag("$=")),
        value(AttributeMatcher::Substring, tag("*=")),
        value(AttributeMatcher::Equal, tag("=")),
    ))
    .parse(input)
}

fn attribute_value(input: Input) -> ParseResult<String> {
    alt((
        map(string, |literal| literal.value),
        map(name, |value| value.fragment().to_string()),
    ))
    .parse(input)
}

fn attribute_flag(input: Input) -> ParseResult<AttributeFlag> {
    terminated(
        alt((
            value(AttributeFlag::CaseInsensitive, one_of("iI")),
            value(AttributeFlag::CaseSensitive, one_of("sS")),
        )),
        not(satisfy(super::primitive::is_name_char)),
    )
    .parse(input)
}

/// `:hover`, `::before`, `:not(.a)`, `:nth-child(2n+1)`
fn pseudo(input: Input) -> ParseResult<SimpleSelector> {
    let start = input;
    let (input, colons) = alt((tag("::"), tag(":"))).parse(input)?;
    let (input, name) = ident(input)?;
    let name = name.fragment().to_string();

    let (input, argument) = if input.fragment().starts_with('(') {
        let inner = input.take_from(1);
        let len = balanced_len(inner.fragment(), &[')']);
        let (rest, inner) = inner.take_split(len);
        let (rest, _) = opt(char(')')).parse(rest)?;
        (rest, Some(pseudo_argument(&name, inner)))
    } else {
        (input, None)
    };

    let pseudo = PseudoSelector {
        name,
        argument,
        span: Span::from_range(start, input),
    };
    if colons.fragment().len() == 2 {
        Ok((input, SimpleSelector::PseudoElement(pseudo)))
    } else {
        Ok((input, SimpleSelector::PseudoClass(pseudo)))
    }
}

/// Parses the text between the parentheses of a pseudo selector according to
/// its name, keeping it raw when it does not fully parse
fn pseudo_argument(name: &str, inner: Input) -> PseudoArgument {
    let name = name.to_ascii_lowercase();
    let trimmed = skip_trivia(inner);

    let parsed = if SELECTOR_PSEUDOS.contains(&name.as_str()) {
        all_consumed(selector_list(trimmed)).map(PseudoArgument::Selectors)
    } else if NTH_PSEUDOS.contains(&name.as_str()) {
        all_consumed(nth(trimmed)).map(PseudoArgument::Nth)
    } else if name == "highlight" {
        all_consumed(values(trimmed, &[])).map(PseudoArgument::Values)
    } else {
        None
    };

    parsed.unwrap_or_else(|| {
        let text = inner.fragment();
        let start = inner.location_offset() + (text.len() - text.trim_start().len());
        let end = inner.location_offset() + text.trim_end().len();
        PseudoArgument::Raw(Span::new(start, end.max(start)))
    })
}

fn all_consumed<O>(result: ParseResult<O>) -> Option<O> {
    match result {
        Ok((rest, output)) if skip_trivia(rest).fragment().is_empty() => Some(output),
        _ => None,
    }
}

/// `odd`, `even`, `An+B`, each optionally followed by `of <selector-list>`
pub fn nth(input: Input) -> ParseResult<NthSelector> {
    let start = input;
    let (input, pattern) = context(
        "nth",
        alt((
            map(
                terminated(
                    alt((tag_no_case("odd"), tag_no_case("even"))),
                    not(satisfy(super::primitive::is_name_char)),
                ),
                |keyword| NthPattern::Keyword(Span::of(keyword)),
            ),
            an_plus_b,
        )),
    )
    .parse(input)?;

    let (input, of) = opt(preceded(
        (multispace1, tag_no_case("of"), multispace1),
        selector_list,
    ))
    .parse(input)?;

    Ok((
        input,
        NthSelector {
            pattern,
            of,
            span: Span::from_range(start, input),
        },
    ))
}

fn an_plus_b(input: Input) -> ParseResult<NthPattern> {
    alt((
        map(
            ((opt(sign), digit0, one_of("nN")), opt(b_term)),
            |((sign, digits, _), b): ((Option<char>, Input, char), Option<String>)| {
                NthPattern::AnPlusB {
                    a: Some(normalize_a(sign, digits.fragment())),
                    b,
                }
            },
        ),
        map((opt(sign), digit1), |(sign, digits): (Option<char>, Input)| {
            NthPattern::AnPlusB {
                a: None,
                b: Some(normalize_b(sign, digits.fragment())),
            }
        }),
    ))
    .parse(input)
}

fn sign(input: Input) -> ParseResult<char> {
    one_of("+-").parse(input)
}

/// The `+ B` part following `An`, whitespace allowed around the sign
fn b_term(input: Input) -> ParseResult<String> {
    let (input, _) = multispace0(input)?;
    let (input, sign) = sign(input)?;
    let (input, _) = multispace0(input)?;
    let (input, digits) = digit1(input)?;
    Ok((input, normalize_b(Some(sign), digits.fragment())))
}

/// `-n` -> `-1n`, `+2n` -> `2n`, `N` -> `1n`, `0n` stays
fn normalize_a(sign: Option<char>, digits: &str) -> String {
    let digits = match digits.trim_start_matches('0') {
        _ if digits.is_empty() => "1",
        "" => "0",
        trimmed => trimmed,
    };
    match sign {
        Some('-') => format!("-{digits}n"),
        _ => format!("{digits}n"),
    }
}

/// `+3` -> `3`, `-03` -> `-3`
fn normalize_b(sign: Option<char>, digits: &str) -> String {
    let digits = digits.trim_start_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };
    match sign {
        Some('-') if digits != "0" => format!("-{digits}"),
        _ => digits.to_string(),
    }
}
