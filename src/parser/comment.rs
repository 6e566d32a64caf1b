use nom::branch::*;
use nom::bytes::complete::*;
use nom::character::complete::*;
use nom::combinator::*;
use nom::multi::*;
use nom::{Input as _, Parser};

use crate::cst::{Comment, Input, Span};
use crate::result::ParseResult;

use super::primitive::string_len;

/**
 * parse comment like `/* C-style comments */`
 * returns the whole comment, delimiters included.
 * an unterminated comment runs to the end of the input.
 */
pub fn comment(input: Input) -> ParseResult<Input> {
    recognize((
        tag("/*"),
        alt((recognize((take_until("*/"), tag("*/"))), rest)),
    ))
    .parse(input)
}

/// match contiguous comments or whitespaces, which can be multiple lines
pub fn span0(input: Input) -> ParseResult<()> {
    value((), many0(alt((value((), comment), value((), multispace1))))).parse(input)
}

/// Skips whitespace and comments, never fails
pub fn skip_trivia(input: Input) -> Input {
    span0.parse(input).map_or(input, |(rest, _)| rest)
}

/// Skips whitespace and comments, reporting whether anything was skipped
pub fn skip_trivia_checked(input: Input) -> (Input, bool) {
    let rest = skip_trivia(input);
    let skipped = rest.location_offset() > input.location_offset();
    (rest, skipped)
}

/// Byte length of the comment at the start of `text`, `text` must start with `/*`
pub fn comment_len(text: &str) -> usize {
    match text.get(2..).and_then(|body| body.find("*/")) {
        Some(index) => index + 4,
        None => text.len(),
    }
}

/// Collects every comment of the source in document order.
///
/// String literals are skipped so that `"/*"` inside a string is not
/// mistaken for the start of a comment.
pub fn collect_comments(source: &str) -> Vec<Comment> {
    let mut comments = Vec::new();
    let mut remaining = Input::new(source);

    while let Some(c) = remaining.fragment().chars().next() {
        if let Ok((rest, found)) = comment(remaining) {
            comments.push(Comment {
                span: Span::of(found),
            });
            remaining = rest;
            continue;
        }

        let len = match c {
            '"' | '\'' => string_len(remaining.fragment()),
            '\\' => {
                let escaped = remaining.fragment()[1..].chars().next();
                1 + escaped.map_or(0, char::len_utf8)
            }
            c => c.len_utf8(),
        };
        remaining = remaining.take_from(len);
    }

    comments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(source: &str) -> Vec<(usize, usize)> {
        collect_comments(source)
            .into_iter()
            .map(|c| (c.span.start, c.span.end))
            .collect()
    }

    #[test]
    fn test_comment() {
        let (rest, found) = comment(Input::new("/* comment */a")).unwrap();
        assert_eq!(*found.fragment(), "/* comment */");
        assert_eq!(*rest.fragment(), "a");

        let (rest, found) = comment(Input::new("/* unterminated")).unwrap();
        assert_eq!(*found.fragment(), "/* unterminated");
        assert_eq!(*rest.fragment(), "");

        assert!(comment(Input::new("a /* b */")).is_err());
    }

    #[test]
    fn test_span0() {
        assert_eq!(*skip_trivia(Input::new("  /* a */ \n /*b*/x")).fragment(), "x");
        assert_eq!(*skip_trivia(Input::new("x")).fragment(), "x");
        assert_eq!(*skip_trivia(Input::new("")).fragment(), "");

        let (rest, skipped) = skip_trivia_checked(Input::new("\t\ty"));
        assert!(skipped);
        assert_eq!(rest.location_offset(), 2);
        let (_, skipped) = skip_trivia_checked(Input::new("y"));
        assert!(!skipped);
    }

    #[test]
    fn test_comment_len() {
        assert_eq!(comment_len("/**/"), 4);
        assert_eq!(comment_len("/* a */ b"), 7);
        assert_eq!(comment_len("/* a"), 4);
    }

    #[test]
    fn test_collect_comments() {
        assert_eq!(spans(""), vec![]);
        assert_eq!(spans("/* a */ b {} /* c */"), vec![(0, 7), (13, 20)]);
        assert_eq!(spans("a { content: \"/* no */\" }"), vec![]);
        assert_eq!(spans("a { content: '\\'/* no */' }/**/"), vec![(27, 31)]);
        assert_eq!(spans("/* open"), vec![(0, 7)]);
    }
}
