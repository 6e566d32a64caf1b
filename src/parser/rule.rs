use nom::character::complete::*;
use nom::error::{context, ErrorKind, ParseError};
use nom::{Input as _, Parser};
use nom_language::error::VerboseError;

use crate::cst::*;
use crate::result::ParseResult;

use super::block::block;
use super::comment::skip_trivia;
use super::primitive::ident;
use super::raw::{balanced_len, is_balanced, take_trimmed};
use super::selector::selector_list;

/// `selectors { ... }`
pub fn style_rule(input: Input) -> ParseResult<StyleRule> {
    let start = input;
    let (input, selectors) = selector_list(input)?;
    let (input, block) = context("rule block", block).parse(skip_trivia(input))?;

    Ok((
        input,
        StyleRule {
            selectors,
            block,
            span: Span::from_range(start, input),
        },
    ))
}

/// `@name prelude;`, `@name prelude { ... }` or `@name` at the end of a block.
///
/// The prelude is kept as text: everything up to the first top-level `{`, `;`
/// or `}`, trimmed. Comments inside it stay part of the prelude.
pub fn at_rule(input: Input) -> ParseResult<AtRule> {
    let start = input;
    let (input, _) = char('@').parse(input)?;
    let (input, name) = context("at-rule name", ident).parse(input)?;
    let (input, _) = multispace0(input)?;

    let len = balanced_len(input.fragment(), &['{', ';', '}']);
    let balanced = is_balanced(&input.fragment()[..len]);
    let (input, prelude) = take_trimmed(input, len);
    let prelude = (!prelude.is_empty()).then_some(prelude);

    let (input, block) = match input.fragment().chars().next() {
        Some('{') => {
            let (input, block) = block(input)?;
            (input, Some(block))
        }
        Some(';') => (input.take_from(1), None),
        // unclosed group or string, left to the raw fallback
        _ if !balanced => {
            return Err(nom::Err::Error(VerboseError::from_error_kind(
                input,
                ErrorKind::Verify,
            )));
        }
        _ => (input, None),
    };

    Ok((
        input,
        AtRule {
            name: name.fragment().to_string(),
            prelude,
            block,
            span: Span::from_range(start, input),
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_rule() {
        let (rest, parsed) = style_rule(Input::new("a, b /* c */ { color: red } x")).unwrap();
        assert_eq!(*rest.fragment(), " x");
        assert_eq!(parsed.selectors.selectors.len(), 2);
        assert_eq!(parsed.selectors.span, Span::new(0, 4));
        assert_eq!(parsed.block.span, Span::new(13, 27));
        assert_eq!(parsed.span, Span::new(0, 27));

        assert!(style_rule(Input::new("a, b")).is_err());
        assert!(style_rule(Input::new("a, { }")).is_err());
    }

    #[test]
    fn test_at_rule_with_block() {
        let (rest, parsed) = at_rule(Input::new("@MEDIA  (min-width: 1px)  { a {} }")).unwrap();
        assert!(rest.fragment().is_empty());
        assert_eq!(parsed.name, "MEDIA");
        assert_eq!(parsed.prelude, Some(Span::new(8, 24)));
        assert_eq!(parsed.block.map(|block| block.children.len()), Some(1));
    }

    #[test]
    fn test_at_rule_statement() {
        let (rest, parsed) = at_rule(Input::new("@import url('a;b.css') screen;a")).unwrap();
        assert_eq!(*rest.fragment(), "a");
        assert_eq!(parsed.prelude, Some(Span::new(8, 29)));
        assert_eq!(parsed.block, None);
        assert_eq!(parsed.span, Span::new(0, 30));
    }

    #[test]
    fn test_at_rule_without_prelude() {
        let (_, parsed) = at_rule(Input::new("@font-face{}")).unwrap();
        assert_eq!(parsed.prelude, None);
        assert!(parsed.block.is_some());

        let (_, parsed) = at_rule(Input::new("@layer;")).unwrap();
        assert_eq!(parsed.prelude, None);
        assert_eq!(parsed.block, None);
    }

    #[test]
    fn test_unterminated_at_rule() {
        assert!(at_rule(Input::new("@import url(foo.css")).is_err());
        assert!(at_rule(Input::new("@import 'foo.css")).is_err());
        assert!(at_rule(Input::new("@media (x }")).is_err());

        let (_, parsed) = at_rule(Input::new("@layer a")).unwrap();
        assert_eq!(parsed.prelude, Some(Span::new(7, 8)));
        let (rest, parsed) = at_rule(Input::new("@import url(foo.css); a")).unwrap();
        assert_eq!(*rest.fragment(), " a");
        assert_eq!(parsed.block, None);
    }
}
