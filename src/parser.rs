//! Error tolerant CSS parser
//!
//! Produces the syntax tree consumed by the printer together with the list of
//! comments in document order. Parsing never fails: input that does not fit
//! the grammar is kept as [`Node::Raw`] spans.

mod block;
mod comment;
mod declaration;
mod primitive;
mod raw;
mod rule;
mod selector;
mod value;

use crate::cst::*;

pub use self::comment::collect_comments;
use self::comment::skip_trivia;
use self::raw::raw_node;
use self::rule::{at_rule, style_rule};

/// Parses a stylesheet, collecting comments on the side
pub fn parse(source: &str) -> ParsedStylesheet {
    let comments = collect_comments(source);
    let mut input = Input::new(source);
    let mut children = Vec::new();

    loop {
        input = skip_trivia(input);
        if input.fragment().is_empty() {
            break;
        }

        let (rest, node) = if let Ok((rest, rule)) = at_rule(input) {
            (rest, Node::AtRule(rule))
        } else if let Ok((rest, rule)) = style_rule(input) {
            (rest, Node::StyleRule(rule))
        } else {
            let (rest, span) = raw_node(input, false);
            (rest, Node::Raw(span))
        };
        children.push(node);
        input = rest;
    }

    ParsedStylesheet {
        stylesheet: Stylesheet {
            children,
            span: Span::new(0, source.len()),
        },
        comments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        let parsed = parse("");
        assert!(parsed.stylesheet.children.is_empty());
        assert!(parsed.comments.is_empty());

        let parsed = parse("  /* only */  ");
        assert!(parsed.stylesheet.children.is_empty());
        assert_eq!(parsed.comments, vec![Comment { span: Span::new(2, 12) }]);
    }

    #[test]
    fn test_parse_children() {
        let parsed = parse("@charset \"utf-8\";\na { color: red }\n@media print { b {} }");
        let children = &parsed.stylesheet.children;
        assert_eq!(children.len(), 3);
        assert!(matches!(&children[0], Node::AtRule(rule) if rule.block.is_none()));
        assert!(matches!(&children[1], Node::StyleRule(_)));
        assert!(matches!(&children[2], Node::AtRule(rule) if rule.block.is_some()));
        assert_eq!(parsed.stylesheet.span, Span::new(0, 56));
    }

    #[test]
    fn test_parse_raw_fallback() {
        let parsed = parse("a{} ; b{}");
        assert_eq!(parsed.stylesheet.children.len(), 3);
        assert_eq!(parsed.stylesheet.children[1], Node::Raw(Span::new(4, 5)));

        let parsed = parse("[/*a*/x] { color: red }");
        assert_eq!(parsed.stylesheet.children, vec![Node::Raw(Span::new(0, 23))]);
    }

    #[test]
    fn test_nodes_do_not_overlap_comments() {
        let source = "/* a */ a { /* b */ color: red; /* c */ } /* d */";
        let parsed = parse(source);
        assert_eq!(parsed.comments.len(), 4);
        let rule = parsed.stylesheet.children[0].span();
        assert_eq!(rule, Span::new(8, 41));
        let Node::StyleRule(rule) = &parsed.stylesheet.children[0] else {
            panic!("expected a style rule");
        };
        assert_eq!(rule.block.children[0].span(), Span::new(20, 31));
    }
}
