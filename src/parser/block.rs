use nom::character::complete::char;
use nom::{Input as _, Parser};

use crate::cst::*;
use crate::result::ParseResult;

use super::comment::skip_trivia;
use super::declaration::declaration;
use super::raw::raw_node;
use super::rule::{at_rule, style_rule};

/// `{ ... }`. A block left open at the end of input ends there.
pub fn block(input: Input) -> ParseResult<Block> {
    let start = input;
    let (mut input, _) = char('{').parse(input)?;
    let mut children = Vec::new();

    loop {
        input = skip_trivia(input);
        match input.fragment().chars().next() {
            None => break,
            Some('}') => {
                input = input.take_from(1);
                break;
            }
            Some(';') => {
                input = input.take_from(1);
            }
            Some(_) => {
                let (rest, node) = child(input);
                children.push(node);
                input = rest;
            }
        }
    }

    Ok((
        input,
        Block {
            children,
            span: Span::from_range(start, input),
        },
    ))
}

/// Anything that may appear inside a block, never fails on non-empty input
fn child(input: Input) -> (Input, Node) {
    if let Ok((rest, rule)) = at_rule(input) {
        return (rest, Node::AtRule(rule));
    }
    if let Ok((rest, declaration)) = declaration(input) {
        return (rest, Node::Declaration(declaration));
    }
    if let Ok((rest, rule)) = style_rule(input) {
        return (rest, Node::StyleRule(rule));
    }
    let (rest, span) = raw_node(input, true);
    (rest, Node::Raw(span))
}
