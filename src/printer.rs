//! Syntax tree to text
//!
//! A [`Printer`] lives for a single call. It owns everything that changes
//! while printing: the output buffer, the nesting depth, the comment cursor
//! and the range remapper. Value and selector printers return strings, the
//! structural printers below stream into the output buffer.

mod comments;
mod context;
mod declaration;
mod prelude;
mod ranges;
mod selector;
mod value;

use crate::cst::*;
use crate::options::{FormatOptions, Formatted, Range};

pub use self::context::Style;
use self::comments::Comments;
use self::prelude::format_prelude;
use self::ranges::RangeRemapper;

/// Prints a parsed stylesheet. `options` must have been validated.
pub fn print(source: &str, parsed: &ParsedStylesheet, options: &FormatOptions) -> Formatted {
    let mut printer = Printer::new(source, parsed, options);
    printer.stylesheet(&parsed.stylesheet);
    printer.finish()
}

pub struct Printer<'a> {
    source: &'a str,
    style: Style,
    comments: Comments<'a>,
    ranges: Option<RangeRemapper>,
    depth: usize,
    output: String,
}

impl<'a> Printer<'a> {
    pub fn new(source: &'a str, parsed: &'a ParsedStylesheet, options: &FormatOptions) -> Self {
        let style = Style::from_options(options);
        Self {
            source,
            comments: Comments::new(source, &parsed.comments, !style.minify),
            style,
            ranges: options.ranges.clone().map(RangeRemapper::new),
            depth: 0,
            output: String::with_capacity(source.len()),
        }
    }

    pub fn finish(self) -> Formatted {
        let css = self.output.trim_end().to_string();
        match self.ranges {
            Some(ranges) => Formatted::WithRanges {
                css,
                ranges: ranges.finish(),
            },
            None => Formatted::Css(css),
        }
    }

    fn text(&self, span: Span) -> &'a str {
        span.text(self.source)
    }

    fn indent(&self) -> String {
        self.style.indent(self.depth)
    }

    fn write_indent(&mut self) {
        let indent = self.indent();
        self.output.push_str(&indent);
    }

    fn newline(&mut self) {
        self.output.push_str(self.style.newline());
    }

    /// Writes the comments found in a gap on their own line
    fn write_comments(&mut self, after: Option<usize>, before: Option<usize>) -> bool {
        let indent = self.indent();
        let comments = self.comments.between(after, before, &indent);
        if comments.is_empty() {
            return false;
        }
        self.output.push_str(&indent);
        self.output.push_str(&comments);
        true
    }

    pub fn stylesheet(&mut self, stylesheet: &Stylesheet) {
        self.children(
            &stylesheet.children,
            Some(stylesheet.span.start),
            Some(stylesheet.span.end),
        );
    }

    /// Prints the children of a stylesheet or block with the comments in
    /// between them. Two children are separated by a newline, plus an empty
    /// line unless both are declarations.
    fn children(&mut self, children: &[Node], open: Option<usize>, close: Option<usize>) {
        let mut previous: Option<&Node> = None;

        for (index, child) in children.iter().enumerate() {
            if let Some(previous) = previous {
                self.newline();
                if !previous.is_declaration() || !child.is_declaration() {
                    self.newline();
                }
            }

            let after = previous.map_or(open, |previous| Some(previous.span().end));
            if self.write_comments(after, Some(child.span().start)) {
                self.newline();
            }

            self.node(child, index + 1 == children.len());
            previous = Some(child);
        }

        let after = previous.map_or(open, |previous| Some(previous.span().end));
        let indent = self.indent();
        let comments = self.comments.between(after, close, &indent);
        if !comments.is_empty() {
            if previous.is_some() {
                self.newline();
            }
            self.output.push_str(&indent);
            self.output.push_str(&comments);
        }
    }

    fn node(&mut self, node: &Node, is_last: bool) {
        match node {
            Node::StyleRule(rule) => self.style_rule(rule),
            Node::AtRule(rule) => self.at_rule(rule),
            Node::Declaration(declaration) => {
                self.write_indent();
                let printed = self.declaration(declaration);
                self.output.push_str(&printed);
                if !(is_last && self.style.minify) {
                    self.output.push(';');
                }
            }
            Node::Raw(span) => {
                self.write_indent();
                self.output.push_str(self.text(*span).trim());
            }
        }
    }

    /// `{ ... }`, preceded by an optional space
    fn block(&mut self, block: &Block) {
        self.output.push_str(self.style.optional_space());
        self.output.push('{');

        if block.is_empty() && !self.comments.has_between(block.span.start, block.span.end) {
            self.output.push('}');
            return;
        }

        self.depth += 1;
        self.newline();
        self.children(
            &block.children,
            Some(block.span.start),
            Some(block.span.end),
        );
        self.depth -= 1;
        self.newline();
        self.write_indent();
        self.output.push('}');
    }

    fn style_rule(&mut self, rule: &StyleRule) {
        self.write_indent();
        let start = self.output.len();

        self.selector_list(&rule.selectors);
        let indent = self.indent();
        let comments = self.comments.between(
            Some(rule.selectors.span.end),
            Some(rule.block.span.start),
            &indent,
        );
        if !comments.is_empty() {
            self.newline();
            self.output.push_str(&indent);
            self.output.push_str(&comments);
        }
        self.block(&rule.block);

        let end = self.output.len();
        if let Some(ranges) = &mut self.ranges {
            ranges.record(rule.span, Range::new(start, end));
        }
    }

    /// One selector per line with a trailing comma on all but the last
    fn selector_list(&mut self, list: &SelectorList) {
        let mut previous: Option<&Selector> = None;

        for selector in &list.selectors {
            if let Some(previous) = previous {
                self.output.push(',');
                self.newline();
                if self.write_comments(Some(previous.span.end), Some(selector.span.start)) {
                    self.newline();
                }
                self.write_indent();
            }
            let printed = self.selector(selector);
            self.output.push_str(&printed);
            previous = Some(selector);
        }
    }

    fn at_rule(&mut self, rule: &AtRule) {
        self.write_indent();
        self.output.push('@');
        self.output.push_str(&rule.name.to_lowercase());

        if let Some(prelude) = rule.prelude {
            let prelude = format_prelude(self.text(prelude), &self.style);
            self.output.push(' ');
            self.output.push_str(&prelude);
        }

        match &rule.block {
            Some(block) => self.block(block),
            None => self.output.push(';'),
        }
    }
}
