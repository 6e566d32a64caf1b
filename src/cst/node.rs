//! Syntax tree node definitions
//!
//! Every node keeps the byte span it was parsed from, so the printer can fall
//! back to the authored text and correlate nodes with the comment side list.

use super::span::Span;

/// A `/* ... */` comment, delimiters included
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comment {
    pub span: Span,
}

/// Output of the parser: the tree plus the comments found while parsing
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedStylesheet {
    pub stylesheet: Stylesheet,
    /// Sorted by `span.start` (document order), never overlapping
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stylesheet {
    pub children: Vec<Node>,
    pub span: Span,
}

/// Anything that may appear in a stylesheet or inside a block
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    StyleRule(StyleRule),
    AtRule(AtRule),
    Declaration(Declaration),
    /// Input the parser could not make sense of, kept verbatim
    Raw(Span),
}

impl Node {
    pub fn span(&self) -> Span {
        match self {
            Self::StyleRule(rule) => rule.span,
            Self::AtRule(rule) => rule.span,
            Self::Declaration(declaration) => declaration.span,
            Self::Raw(span) => *span,
        }
    }

    pub fn is_declaration(&self) -> bool {
        matches!(self, Self::Declaration(_))
    }
}

/// `selector-list { ... }`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleRule {
    pub selectors: SelectorList,
    pub block: Block,
    /// From the start of the selector list to the end of the block
    pub span: Span,
}

/// `@name prelude;` or `@name prelude { ... }`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtRule {
    pub name: String,
    /// Trimmed prelude text; `None` for `@font-face {}` or anonymous `@layer {}`
    pub prelude: Option<Span>,
    pub block: Option<Block>,
    pub span: Span,
}

/// `{ ... }`, the span includes both braces (or runs to end of input when unclosed)
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Block {
    pub children: Vec<Node>,
    pub span: Span,
}

impl Block {
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// `property: value !important`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Declaration {
    pub property: String,
    pub value: Vec<Value>,
    /// The word after `!`, as authored (`important`, `IMPORTANT`, `ie`, ...)
    pub important: Option<String>,
    /// Includes the terminating `;` when present
    pub span: Span,
}

impl Declaration {
    pub fn is_custom_property(&self) -> bool {
        self.property.starts_with("--")
    }
}

// ===== Selectors =====

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectorList {
    pub selectors: Vec<Selector>,
    pub span: Span,
}

/// A complex selector: compound selectors joined by combinators
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selector {
    pub components: Vec<SimpleSelector>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SimpleSelector {
    /// `div`, `*`, `svg|rect`
    Type { name: String, span: Span },
    /// `.name`, kept verbatim
    Class(Span),
    /// `#name`, kept verbatim
    Id(Span),
    Combinator(Combinator),
    PseudoClass(PseudoSelector),
    PseudoElement(PseudoSelector),
    Attribute(AttributeSelector),
    /// `&`
    Nesting(Span),
    Raw(Span),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombinatorKind {
    /// whitespace
    Descendant,
    /// `>`
    Child,
    /// `+`
    NextSibling,
    /// `~`
    SubsequentSibling,
    /// `||`
    Column,
}

impl CombinatorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
            Self::Column => "||",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combinator {
    pub kind: CombinatorKind,
    pub span: Span,
}

/// `:name`, `::name`, optionally with a parenthesized argument
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PseudoSelector {
    pub name: String,
    pub argument: Option<PseudoArgument>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PseudoArgument {
    /// `:is(a, b)`, `:not(.x)`, ...
    Selectors(SelectorList),
    /// `:nth-child(2n + 1 of .x)`
    Nth(NthSelector),
    /// `::highlight(name)`
    Values(Vec<Value>),
    /// Trimmed text between the parentheses, possibly empty
    Raw(Span),
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NthSelector {
    pub pattern: NthPattern,
    /// `of <selector-list>`
    pub of: Option<SelectorList>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NthPattern {
    /// `a` is the normalized coefficient including `n` (`-1n`, `3n`),
    /// `b` the normalized offset (`3`, `-2`)
    AnPlusB {
        a: Option<String>,
        b: Option<String>,
    },
    /// `odd` or `even`, rendered verbatim
    Keyword(Span),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeMatcher {
    /// `=`
    Equal,
    /// `~=`
    Includes,
    /// `|=`
    DashMatch,
    /// `^=`
    Prefix,
    /// `$=`
    Suffix,
    /// `*=`
    Substring,
}

impl AttributeMatcher {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::Includes => "~=",
            Self::DashMatch => "|=",
            Self::Prefix => "^=",
            Self::Suffix => "$=",
            Self::Substring => "*=",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeFlag {
    /// `i`
    CaseInsensitive,
    /// `s`
    CaseSensitive,
}

/// `[name]`, `[name="value" i]`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeSelector {
    pub name: String,
    pub matcher: Option<AttributeMatcher>,
    /// Unquoted value content
    pub value: Option<String>,
    pub flag: Option<AttributeFlag>,
    pub span: Span,
}

// ===== Values =====

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Keywords, custom idents, hashes, `--custom-properties`, kept verbatim
    Identifier(Span),
    Function(FunctionCall),
    Dimension(Dimension),
    String(StringLiteral),
    Operator(Operator),
    Parenthesized(Parenthesized),
    Url(UrlLiteral),
    Raw(Span),
}

impl Value {
    pub fn span(&self) -> Span {
        match self {
            Self::Identifier(span) | Self::Raw(span) => *span,
            Self::Function(function) => function.span,
            Self::Dimension(dimension) => dimension.span,
            Self::String(string) => string.span,
            Self::Operator(operator) => operator.span,
            Self::Parenthesized(group) => group.span,
            Self::Url(url) => url.span,
        }
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Self::Operator(_))
    }
}

/// `name(arguments)`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionCall {
    pub name: String,
    pub arguments: Vec<Value>,
    pub span: Span,
}

/// A number with an optional unit; percentages use the unit `%`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimension {
    /// Numeric literal as authored (`.5`, `-1`, `1e3`)
    pub value: String,
    pub unit: String,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StringLiteral {
    /// Content between the quotes, with escapes of the delimiter removed
    pub value: String,
    pub span: Span,
}

/// `, / * + -`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Operator {
    pub op: char,
    pub span: Span,
}

/// `( ... )`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parenthesized {
    pub children: Vec<Value>,
    pub span: Span,
}

/// `url(...)` or `src(...)`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UrlLiteral {
    /// Lowercased function name, `url` or `src`
    pub function: String,
    /// The argument as authored, surrounding quotes included when present
    pub value: String,
    pub span: Span,
}

impl UrlLiteral {
    /// `data:` URIs must not be touched, their payload may be encoded
    pub fn is_data_uri(&self) -> bool {
        let value = self.value.trim_start_matches(['"', '\'']);
        value
            .get(..5)
            .is_some_and(|scheme| scheme.eq_ignore_ascii_case("data:"))
    }
}
