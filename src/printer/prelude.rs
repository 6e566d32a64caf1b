//! At-rule prelude touch-ups
//!
//! Preludes are not parsed, the grammar differs for every at-rule. Instead a
//! fixed sequence of text substitutions gives the common cases (media
//! queries, supports conditions, layer lists) consistent spacing. Later steps
//! rely on the spacing produced by earlier ones, the order matters.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::context::Style;

static COLON_OR_COMMA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*([:,])").unwrap());
static PAREN_THEN_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\)([a-zA-Z])").unwrap());
static ARROW_COMPARISON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*(=>|<=)\s*").unwrap());
static BARE_COMPARISON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^<>=\s])([<>])([^<>=\s])").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static CALC_OPERATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"calc\(\s*([^()+\-*/]+)\s*([*/+-])\s*([^()+\-*/]+)\s*\)").unwrap()
});
static FUNCTION_NAMES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)selector|url|supports|layer\(").unwrap());

pub fn format_prelude(prelude: &str, style: &Style) -> String {
    let separator_spacing = if prelude.to_lowercase().contains("selector(") {
        "${1}"
    } else {
        "${1} "
    };

    let prelude = COLON_OR_COMMA.replace_all(prelude, separator_spacing);
    let prelude = PAREN_THEN_WORD.replace_all(&prelude, ") ${1}");
    let prelude = ARROW_COMPARISON.replace_all(&prelude, " ${1} ");
    let prelude = BARE_COMPARISON.replace_all(&prelude, "${1} ${2} ${3}");
    let prelude = WHITESPACE.replace_all(&prelude, " ");
    let prelude = CALC_OPERATION.replace_all(&prelude, |captures: &Captures| {
        let operator = &captures[2];
        let space = match operator {
            "+" | "-" => " ",
            _ => style.optional_space(),
        };
        format!(
            "calc({}{space}{operator}{space}{})",
            captures[1].trim(),
            captures[3].trim()
        )
    });
    let prelude = FUNCTION_NAMES.replace_all(&prelude, |captures: &Captures| captures[0].to_lowercase());

    prelude.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::FormatOptions;

    fn pretty(prelude: &str) -> String {
        format_prelude(prelude, &Style::from_options(&FormatOptions::new()))
    }

    #[test]
    fn test_separators() {
        assert_eq!(pretty("(min-width:1000px)"), "(min-width: 1000px)");
        assert_eq!(pretty("(min-width : 1000px)"), "(min-width: 1000px)");
        assert_eq!(pretty("tbody,thead"), "tbody, thead");
        assert_eq!(
            pretty("all and (-moz-images-in-menus:0) and (min-resolution:.001dpcm)"),
            "all and (-moz-images-in-menus: 0) and (min-resolution: .001dpcm)"
        );
        assert_eq!(pretty("selector(a:hover)"), "selector(a:hover)");
    }

    #[test]
    fn test_whitespace() {
        assert_eq!(pretty("all   and\n print"), "all and print");
        assert_eq!(pretty("(min-width:1px)and (max-width:2px)"), "(min-width: 1px) and (max-width: 2px)");
    }

    #[test]
    fn test_comparisons() {
        assert_eq!(pretty("(width>1000px)"), "(width > 1000px)");
        assert_eq!(pretty("(width=>1000px)"), "(width => 1000px)");
        assert_eq!(pretty("(width<=1000px)"), "(width <= 1000px)");
        assert_eq!(pretty("(200px<width<1000px)"), "(200px < width < 1000px)");
    }

    #[test]
    fn test_calc() {
        assert_eq!(pretty("(min-width: calc(1px*2))"), "(min-width: calc(1px * 2))");
        assert_eq!(
            format_prelude("(min-width: calc(1px*2))", &Style::minified()),
            "(min-width: calc(1px*2))"
        );
        assert_eq!(pretty("(min-width: calc(1px+2px))"), "(min-width: calc(1px + 2px))");
    }

    #[test]
    fn test_function_names() {
        assert_eq!(pretty("URL(foo.css) LAYER(base)"), "url(foo.css) layer(base)");
        assert_eq!(pretty("SUPPORTS(display: grid)"), "supports(display: grid)");
        assert_eq!(pretty("SELECTOR(a>b)"), "selector(a > b)");
    }
}
