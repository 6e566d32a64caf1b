use crate::cst::*;

use super::value::quote;
use super::Printer;

/// CSS2 pseudo-elements that were written with a single colon
const LEGACY_PSEUDO_ELEMENTS: &[&str] = &["before", "after", "first-line", "first-letter"];

impl Printer<'_> {
    pub(super) fn selector(&self, selector: &Selector) -> String {
        let mut printed = String::new();
        for (index, component) in selector.components.iter().enumerate() {
            printed.push_str(&self.simple_selector(component, index == 0));
        }
        printed
    }

    /// A selector list on a single line, as found in pseudo arguments
    fn inline_selector_list(&self, list: &SelectorList) -> String {
        let separator = format!(",{}", self.style.optional_space());
        list.selectors
            .iter()
            .map(|selector| self.selector(selector))
            .collect::<Vec<_>>()
            .join(&separator)
    }

    fn simple_selector(&self, component: &SimpleSelector, is_first: bool) -> String {
        match component {
            SimpleSelector::Type { name, .. } => name.to_lowercase(),
            SimpleSelector::Class(span)
            | SimpleSelector::Id(span)
            | SimpleSelector::Nesting(span)
            | SimpleSelector::Raw(span) => self.text(*span).trim().to_string(),
            SimpleSelector::Combinator(combinator) => self.combinator(combinator, is_first),
            SimpleSelector::PseudoClass(pseudo) => self.pseudo(pseudo, false),
            SimpleSelector::PseudoElement(pseudo) => self.pseudo(pseudo, true),
            SimpleSelector::Attribute(attribute) => self.attribute(attribute),
        }
    }

    fn combinator(&self, combinator: &Combinator, is_first: bool) -> String {
        if combinator.kind == CombinatorKind::Descendant {
            return " ".to_string();
        }
        let space = self.style.optional_space();
        let leading = if is_first { "" } else { space };
        format!("{leading}{}{space}", combinator.kind.as_str())
    }

    fn pseudo(&self, pseudo: &PseudoSelector, is_element: bool) -> String {
        let name = pseudo.name.to_lowercase();
        let colons = if is_element || LEGACY_PSEUDO_ELEMENTS.contains(&name.as_str()) {
            "::"
        } else {
            ":"
        };

        let Some(argument) = &pseudo.argument else {
            return format!("{colons}{name}");
        };
        let argument = match argument {
            PseudoArgument::Selectors(list) => self.inline_selector_list(list),
            PseudoArgument::Nth(nth) => self.nth(nth),
            PseudoArgument::Values(values) => self.values(values),
            PseudoArgument::Raw(span) => self.text(*span).to_string(),
        };
        format!("{colons}{name}({argument})")
    }

    fn nth(&self, nth: &NthSelector) -> String {
        let mut printed = match &nth.pattern {
            NthPattern::Keyword(span) => self.text(*span).to_string(),
            NthPattern::AnPlusB { a, b } => {
                let space = self.style.optional_space();
                let mut printed = a.clone().unwrap_or_default();
                if let Some(b) = b {
                    if a.is_some() {
                        printed.push_str(space);
                        if !b.starts_with('-') {
                            printed.push('+');
                            printed.push_str(space);
                        }
                    }
                    printed.push_str(b);
                }
                printed
            }
        };

        if let Some(of) = &nth.of {
            printed.push_str(" of ");
            printed.push_str(&self.inline_selector_list(of));
        }
        printed
    }

    fn attribute(&self, attribute: &AttributeSelector) -> String {
        let mut printed = format!("[{}", attribute.name.to_lowercase());

        if let Some(matcher) = attribute.matcher {
            printed.push_str(matcher.as_str());
            if let Some(value) = &attribute.value {
                printed.push_str(&quote(value));
            }
            match attribute.flag {
                Some(AttributeFlag::CaseInsensitive) => printed.push_str(" i"),
                Some(AttributeFlag::CaseSensitive) => printed.push_str(" s"),
                None => {}
            }
        }

        printed.push(']');
        printed
    }
}
