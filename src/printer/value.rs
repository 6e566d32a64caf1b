use crate::cst::*;

use super::Printer;

/// Wraps `content` in double quotes, escaping the double quotes it contains
pub fn quote(content: &str) -> String {
    let mut quoted = String::with_capacity(content.len() + 2);
    quoted.push('"');

    let mut chars = content.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                quoted.push(c);
                if let Some(escaped) = chars.next() {
                    quoted.push(escaped);
                }
            }
            '"' => quoted.push_str("\\\""),
            c => quoted.push(c),
        }
    }

    quoted.push('"');
    quoted
}

/// Strips one leading and one trailing quote character
fn unquote(value: &str) -> &str {
    let value = value.strip_prefix(['"', '\'']).unwrap_or(value);
    value.strip_suffix(['"', '\'']).unwrap_or(value)
}

impl Printer<'_> {
    /// Prints a list of value tokens. Non-operator neighbours are separated by
    /// a single space in both modes, operators bring their own spacing.
    pub(super) fn values(&self, values: &[Value]) -> String {
        let mut printed = String::new();

        for (index, value) in values.iter().enumerate() {
            printed.push_str(&self.value(value));

            let next = values.get(index + 1);
            if !value.is_operator() && next.is_some_and(|next| !next.is_operator()) {
                printed.push(' ');
            }
        }

        printed
    }

    fn value(&self, value: &Value) -> String {
        match value {
            Value::Identifier(span) => self.text(*span).to_string(),
            Value::Raw(span) => self.text(*span).trim().to_string(),
            Value::Function(function) => format!(
                "{}({})",
                function.name.to_lowercase(),
                self.values(&function.arguments)
            ),
            Value::Dimension(dimension) => {
                format!("{}{}", dimension.value, dimension.unit.to_lowercase())
            }
            Value::String(string) => quote(&string.value),
            Value::Operator(operator) => self.operator(operator.op),
            Value::Parenthesized(group) => format!("({})", self.values(&group.children)),
            Value::Url(url) => {
                let argument = if url.is_data_uri() {
                    unquote(&url.value).to_string()
                } else {
                    quote(unquote(&url.value))
                };
                format!("{}({argument})", url.function)
            }
        }
    }

    /// `+` and `-` always need surrounding whitespace inside `calc()`, the
    /// other operators only get optional spacing
    fn operator(&self, op: char) -> String {
        let space = self.style.optional_space();
        match op {
            '+' | '-' => format!(" {op} "),
            ',' => format!(",{space}"),
            op => format!("{space}{op}{space}"),
        }
    }
}
