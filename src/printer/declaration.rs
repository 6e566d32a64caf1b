use std::sync::LazyLock;

use regex::Regex;

use crate::cst::Declaration;

use super::Printer;

static FONT_LINE_HEIGHT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*/\s*").unwrap());

impl Printer<'_> {
    /// `property: value !important`, without the terminating semicolon
    pub(super) fn declaration(&self, declaration: &Declaration) -> String {
        let property = if declaration.is_custom_property() {
            declaration.property.clone()
        } else {
            declaration.property.to_lowercase()
        };

        let mut value = self.values(&declaration.value);
        if property == "font" {
            value = FONT_LINE_HEIGHT.replace(&value, "/").into_owned();
        }
        // `--toggle: ;` and `--toggle:;` mean different things
        if value.is_empty() && self.style.minify {
            value.push(' ');
        }

        let space = self.style.optional_space();
        let mut printed = format!("{property}:{space}{value}");
        if let Some(important) = &declaration.important {
            printed.push_str(space);
            printed.push('!');
            printed.push_str(&important.to_lowercase());
        }
        printed
    }
}
