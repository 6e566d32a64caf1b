use crate::options::FormatOptions;

/// Per call output style, derived from validated [`FormatOptions`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    pub minify: bool,
    /// One level of indentation, empty when minifying
    indent_unit: String,
}

impl Style {
    pub fn from_options(options: &FormatOptions) -> Self {
        let indent_unit = if options.minify {
            String::new()
        } else {
            match options.tab_size.and_then(|size| usize::try_from(size).ok()) {
                Some(size) => " ".repeat(size),
                None => "\t".to_string(),
            }
        };

        Self {
            minify: options.minify,
            indent_unit,
        }
    }

    pub fn minified() -> Self {
        Self::from_options(&FormatOptions::new().minify(true))
    }

    /// A space that disappears when minifying
    pub fn optional_space(&self) -> &'static str {
        if self.minify {
            ""
        } else {
            " "
        }
    }

    pub fn newline(&self) -> &'static str {
        if self.minify {
            ""
        } else {
            "\n"
        }
    }

    pub fn indent(&self, level: usize) -> String {
        self.indent_unit.repeat(level)
    }
}
