//! Fast, small CSS formatter and minifier
//!
//! ```
//! use format_css::{format, minify, FormatOptions};
//!
//! let pretty = format("a{color:red}", &FormatOptions::new()).unwrap();
//! assert_eq!(pretty.css(), "a {\n\tcolor: red;\n}");
//! assert_eq!(minify("a { color: red; }"), "a{color:red}");
//! ```

pub mod cst;
pub mod error;
pub mod options;
pub mod parser;
pub mod printer;
pub mod result;

pub use error::{FormatError, Result};
pub use options::{FormatOptions, Formatted, Range};
pub use parser::parse;

/// Formats `css`. Options are validated before any parsing happens.
///
/// Returns [`Formatted::WithRanges`] when `options.ranges` is set, a plain
/// [`Formatted::Css`] otherwise.
pub fn format(css: &str, options: &FormatOptions) -> Result<Formatted> {
    options.validate()?;
    let parsed = parse(css);
    Ok(printer::print(css, &parsed, options))
}

/// Formats `css` with all insignificant whitespace and comments removed
pub fn minify(css: &str) -> String {
    let parsed = parse(css);
    printer::print(css, &parsed, &FormatOptions::new().minify(true)).into_css()
}
