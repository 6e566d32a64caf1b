//! Formatting options and results

use crate::error::{FormatError, Result};

/// A `[start, end)` byte range, either into the input (requested ranges) or
/// into the formatted output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormatOptions {
    /// Drop all insignificant whitespace and comments
    pub minify: bool,
    /// Indent with this many spaces per level instead of a tab, must be at least 1
    pub tab_size: Option<i64>,
    /// Input ranges to locate in the output, each has to match a style rule exactly
    pub ranges: Option<Vec<Range>>,
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn minify(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }

    pub fn tab_size(mut self, tab_size: i64) -> Self {
        self.tab_size = Some(tab_size);
        self
    }

    pub fn ranges(mut self, ranges: Vec<Range>) -> Self {
        self.ranges = Some(ranges);
        self
    }

    /// Checks the options before any work is done
    pub fn validate(&self) -> Result<()> {
        if let Some(tab_size) = self.tab_size {
            if tab_size < 1 {
                log::warn!("Rejecting tab_size {tab_size}");
                return Err(FormatError::InvalidOption {
                    name: "tab_size",
                    reason: format!("must be a number greater than 0, got {tab_size}"),
                });
            }
        }
        Ok(())
    }
}

/// Output of [`crate::format`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Formatted {
    /// No ranges were requested
    Css(String),
    /// Ranges were requested, `ranges` holds the output ranges of the
    /// requested input ranges that matched a rule
    WithRanges { css: String, ranges: Vec<Range> },
}

impl Formatted {
    pub fn css(&self) -> &str {
        match self {
            Self::Css(css) | Self::WithRanges { css, .. } => css,
        }
    }

    pub fn into_css(self) -> String {
        match self {
            Self::Css(css) | Self::WithRanges { css, .. } => css,
        }
    }

    /// `None` when no ranges were requested
    pub fn ranges(&self) -> Option<&[Range]> {
        match self {
            Self::Css(_) => None,
            Self::WithRanges { ranges, .. } => Some(ranges),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(FormatOptions::new().validate().is_ok());
        assert!(FormatOptions::new().tab_size(1).validate().is_ok());
        assert_eq!(
            FormatOptions::new().tab_size(0).validate(),
            Err(FormatError::InvalidOption {
                name: "tab_size",
                reason: "must be a number greater than 0, got 0".to_string(),
            })
        );
        assert!(FormatOptions::new().tab_size(-1).validate().is_err());
    }

    #[test]
    fn test_formatted_accessors() {
        let plain = Formatted::Css("a {}".to_string());
        assert_eq!(plain.css(), "a {}");
        assert_eq!(plain.ranges(), None);

        let with_ranges = Formatted::WithRanges {
            css: "a {}".to_string(),
            ranges: vec![Range::new(0, 4)],
        };
        assert_eq!(with_ranges.ranges(), Some(&[Range::new(0, 4)][..]));
        assert_eq!(with_ranges.into_css(), "a {}");
    }
}
