use thiserror::Error;

pub type Result<T, E = FormatError> = std::result::Result<T, E>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Invalid option `{name}`: {reason}")]
    InvalidOption { name: &'static str, reason: String },
}
