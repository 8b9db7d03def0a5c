//! Overlay document errors.

use thiserror::Error;

/// Reasons an overlay document is rejected. No partial view is ever
/// produced alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    #[error("malformed overlay document: {cause}")]
    Syntax { cause: String },

    #[error("unknown field `{field}`")]
    UnknownField { field: String },

    #[error("field `{field}` cannot be set from an overlay document")]
    SuppressedField { field: String },

    #[error("invalid value for `{field}`: {cause}")]
    InvalidValue { field: String, cause: String },
}

impl ParseFailure {
    /// The offending document key, if the failure is tied to one.
    pub fn field(&self) -> Option<&str> {
        match self {
            ParseFailure::Syntax { .. } => None,
            ParseFailure::UnknownField { field }
            | ParseFailure::SuppressedField { field }
            | ParseFailure::InvalidValue { field, .. } => Some(field),
        }
    }
}
