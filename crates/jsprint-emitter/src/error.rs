//! Printer errors.

use thiserror::Error;

/// Failure to render a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnparseError {
    /// The tree contains a node kind the printer does not render.
    #[error("unsupported node kind: {kind}")]
    UnsupportedNodeKind { kind: String },
}

impl UnparseError {
    pub fn unsupported(kind: impl Into<String>) -> Self {
        Self::UnsupportedNodeKind { kind: kind.into() }
    }

    /// The offending node kind.
    pub fn kind(&self) -> &str {
        match self {
            Self::UnsupportedNodeKind { kind } => kind,
        }
    }
}

pub type Result<T, E = UnparseError> = std::result::Result<T, E>;

/// Failure to render ESTree JSON text.
#[derive(Debug, Error)]
pub enum PrintJsonError {
    #[error("invalid ESTree JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Unparse(#[from] UnparseError),
}
