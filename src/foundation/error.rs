use crate::foundation::core::FrameDims;

/// Convenience result type used across the crate.
pub type ExposureResult<T> = Result<T, ExposureError>;

/// Top-level error taxonomy used by the pipeline APIs.
///
/// Every variant is fatal for the current run: nothing is retried and no partial heatmap is
/// produced.
#[derive(thiserror::Error, Debug)]
pub enum ExposureError {
    /// An annotation record does not match `<frame> <count> (x y){4 * count}`.
    #[error(
        "malformed annotation{}: {msg}",
        .line.map(|n| format!(" at line {n}")).unwrap_or_default()
    )]
    MalformedAnnotation {
        /// 1-based line number in the annotation source, when known.
        line: Option<usize>,
        /// What was wrong with the record.
        msg: String,
    },

    /// A frame does not share the dimensions established by the first frame of the run.
    #[error("dimension mismatch for '{frame}': expected {expected}, found {found}")]
    DimensionMismatch {
        /// Frame reference as written in the annotation record.
        frame: String,
        /// Dimensions of the exposure grid.
        expected: FrameDims,
        /// Dimensions of the offending frame.
        found: FrameDims,
    },

    /// A referenced frame image could not be loaded.
    #[error("missing resource '{path}': {reason}")]
    MissingResource {
        /// Frame reference or resolved path.
        path: String,
        /// Underlying cause.
        reason: String,
    },

    /// Invalid user-provided configuration or data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ExposureError {
    /// Build a [`ExposureError::MalformedAnnotation`] without a line number.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedAnnotation {
            line: None,
            msg: msg.into(),
        }
    }

    /// Build a [`ExposureError::MissingResource`] value.
    pub fn missing(path: impl Into<String>, reason: impl ToString) -> Self {
        Self::MissingResource {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Build a [`ExposureError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Attach a 1-based source line to a malformed-annotation error.
    ///
    /// Other variants pass through untouched.
    pub fn at_line(self, n: usize) -> Self {
        match self {
            Self::MalformedAnnotation { msg, .. } => Self::MalformedAnnotation {
                line: Some(n),
                msg,
            },
            other => other,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
