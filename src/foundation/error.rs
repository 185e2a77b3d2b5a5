/// Convenience result type used across curveblur.
pub type CurveBlurResult<T> = Result<T, CurveBlurError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Declined edits and missing sources are not errors; they surface as `false` / `None` at the
/// call site. This type covers malformed programmatic input and failures from dependencies.
#[derive(thiserror::Error, Debug)]
pub enum CurveBlurError {
    /// Invalid user-provided data (bad dimensions, malformed project, empty path).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while producing pixels from otherwise valid inputs.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing project data.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CurveBlurError {
    /// Build a [`CurveBlurError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CurveBlurError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`CurveBlurError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for CurveBlurError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
