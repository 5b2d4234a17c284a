use thiserror::Error;

/// Failure raised while evaluating a condition against a table.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("column `{column}` not found in table")]
    MissingColumn { column: String },
    #[error("column `{column}` has type {dtype}, expected {expected}")]
    TypeMismatch {
        column: String,
        dtype: String,
        expected: &'static str,
    },
    #[error("invalid pattern for column `{column}`: {message}")]
    InvalidPattern { column: String, message: String },
    #[error("condition produced {got} row verdicts for a table of {expected} rows")]
    MaskLength { got: usize, expected: usize },
    #[error("{0}")]
    Evaluation(String),
}

impl CheckError {
    /// Whether the failure is a table-shape problem or an evaluation problem.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingColumn { .. } | Self::TypeMismatch { .. } => ErrorKind::Schema,
            Self::InvalidPattern { .. } | Self::MaskLength { .. } | Self::Evaluation(_) => {
                ErrorKind::Evaluation
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The table cannot support the condition (missing column, wrong dtype).
    Schema,
    /// The condition itself failed (bad pattern, bad mask, predicate error).
    Evaluation,
}

pub type Result<T> = std::result::Result<T, CheckError>;
