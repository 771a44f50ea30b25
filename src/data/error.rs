use std::path::PathBuf;

use thiserror::Error;

use super::model::NumericField;

/// Everything that can go wrong between the data file and a rendered metric.
#[derive(Debug, Error)]
pub enum DataError {
    /// File missing, unreadable, or malformed. Fatal at startup.
    #[error("failed to load {}: {reason}", .path.display())]
    Load { path: PathBuf, reason: String },

    /// A gender code outside `F`/`M` under the strict policy.
    #[error("row {row}: unrecognised gender code {code:?}")]
    Normalization { row: usize, code: String },

    /// A query value outside the fixed enumerations.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error("cannot take the mean of {field} over an empty result")]
    EmptyAggregation { field: NumericField },
}

impl DataError {
    pub(crate) fn load(path: impl Into<PathBuf>, err: anyhow::Error) -> Self {
        DataError::Load {
            path: path.into(),
            reason: format!("{err:#}"),
        }
    }
}
