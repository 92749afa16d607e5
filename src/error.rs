//! Error types for the seeker crate

use thiserror::Error;

/// Main error type for the seeker crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid terrain code {code} (expected 1-4)")]
    InvalidTerrain { code: u8 },

    #[error("unknown terrain name '{name}' (expected one of: {expected})")]
    UnknownTerrainName { name: String, expected: String },

    #[error(
        "degenerate belief update at ({row}, {col}): prior {prior}, denominator {denominator}"
    )]
    DegenerateBelief {
        row: usize,
        col: usize,
        prior: f64,
        denominator: f64,
    },

    #[error("unknown search policy '{input}'. Expected one of: {expected}")]
    ParsePolicy { input: String, expected: String },

    #[error("unknown target placement '{input}'. Expected one of: {expected}")]
    ParsePlacement { input: String, expected: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
