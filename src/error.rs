use crate::formula::FormulaError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LineupError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Malformed formula '{formula}': {reason}")]
    MalformedFormula {
        formula: String,
        #[source]
        reason: FormulaError,
    },

    #[error("Roster has {available} players but {required} starters are required")]
    InsufficientRoster { required: usize, available: usize },

    #[error("The {0} position list is defined more than once")]
    DuplicateSection(String),

    #[error("{slots} starting slots exceeds the exhaustive search limit of {limit}")]
    TooManySlots { slots: usize, limit: usize },

    #[error("Roster Error (line {line}): {message}")]
    Roster { line: usize, message: String },

    #[error("Requirements Error (line {line}): {message}")]
    Requirements { line: usize, message: String },

    #[error("Invalid Requirements: {0}")]
    InvalidRequirements(String),

    #[error("Internal Error: {0}")]
    Internal(String),
}

pub type LfResult<T> = Result<T, LineupError>;
