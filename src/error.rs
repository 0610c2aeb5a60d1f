//! Error type for inputs outside a puzzle's contract.
//!
//! A solution that *can* answer an input answers it, even when the answer
//! is "nothing" (an empty divisor, zero decodings). These errors cover the
//! inputs a solution cannot answer at all.

/// Errors surfaced by solutions, request parsing, and configuration loading.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PuzzleError {
    /// A required input string was empty.
    #[error("input `{field}` must not be empty")]
    EmptyInput { field: &'static str },

    /// A digit string contained something other than '0'..='9'.
    #[error("expected a decimal digit at index {index}, found {found:?}")]
    NonDigit { index: usize, found: char },

    /// An input is too long for an exhaustive computation.
    #[error("input of length {len} exceeds the limit of {max}")]
    TooLong { len: usize, max: usize },

    /// The decoding count does not fit in a u64.
    #[error("decoding count for a {len}-digit input overflows u64")]
    CountOverflow { len: usize },

    /// A request body could not be deserialized.
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    /// An environment override could not be parsed.
    #[error("invalid value {value:?} for {key}")]
    InvalidConfig { key: &'static str, value: String },
}

impl PuzzleError {
    /// Short machine-readable kind, used as the `error` field of HTTP responses.
    pub fn kind(&self) -> &'static str {
        match self {
            PuzzleError::EmptyInput { .. } => "empty_input",
            PuzzleError::NonDigit { .. } => "non_digit",
            PuzzleError::TooLong { .. } => "too_long",
            PuzzleError::CountOverflow { .. } => "count_overflow",
            PuzzleError::MalformedRequest(_) => "malformed_request",
            PuzzleError::InvalidConfig { .. } => "invalid_config",
        }
    }
}

impl From<serde_json::Error> for PuzzleError {
    fn from(err: serde_json::Error) -> Self {
        PuzzleError::MalformedRequest(err.to_string())
    }
}
