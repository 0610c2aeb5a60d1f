use serde::{Deserialize, Serialize};

use super::problem::Problem;

/// Input for one puzzle case, tagged by the problem it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "problem", rename_all = "snake_case")]
pub enum CaseInput {
    GcdOfStrings { a: String, b: String },
    DecodeWays { digits: String },
}

impl CaseInput {
    pub fn problem(&self) -> Problem {
        match self {
            CaseInput::GcdOfStrings { .. } => Problem::GcdOfStrings,
            CaseInput::DecodeWays { .. } => Problem::DecodeWays,
        }
    }
}

/// The answer a solution produces for a case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    /// Common tiling divisor (empty when none exists).
    Divisor(String),
    /// Number of decodings.
    Count(u64),
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Answer::Divisor(d) => write!(f, "{d:?}"),
            Answer::Count(n) => write!(f, "{n}"),
        }
    }
}

/// A single puzzle case with an optional known answer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestCase {
    /// Unique case identifier (e.g., "gcd_0001").
    pub id: String,
    pub input: CaseInput,
    /// Known answer; random cases leave this empty and rely on the reference check.
    pub expected: Option<Answer>,
}
