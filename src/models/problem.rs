use serde::{Deserialize, Serialize};

/// The puzzles solved in this crate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Problem {
    /// Greatest Common Divisor of Strings.
    GcdOfStrings,
    /// Decode Ways.
    DecodeWays,
}

impl Problem {
    /// Every problem, in catalogue order.
    pub const ALL: [Problem; 2] = [Problem::GcdOfStrings, Problem::DecodeWays];

    /// Problem number in the public puzzle catalogue.
    pub fn number(&self) -> u32 {
        match self {
            Problem::GcdOfStrings => 1071,
            Problem::DecodeWays => 91,
        }
    }

    /// URL slug, also used as the display form.
    pub fn slug(&self) -> &'static str {
        match self {
            Problem::GcdOfStrings => "greatest-common-divisor-of-strings",
            Problem::DecodeWays => "decode-ways",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Problem::GcdOfStrings => "Greatest Common Divisor of Strings",
            Problem::DecodeWays => "Decode Ways",
        }
    }
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// API request body for the /api/gcd_of_strings endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GcdOfStringsRequest {
    pub a: String,
    pub b: String,
}

/// API response body for the /api/gcd_of_strings endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GcdOfStringsResponse {
    /// Longest string tiling both inputs (empty if none).
    pub divisor: String,
    /// How many copies of `divisor` make up `a` (0 when there is no divisor).
    pub repeats_in_a: usize,
    /// How many copies of `divisor` make up `b` (0 when there is no divisor).
    pub repeats_in_b: usize,
}

/// API request body for the /api/decode_ways endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DecodeWaysRequest {
    pub digits: String,
}

/// API response body for the /api/decode_ways endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DecodeWaysResponse {
    /// Number of letter decodings of `digits`.
    pub count: u64,
}
