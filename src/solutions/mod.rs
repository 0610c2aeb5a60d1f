/// Puzzle solutions and the glue that runs them on cases and requests.
///
/// Each solution lives in its own module as a pure function; this module
/// dispatches a tagged case input to the right one and shapes API answers.

pub mod decode;
pub mod strings;

use serde::de::DeserializeOwned;

use crate::error::PuzzleError;
use crate::models::case::{Answer, CaseInput};
use crate::models::problem::{
    DecodeWaysRequest, DecodeWaysResponse, GcdOfStringsRequest, GcdOfStringsResponse,
};

/// Longest digit string the exhaustive decoding reference is run on.
pub const BRUTE_FORCE_MAX_DIGITS: usize = 20;

/// Run the solution for a case input.
pub fn solve(input: &CaseInput) -> Result<Answer, PuzzleError> {
    match input {
        CaseInput::GcdOfStrings { a, b } => Ok(Answer::Divisor(strings::gcd_of_strings(a, b))),
        CaseInput::DecodeWays { digits } => decode::num_decodings(digits).map(Answer::Count),
    }
}

/// Run the reference implementation for a case input.
///
/// Returns `None` when the reference would be too slow to run (decode
/// inputs longer than [`BRUTE_FORCE_MAX_DIGITS`]).
pub fn reference(input: &CaseInput) -> Option<Result<Answer, PuzzleError>> {
    match input {
        CaseInput::GcdOfStrings { a, b } => Some(Ok(Answer::Divisor(
            strings::gcd_of_strings_by_length(a, b),
        ))),
        CaseInput::DecodeWays { digits } if digits.len() <= BRUTE_FORCE_MAX_DIGITS => Some(
            decode::decodings(digits).map(|all| Answer::Count(all.len() as u64)),
        ),
        CaseInput::DecodeWays { .. } => None,
    }
}

/// Answer a /api/gcd_of_strings request.
pub fn answer_gcd(req: &GcdOfStringsRequest) -> Result<GcdOfStringsResponse, PuzzleError> {
    if req.a.is_empty() {
        return Err(PuzzleError::EmptyInput { field: "a" });
    }
    if req.b.is_empty() {
        return Err(PuzzleError::EmptyInput { field: "b" });
    }

    let divisor = strings::gcd_of_strings(&req.a, &req.b);
    let repeats_in_a = strings::repeats(&req.a, &divisor).unwrap_or(0);
    let repeats_in_b = strings::repeats(&req.b, &divisor).unwrap_or(0);
    Ok(GcdOfStringsResponse {
        divisor,
        repeats_in_a,
        repeats_in_b,
    })
}

/// Answer a /api/decode_ways request.
pub fn answer_decode(req: &DecodeWaysRequest) -> Result<DecodeWaysResponse, PuzzleError> {
    let count = decode::num_decodings(&req.digits)?;
    Ok(DecodeWaysResponse { count })
}

/// Deserialize a JSON request body.
pub fn parse_request<T: DeserializeOwned>(body: &[u8]) -> Result<T, PuzzleError> {
    if body.is_empty() {
        return Err(PuzzleError::MalformedRequest("request body is empty".to_string()));
    }
    Ok(serde_json::from_slice(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gcd_input(a: &str, b: &str) -> CaseInput {
        CaseInput::GcdOfStrings { a: a.to_string(), b: b.to_string() }
    }

    fn decode_input(digits: &str) -> CaseInput {
        CaseInput::DecodeWays { digits: digits.to_string() }
    }

    #[test]
    fn test_solve_dispatches_by_problem() {
        assert_eq!(solve(&gcd_input("ABAB", "AB")), Ok(Answer::Divisor("AB".to_string())));
        assert_eq!(solve(&decode_input("226")), Ok(Answer::Count(3)));
    }

    #[test]
    fn test_solve_propagates_input_errors() {
        assert_eq!(
            solve(&decode_input("2a")),
            Err(PuzzleError::NonDigit { index: 1, found: 'a' })
        );
    }

    #[test]
    fn test_reference_agrees_with_solution() {
        for input in [gcd_input("ABCABC", "ABC"), gcd_input("LEET", "CODE"), decode_input("11106")] {
            assert_eq!(reference(&input), Some(solve(&input)));
        }
    }

    #[test]
    fn test_reference_skips_long_digit_strings() {
        let long = "1".repeat(BRUTE_FORCE_MAX_DIGITS + 1);
        assert!(reference(&decode_input(&long)).is_none());
        assert!(reference(&decode_input(&"1".repeat(BRUTE_FORCE_MAX_DIGITS))).is_some());
    }

    #[test]
    fn test_answer_gcd_reports_repeat_counts() {
        let req = GcdOfStringsRequest { a: "ABABAB".to_string(), b: "ABAB".to_string() };
        let resp = answer_gcd(&req).unwrap();
        assert_eq!(resp.divisor, "AB");
        assert_eq!(resp.repeats_in_a, 3);
        assert_eq!(resp.repeats_in_b, 2);
    }

    #[test]
    fn test_answer_gcd_without_divisor() {
        let req = GcdOfStringsRequest { a: "LEET".to_string(), b: "CODE".to_string() };
        let resp = answer_gcd(&req).unwrap();
        assert_eq!(resp.divisor, "");
        assert_eq!(resp.repeats_in_a, 0);
        assert_eq!(resp.repeats_in_b, 0);
    }

    #[test]
    fn test_answer_gcd_rejects_empty_fields() {
        let req = GcdOfStringsRequest { a: "AB".to_string(), b: String::new() };
        assert_eq!(answer_gcd(&req), Err(PuzzleError::EmptyInput { field: "b" }));
    }

    #[test]
    fn test_answer_decode() {
        let req = DecodeWaysRequest { digits: "12".to_string() };
        assert_eq!(answer_decode(&req), Ok(DecodeWaysResponse { count: 2 }));
        let req = DecodeWaysRequest { digits: "06".to_string() };
        assert_eq!(answer_decode(&req), Ok(DecodeWaysResponse { count: 0 }));
    }

    #[test]
    fn test_parse_request() {
        let req: DecodeWaysRequest = parse_request(br#"{"digits":"226"}"#).unwrap();
        assert_eq!(req.digits, "226");

        let err = parse_request::<DecodeWaysRequest>(b"").unwrap_err();
        assert_eq!(err.kind(), "malformed_request");
        let err = parse_request::<DecodeWaysRequest>(br#"{"digits": 226}"#).unwrap_err();
        assert_eq!(err.kind(), "malformed_request");
    }
}
