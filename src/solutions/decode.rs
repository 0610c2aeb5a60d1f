//! Decode Ways.
//!
//! Letters are encoded as numbers, A=1 through Z=26, and written back to
//! back without separators. A digit string decodes by splitting it into
//! groups of one or two digits, each in 1..=26 and none starting with '0'.

use super::BRUTE_FORCE_MAX_DIGITS;
use crate::error::PuzzleError;

/// Check that `s` is a non-empty run of ASCII digits.
fn validate_digits(s: &str) -> Result<&[u8], PuzzleError> {
    if s.is_empty() {
        return Err(PuzzleError::EmptyInput { field: "digits" });
    }
    if let Some((index, found)) = s.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
        return Err(PuzzleError::NonDigit { index, found });
    }
    Ok(s.as_bytes())
}

/// Count the decodings of `s` without materializing them.
///
/// Rolling DP over two accumulators: `pre` holds the count for the prefix
/// ending two positions back, `cur` the count for the prefix ending one
/// position back. An accumulator becomes `None` once it overflows u64; the
/// scan still runs to the end so that a later undecodable '0' yields 0.
///
/// Returns `Ok(0)` for digit strings with no decoding (leading '0', or a '0'
/// not preceded by '1' or '2').
pub fn num_decodings(s: &str) -> Result<u64, PuzzleError> {
    let digits = validate_digits(s)?;
    if digits[0] == b'0' {
        return Ok(0);
    }

    let mut pre: Option<u64> = Some(1);
    let mut cur: Option<u64> = Some(1);
    for i in 1..digits.len() {
        let (prev, this) = (digits[i - 1], digits[i]);
        let before = cur;
        if this == b'0' {
            if prev == b'1' || prev == b'2' {
                cur = pre;
            } else {
                return Ok(0);
            }
        } else if prev == b'1' || (prev == b'2' && this <= b'6') {
            cur = cur.zip(pre).and_then(|(c, p)| c.checked_add(p));
        }
        pre = before;
    }

    cur.ok_or(PuzzleError::CountOverflow { len: digits.len() })
}

/// Reference solution: every decoding of `s`, spelled out in letters.
///
/// Exhaustive recursion over one- and two-digit groups; single-digit groups
/// are tried first, so the output is ordered by partition. The result grows
/// like the Fibonacci numbers, so inputs longer than
/// [`BRUTE_FORCE_MAX_DIGITS`] are rejected.
pub fn decodings(s: &str) -> Result<Vec<String>, PuzzleError> {
    let digits = validate_digits(s)?;
    if digits.len() > BRUTE_FORCE_MAX_DIGITS {
        return Err(PuzzleError::TooLong { len: digits.len(), max: BRUTE_FORCE_MAX_DIGITS });
    }
    let mut out = Vec::new();
    let mut letters = String::with_capacity(digits.len());
    expand(digits, &mut letters, &mut out);
    Ok(out)
}

fn expand(rest: &[u8], letters: &mut String, out: &mut Vec<String>) {
    if rest.is_empty() {
        out.push(letters.clone());
        return;
    }
    if rest[0] == b'0' {
        return;
    }

    let one = rest[0] - b'0';
    letters.push(letter(one));
    expand(&rest[1..], letters, out);
    letters.pop();

    if rest.len() >= 2 {
        let two = one * 10 + (rest[1] - b'0');
        if two <= 26 {
            letters.push(letter(two));
            expand(&rest[2..], letters, out);
            letters.pop();
        }
    }
}

/// Map 1..=26 onto 'A'..='Z'.
fn letter(value: u8) -> char {
    (b'A' + value - 1) as char
}
