//! Case data for the puzzle solutions.
//!
//! Curated cases carry known answers from the problem statements. Random
//! cases are generated from a seeded RNG, so the same config always yields
//! the same dataset; they have no expected answer and are verified against
//! the reference implementations instead.
//!
//! # Random Case Shapes
//! - gcd: a random unit over a small alphabet, repeated into both strings,
//!   with one character of the second string corrupted about a third of the time
//! - decode: digit strings weighted towards '1' and '2' (which pair up) and
//!   with occasional '0's (which test the undecodable paths)

pub mod config;

use crate::models::case::{Answer, CaseInput, TestCase};
use config::DatasetConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Small alphabet so that random strings often share a divisor.
const GCD_ALPHABET: [char; 3] = ['A', 'B', 'C'];

/// Digit pool for random decode cases; duplicates set the weighting.
const DIGIT_POOL: [u8; 16] = [
    b'1', b'1', b'1', b'2', b'2', b'2', b'0', b'0', b'3', b'4', b'5', b'6', b'7', b'8', b'9', b'6',
];

/// Cases with known answers.
pub fn curated_cases() -> Vec<TestCase> {
    let gcd = [
        ("ABCABC", "ABC", "ABC"),
        ("ABABAB", "ABAB", "AB"),
        ("LEET", "CODE", ""),
        ("ABC", "ABC", "ABC"),
        ("AAAAAA", "AAAA", "AA"),
        ("ABAB", "BABA", ""),
        ("TAUXXTAUXXTAUXXTAUXXTAUXX", "TAUXXTAUXXTAUXXTAUXXTAUXXTAUXXTAUXXTAUXXTAUXX", "TAUXX"),
    ];
    let decode: [(&str, u64); 9] = [
        ("12", 2),
        ("226", 3),
        ("06", 0),
        ("10", 1),
        ("0", 0),
        ("100", 0),
        ("30", 0),
        ("11106", 2),
        ("2101", 1),
    ];

    let mut cases = Vec::with_capacity(gcd.len() + decode.len());
    for (i, (a, b, expected)) in gcd.iter().enumerate() {
        cases.push(TestCase {
            id: gcd_id(i),
            input: CaseInput::GcdOfStrings { a: a.to_string(), b: b.to_string() },
            expected: Some(Answer::Divisor(expected.to_string())),
        });
    }
    for (i, (digits, expected)) in decode.iter().enumerate() {
        cases.push(TestCase {
            id: decode_id(i),
            input: CaseInput::DecodeWays { digits: digits.to_string() },
            expected: Some(Answer::Count(*expected)),
        });
    }
    cases
}

/// Curated cases followed by seeded random cases for each problem.
pub fn generate_cases(config: &DatasetConfig) -> Vec<TestCase> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut cases = curated_cases();
    let curated_gcd = cases
        .iter()
        .filter(|c| matches!(c.input, CaseInput::GcdOfStrings { .. }))
        .count();
    let curated_decode = cases.len() - curated_gcd;

    cases.reserve(config.random_cases_per_problem * 2);
    for i in 0..config.random_cases_per_problem {
        let (a, b) = random_gcd_pair(&mut rng, config);
        cases.push(TestCase {
            id: gcd_id(curated_gcd + i),
            input: CaseInput::GcdOfStrings { a, b },
            expected: None,
        });
    }
    for i in 0..config.random_cases_per_problem {
        cases.push(TestCase {
            id: decode_id(curated_decode + i),
            input: CaseInput::DecodeWays { digits: random_digits(&mut rng, config.max_digits) },
            expected: None,
        });
    }

    tracing::debug!(seed = config.seed, cases = cases.len(), "generated puzzle cases");
    cases
}

/// Get the canonical dataset (default config).
#[cfg(test)]
pub fn get_test_dataset() -> Vec<TestCase> {
    generate_cases(&DatasetConfig::default())
}

fn gcd_id(index: usize) -> String {
    format!("gcd_{:04}", index + 1)
}

fn decode_id(index: usize) -> String {
    format!("decode_{:04}", index + 1)
}

/// Two strings built from one random unit, the second sometimes corrupted.
fn random_gcd_pair(rng: &mut StdRng, config: &DatasetConfig) -> (String, String) {
    let unit_len = rng.gen_range(1..=config.max_unit_len.max(1));
    let unit: String = (0..unit_len)
        .map(|_| GCD_ALPHABET[rng.gen_range(0..GCD_ALPHABET.len())])
        .collect();

    let max_repeats = config.max_repeats.max(1);
    let a = unit.repeat(rng.gen_range(1..=max_repeats));
    let mut b: Vec<char> = unit.repeat(rng.gen_range(1..=max_repeats)).chars().collect();

    if rng.gen_bool(1.0 / 3.0) {
        let pos = rng.gen_range(0..b.len());
        b[pos] = GCD_ALPHABET[rng.gen_range(0..GCD_ALPHABET.len())];
    }

    (a, b.into_iter().collect())
}

/// A random digit string of length 1..=max_digits.
fn random_digits(rng: &mut StdRng, max_digits: usize) -> String {
    let len = rng.gen_range(1..=max_digits.max(1));
    (0..len)
        .map(|_| DIGIT_POOL[rng.gen_range(0..DIGIT_POOL.len())] as char)
        .collect()
}
