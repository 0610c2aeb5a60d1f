//! Dataset configuration.
//!
//! Defaults reproduce the canonical dataset. Each field can be overridden
//! from the environment when generating outputs:
//!
//! | Variable              | Field                      |
//! |-----------------------|----------------------------|
//! | `PUZZLE_SEED`         | `seed`                     |
//! | `PUZZLE_RANDOM_CASES` | `random_cases_per_problem` |
//! | `PUZZLE_MAX_DIGITS`   | `max_digits`               |
//! | `PUZZLE_OUTPUT_DIR`   | `output_dir`               |

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::PuzzleError;
use crate::solutions::BRUTE_FORCE_MAX_DIGITS;

/// Data seed for reproducible generation.
pub const DEFAULT_SEED: u64 = 42;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetConfig {
    /// RNG seed; the same seed always yields the same cases.
    pub seed: u64,
    /// Random cases generated per problem, after the curated ones.
    pub random_cases_per_problem: usize,
    /// Longest tiling unit used for random gcd cases.
    pub max_unit_len: usize,
    /// Most copies of the unit in one random gcd string.
    pub max_repeats: usize,
    /// Longest random digit string. Never above [`BRUTE_FORCE_MAX_DIGITS`].
    pub max_digits: usize,
    /// Directory the CLI writes its JSON files into.
    pub output_dir: PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        DatasetConfig {
            seed: DEFAULT_SEED,
            random_cases_per_problem: 100,
            max_unit_len: 4,
            max_repeats: 6,
            max_digits: 12,
            output_dir: PathBuf::from("output"),
        }
    }
}

impl DatasetConfig {
    /// Defaults with any `PUZZLE_*` environment overrides applied.
    pub fn from_env() -> Result<Self, PuzzleError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (the environment, in practice).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PuzzleError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = DatasetConfig::default();

        if let Some(seed) = parse_var(&lookup, "PUZZLE_SEED")? {
            config.seed = seed;
        }
        if let Some(count) = parse_var(&lookup, "PUZZLE_RANDOM_CASES")? {
            config.random_cases_per_problem = count;
        }
        if let Some(max_digits) = parse_var::<usize, _>(&lookup, "PUZZLE_MAX_DIGITS")? {
            if max_digits == 0 {
                return Err(PuzzleError::InvalidConfig {
                    key: "PUZZLE_MAX_DIGITS",
                    value: max_digits.to_string(),
                });
            }
            if max_digits > BRUTE_FORCE_MAX_DIGITS {
                tracing::warn!(
                    requested = max_digits,
                    limit = BRUTE_FORCE_MAX_DIGITS,
                    "PUZZLE_MAX_DIGITS above brute-force limit, clamping"
                );
            }
            config.max_digits = max_digits.min(BRUTE_FORCE_MAX_DIGITS);
        }
        if let Some(dir) = lookup("PUZZLE_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(dir);
        }

        Ok(config)
    }
}

fn parse_var<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, PuzzleError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| PuzzleError::InvalidConfig { key, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_no_overrides_gives_defaults() {
        let config = DatasetConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, DatasetConfig::default());
        assert_eq!(config.seed, DEFAULT_SEED);
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = DatasetConfig::from_lookup(lookup_from(&[
            ("PUZZLE_SEED", "7"),
            ("PUZZLE_RANDOM_CASES", " 25 "),
            ("PUZZLE_MAX_DIGITS", "8"),
            ("PUZZLE_OUTPUT_DIR", "/tmp/puzzles"),
        ]))
        .unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.random_cases_per_problem, 25);
        assert_eq!(config.max_digits, 8);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/puzzles"));
    }

    #[test]
    fn test_max_digits_is_clamped() {
        let config =
            DatasetConfig::from_lookup(lookup_from(&[("PUZZLE_MAX_DIGITS", "500")])).unwrap();
        assert_eq!(config.max_digits, BRUTE_FORCE_MAX_DIGITS);
    }

    #[test]
    fn test_unparseable_values_are_rejected() {
        let err = DatasetConfig::from_lookup(lookup_from(&[("PUZZLE_SEED", "forty-two")]))
            .unwrap_err();
        assert_eq!(
            err,
            PuzzleError::InvalidConfig { key: "PUZZLE_SEED", value: "forty-two".to_string() }
        );

        let err =
            DatasetConfig::from_lookup(lookup_from(&[("PUZZLE_MAX_DIGITS", "0")])).unwrap_err();
        assert_eq!(err.kind(), "invalid_config");
    }
}
