use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::case::Answer;
use super::problem::Problem;

/// Outcome of running every case through its solution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationReport {
    /// Total number of cases run.
    pub total_cases: usize,
    /// Cases that matched every available check.
    pub passed: usize,
    /// Cases that disagreed with an expected answer or the reference.
    pub failed: usize,
    /// Breakdown per problem.
    pub by_problem: BTreeMap<Problem, ProblemSummary>,
    /// Details for every failed case.
    pub failures: Vec<CaseFailure>,
}

impl VerificationReport {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Per-problem totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemSummary {
    pub cases: usize,
    pub passed: usize,
    pub failed: usize,
    /// Cases compared against a known answer.
    pub expected_checked: usize,
    /// Cases compared against the reference implementation.
    pub reference_checked: usize,
}

/// A case whose answer did not hold up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseFailure {
    pub case_id: String,
    pub problem: Problem,
    /// What the solution returned (None if it errored).
    pub answer: Option<Answer>,
    /// What it should have returned, when known.
    pub expected: Option<Answer>,
    pub reason: String,
}
