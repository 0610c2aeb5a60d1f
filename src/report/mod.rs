//! Verification report generation for the puzzle solutions.
//!
//! Runs every case through its solution and checks the answer against
//! the known answer (when the case has one) and the reference
//! implementation (when it is cheap enough to run).

use crate::models::case::{Answer, TestCase};
use crate::models::report::{CaseFailure, ProblemSummary, VerificationReport};
use crate::models::problem::Problem;
use crate::solutions::{reference, solve};
use std::collections::BTreeMap;

/// Run and check every case, collecting totals and failures.
pub fn generate_report(cases: &[TestCase]) -> VerificationReport {
    let mut by_problem: BTreeMap<Problem, ProblemSummary> = BTreeMap::new();
    let mut failures = Vec::new();

    for case in cases {
        let problem = case.input.problem();
        let summary = by_problem.entry(problem).or_default();
        summary.cases += 1;

        match check_case(case, summary) {
            None => summary.passed += 1,
            Some(failure) => {
                tracing::warn!(
                    case_id = %failure.case_id,
                    problem = %problem,
                    reason = %failure.reason,
                    "case failed verification"
                );
                summary.failed += 1;
                failures.push(failure);
            }
        }
    }

    let failed = failures.len();
    let report = VerificationReport {
        total_cases: cases.len(),
        passed: cases.len() - failed,
        failed,
        by_problem,
        failures,
    };
    tracing::info!(
        total = report.total_cases,
        passed = report.passed,
        failed = report.failed,
        "verification finished"
    );
    report
}

/// Check one case; `None` means it passed.
fn check_case(case: &TestCase, summary: &mut ProblemSummary) -> Option<CaseFailure> {
    let problem = case.input.problem();
    let fail = |answer: Option<Answer>, reason: String| CaseFailure {
        case_id: case.id.clone(),
        problem,
        answer,
        expected: case.expected.clone(),
        reason,
    };

    let answer = match solve(&case.input) {
        Ok(answer) => answer,
        Err(err) => return Some(fail(None, format!("solution returned an error: {err}"))),
    };

    if let Some(expected) = &case.expected {
        summary.expected_checked += 1;
        if &answer != expected {
            return Some(fail(
                Some(answer.clone()),
                format!("expected {expected}, got {answer}"),
            ));
        }
    }

    match reference(&case.input) {
        None => {}
        Some(Ok(reference_answer)) => {
            summary.reference_checked += 1;
            if reference_answer != answer {
                return Some(fail(
                    Some(answer.clone()),
                    format!("reference gave {reference_answer}, solution gave {answer}"),
                ));
            }
        }
        Some(Err(err)) => {
            return Some(fail(Some(answer), format!("reference returned an error: {err}")));
        }
    }

    None
}
