//! Domain models for the puzzle solutions.
//!
//! These types are shared across all modules: solutions, data, report, and the API handlers.

pub mod case;
pub mod problem;
pub mod report;
