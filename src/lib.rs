/// Puzzle Solutions — Shared Library
///
/// This crate contains the puzzle solutions, their reference
/// implementations, the request/response models, and the case
/// generation and verification harness.
///
/// Each serverless function in `api/` imports from this library
/// to keep handlers thin and solutions reusable.

pub mod data;
pub mod error;
pub mod models;
pub mod report;
pub mod solutions;

pub use error::PuzzleError;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
