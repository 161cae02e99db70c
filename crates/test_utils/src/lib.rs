//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! expense splitter test suite.
//!
//! # Modules
//!
//! - `fixtures`: The seed friends and common amounts
//! - `builders`: Builder patterns for test data construction
//! - `ids`: Deterministic identifier generation
//! - `assertions`: Custom assertion helpers for roster changes
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod ids;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use ids::*;
pub use assertions::*;
pub use generators::*;
