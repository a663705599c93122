//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! payment domain test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built builders and values for common entities
//! - `logging`: One-time tracing subscriber for tests
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod logging;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use logging::*;
pub use assertions::*;
pub use generators::*;
