//! Core Kernel - Foundational abstractions for the payment-gateway domain
//!
//! This crate provides the building blocks used across all domain modules:
//! - The `Builder` contract for assembling immutable value objects
//! - Coded status enumerations with total lookup and an unrecognized fallback
//! - Domain configuration and the shared error type

pub mod builder;
pub mod status;
pub mod config;
pub mod error;

pub use builder::{Builder, BuildInto};
pub use status::{CodedStatus, StatusCode};
pub use config::{DomainConfig, DocumentSwitch};
pub use error::CoreError;

#[doc(hidden)]
pub use serde as __serde;
