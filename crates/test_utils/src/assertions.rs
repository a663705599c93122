//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::status::UNRECOGNIZED_CODE;
use domain_common::{Sender, Status, TransactionStatus};

/// Asserts that every field of a sender is absent except the email
pub fn assert_sender_only_email(sender: &Sender, expected_email: &str) {
    assert_eq!(sender.email(), Some(expected_email), "Unexpected email");
    assert!(sender.name().is_none(), "Expected no name, got {:?}", sender.name());
    assert!(sender.phone().is_none(), "Expected no phone, got {:?}", sender.phone());
    assert!(sender.address().is_none(), "Expected no address, got {:?}", sender.address());
    assert!(sender.cpf().is_none(), "Expected no CPF, got {:?}", sender.cpf());
    assert!(sender.cnpj().is_none(), "Expected no CNPJ, got {:?}", sender.cnpj());
    assert!(sender.hash().is_none(), "Expected no hash, got {:?}", sender.hash());
}

/// Asserts that a reported code classifies as the expected status
///
/// # Panics
///
/// Panics if the status, its code, or its description differ
pub fn assert_status(reported: &TransactionStatus, expected: Status) {
    let actual = reported.status();
    assert_eq!(
        actual, expected,
        "Code {} classified as {}, expected {}",
        reported.code(),
        actual,
        expected
    );
    assert_eq!(actual.code(), expected.code());
    assert_eq!(actual.description(), expected.description());
}

/// Asserts that a reported code falls back to `UNRECOGNIZED`
pub fn assert_unrecognized(reported: &TransactionStatus) {
    assert!(
        !reported.is_recognized(),
        "Expected code {} to be unrecognized, got {}",
        reported.code(),
        reported.status()
    );
    assert_eq!(reported.status().code(), UNRECOGNIZED_CODE);
}
