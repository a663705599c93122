//! Pre-approval Domain
//!
//! A pre-approval authorizes recurring charges against a buyer. Registering
//! one returns a code identifying it and a URL the buyer must visit to
//! confirm it.

pub mod registered;

pub use registered::{RegisteredPreApproval, RegisteredPreApprovalBuilder};
