//! Common Payment Domain
//!
//! Request-side value objects shared by the checkout, transaction and
//! pre-approval flows, and the classification of transaction status codes.
//!
//! # Construction
//!
//! Value objects have no public constructors. Each one is produced by its
//! builder; setters chain in any order, nothing is mandatory, and `build()`
//! returns an immutable snapshot. Validation of business data (document
//! digits, email format) happens at the transport boundary, not here.
//!
//! # Example
//!
//! ```rust
//! use domain_common::{AddressBuilder, DocumentType, PhoneBuilder, SenderBuilder};
//!
//! let sender = SenderBuilder::new()
//!     .with_name("Maria Silva")
//!     .with_email("maria@example.com")
//!     .with_phone(PhoneBuilder::new().with_area_code("11").with_number("987654321"))
//!     .with_address(AddressBuilder::new().with_city("Sao Paulo").with_state("SP"))
//!     .with_document(DocumentType::Cpf, "12345678909")
//!     .build();
//!
//! assert_eq!(sender.cpf(), Some("12345678909"));
//! assert_eq!(sender.phone().and_then(|p| p.area_code()), Some("11"));
//! ```
//!
//! # Transaction status
//!
//! ```rust
//! use domain_common::{Status, TransactionStatus};
//!
//! let reported = TransactionStatus::new(3);
//! assert_eq!(reported.status(), Status::Paid);
//! assert_eq!(TransactionStatus::new(42).status(), Status::Unrecognized);
//! ```

pub mod phone;
pub mod address;
pub mod document;
pub mod sender;
pub mod transaction_status;

pub use phone::{Phone, PhoneBuilder};
pub use address::{Address, AddressBuilder};
pub use document::DocumentType;
pub use sender::{Sender, SenderBuilder};
pub use transaction_status::{Status, TransactionStatus};
