//! Sender (buyer) of a payment
//!
//! The sender carries contact data, an optional phone and address, one of
//! two mutually exclusive tax documents (CPF or CNPJ), and the fingerprint
//! hash produced by the gateway's checkout script.
//!
//! # Document dispatch
//!
//! `SenderBuilder::with_document` routes a value to `with_cpf` or
//! `with_cnpj` according to the `DocumentType`. Unknown discriminators go to
//! CPF. What happens to the other field is governed by `DocumentSwitch`:
//! under the default `LeaveStale` it is left untouched, under `ClearSibling`
//! it is reset.

use serde::Serialize;

use core_kernel::{BuildInto, DocumentSwitch, DomainConfig};

use crate::address::Address;
use crate::document::DocumentType;
use crate::phone::Phone;

/// Sender of a payment request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sender {
    email: Option<String>,
    name: Option<String>,
    phone: Option<Phone>,
    address: Option<Address>,
    cpf: Option<String>,
    cnpj: Option<String>,
    hash: Option<String>,
}

impl Sender {
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn phone(&self) -> Option<&Phone> {
        self.phone.as_ref()
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    /// Individual taxpayer number
    pub fn cpf(&self) -> Option<&str> {
        self.cpf.as_deref()
    }

    /// Company taxpayer number
    pub fn cnpj(&self) -> Option<&str> {
        self.cnpj.as_deref()
    }

    /// Checkout fingerprint hash
    pub fn hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }

    /// Returns the populated document, CPF first when both are present
    pub fn document(&self) -> Option<(DocumentType, &str)> {
        match (self.cpf.as_deref(), self.cnpj.as_deref()) {
            (Some(cpf), _) => Some((DocumentType::Cpf, cpf)),
            (None, Some(cnpj)) => Some((DocumentType::Cnpj, cnpj)),
            (None, None) => None,
        }
    }
}

/// Builder for `Sender`
#[derive(Debug, Clone, Default)]
pub struct SenderBuilder {
    email: Option<String>,
    name: Option<String>,
    phone: Option<Phone>,
    address: Option<Address>,
    cpf: Option<String>,
    cnpj: Option<String>,
    hash: Option<String>,
    document_switch: DocumentSwitch,
}

impl SenderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder honouring the configured document switch policy
    pub fn from_config(config: &DomainConfig) -> Self {
        Self::new().with_document_switch(config.document_switch)
    }

    /// Sets how `with_document` treats the sibling document field
    pub fn with_document_switch(mut self, policy: DocumentSwitch) -> Self {
        self.document_switch = policy;
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the phone from a `Phone` or a `PhoneBuilder`
    pub fn with_phone(mut self, phone: impl BuildInto<Phone>) -> Self {
        self.phone = Some(phone.build_into());
        self
    }

    /// Sets the address from an `Address` or an `AddressBuilder`
    pub fn with_address(mut self, address: impl BuildInto<Address>) -> Self {
        self.address = Some(address.build_into());
        self
    }

    pub fn with_cpf(mut self, cpf: impl Into<String>) -> Self {
        self.cpf = Some(cpf.into());
        self
    }

    pub fn with_cnpj(mut self, cnpj: impl Into<String>) -> Self {
        self.cnpj = Some(cnpj.into());
        self
    }

    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    /// Sets the CPF or the CNPJ depending on `document_type`
    ///
    /// Unrecognized document types are stored as CPF.
    pub fn with_document(
        mut self,
        document_type: impl Into<DocumentType>,
        value: impl Into<String>,
    ) -> Self {
        let document_type: DocumentType = document_type.into();
        let clear_sibling = self.document_switch == DocumentSwitch::ClearSibling;

        match document_type {
            DocumentType::Cnpj => {
                if clear_sibling {
                    self.cpf = None;
                }
                self.with_cnpj(value)
            }
            DocumentType::Cpf => {
                if clear_sibling {
                    self.cnpj = None;
                }
                self.with_cpf(value)
            }
            DocumentType::Other(kind) => {
                tracing::debug!(%kind, "unrecognized document type, storing as CPF");
                if clear_sibling {
                    self.cnpj = None;
                }
                self.with_cpf(value)
            }
        }
    }

    /// Builds the sender
    pub fn build(&self) -> Sender {
        tracing::trace!(
            has_phone = self.phone.is_some(),
            has_address = self.address.is_some(),
            "building sender"
        );

        Sender {
            email: self.email.clone(),
            name: self.name.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            cpf: self.cpf.clone(),
            cnpj: self.cnpj.clone(),
            hash: self.hash.clone(),
        }
    }
}

core_kernel::buildable!(Sender, SenderBuilder);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phone::PhoneBuilder;

    #[test]
    fn test_email_only_sender() {
        let sender = SenderBuilder::new().with_email("a@b.com").build();

        assert_eq!(sender.email(), Some("a@b.com"));
        assert_eq!(sender.name(), None);
        assert_eq!(sender.phone(), None);
        assert_eq!(sender.address(), None);
        assert_eq!(sender.cpf(), None);
        assert_eq!(sender.cnpj(), None);
        assert_eq!(sender.hash(), None);
        assert_eq!(sender.document(), None);
    }

    #[test]
    fn test_document_dispatch_routes_to_cnpj() {
        let sender = SenderBuilder::new()
            .with_document(DocumentType::Cnpj, "11222333000181")
            .build();

        assert_eq!(sender.cnpj(), Some("11222333000181"));
        assert_eq!(sender.cpf(), None);
    }

    #[test]
    fn test_unknown_document_routes_to_cpf() {
        let sender = SenderBuilder::new().with_document("PASSPORT", "X123").build();

        assert_eq!(sender.cpf(), Some("X123"));
        assert_eq!(sender.cnpj(), None);
    }

    #[test]
    fn test_leave_stale_keeps_sibling() {
        let sender = SenderBuilder::new()
            .with_document(DocumentType::Cnpj, "11222333000181")
            .with_document(DocumentType::Cpf, "12345678909")
            .build();

        assert_eq!(sender.cpf(), Some("12345678909"));
        assert_eq!(sender.cnpj(), Some("11222333000181"));
        assert_eq!(sender.document(), Some((DocumentType::Cpf, "12345678909")));
    }

    #[test]
    fn test_clear_sibling_keeps_one_document() {
        let sender = SenderBuilder::new()
            .with_document_switch(DocumentSwitch::ClearSibling)
            .with_document(DocumentType::Cpf, "12345678909")
            .with_document(DocumentType::Cnpj, "11222333000181")
            .build();

        assert_eq!(sender.cpf(), None);
        assert_eq!(sender.document(), Some((DocumentType::Cnpj, "11222333000181")));
    }

    #[test]
    fn test_from_config_applies_policy() {
        let config = DomainConfig {
            document_switch: DocumentSwitch::ClearSibling,
        };
        let sender = SenderBuilder::from_config(&config)
            .with_cnpj("11222333000181")
            .with_document(DocumentType::Cpf, "12345678909")
            .build();

        assert_eq!(sender.cnpj(), None);
    }

    #[test]
    fn test_plain_setters_never_clear() {
        let sender = SenderBuilder::new()
            .with_document_switch(DocumentSwitch::ClearSibling)
            .with_cpf("12345678909")
            .with_cnpj("11222333000181")
            .build();

        assert!(sender.cpf().is_some());
        assert!(sender.cnpj().is_some());
    }

    #[test]
    fn test_phone_builder_is_resolved() {
        let sender = SenderBuilder::new()
            .with_phone(PhoneBuilder::new().with_area_code("11"))
            .build();

        let phone = sender.phone().unwrap();
        assert_eq!(phone.area_code(), Some("11"));
        assert_eq!(phone.number(), None);
    }
}
