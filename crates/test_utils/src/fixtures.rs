//! Pre-built Test Fixtures
//!
//! Provides ready-to-use builders and values for the payment domain.
//! Fixtures return builders where tests usually tweak a field before
//! building.

use domain_common::{AddressBuilder, PhoneBuilder, SenderBuilder, Status};
use domain_preapproval::{RegisteredPreApproval, RegisteredPreApprovalBuilder};

/// Fixture for string test data
pub struct StringFixtures;

impl StringFixtures {
    pub fn email() -> &'static str {
        "comprador@sandbox.pagseguro.com.br"
    }

    pub fn name() -> &'static str {
        "Jose Comprador"
    }

    /// A CPF with valid check digits
    pub fn cpf() -> &'static str {
        "12345678909"
    }

    /// A CNPJ with valid check digits
    pub fn cnpj() -> &'static str {
        "11222333000181"
    }

    pub fn sender_hash() -> &'static str {
        "abc123fingerprint"
    }

    pub fn pre_approval_code() -> &'static str {
        "DC2DAC98FBFBDD1554493F94E85FAE05"
    }
}

/// Fixture for phone builders
pub struct PhoneFixtures;

impl PhoneFixtures {
    /// Sao Paulo mobile number
    pub fn mobile() -> PhoneBuilder {
        PhoneBuilder::new().with_area_code("11").with_number("987654321")
    }
}

/// Fixture for address builders
pub struct AddressFixtures;

impl AddressFixtures {
    /// Complete Sao Paulo address
    pub fn sao_paulo() -> AddressBuilder {
        AddressBuilder::new()
            .with_street("Av. Brigadeiro Faria Lima")
            .with_number("1384")
            .with_complement("5o andar")
            .with_district("Jardim Paulistano")
            .with_city("Sao Paulo")
            .with_state("SP")
            .with_country("BRA")
            .with_postal_code("01452002")
    }
}

/// Fixture for sender builders
pub struct SenderFixtures;

impl SenderFixtures {
    /// Individual buyer with every field populated
    pub fn individual() -> SenderBuilder {
        SenderBuilder::new()
            .with_name(StringFixtures::name())
            .with_email(StringFixtures::email())
            .with_phone(PhoneFixtures::mobile())
            .with_address(AddressFixtures::sao_paulo())
            .with_cpf(StringFixtures::cpf())
            .with_hash(StringFixtures::sender_hash())
    }

    /// Company buyer identified by CNPJ
    pub fn company() -> SenderBuilder {
        SenderBuilder::new()
            .with_name("Loja Exemplo Ltda")
            .with_email("financeiro@lojaexemplo.com.br")
            .with_cnpj(StringFixtures::cnpj())
    }
}

/// Fixture for gateway status codes
pub struct StatusFixtures;

impl StatusFixtures {
    /// Every recognized transaction code paired with its status and description
    pub fn transaction_table() -> Vec<(i32, Status, &'static str)> {
        vec![
            (0, Status::Initiated, "THE TRANSACTION HAS NOT BEEN COMPLETED"),
            (1, Status::WaitingPayment, "THE PAYMENT HAS NOT YET BEEN PROCESSED"),
            (2, Status::InAnalysis, "THE PAYMENT IS UNDER RISK REVIEW"),
            (3, Status::Paid, "THE TRANSACTION PAYMENT HAS BEEN CONFIRMED"),
            (
                4,
                Status::Available,
                "THE TRANSACTION AMOUNT IS AVAILABLE FOR APPLICATION TO WITHDRAW",
            ),
            (5, Status::InDispute, "THE TRANSACTION IS IN DISPUTE"),
            (6, Status::Refunded, "THE TRANSACTION AMOUNT WAS RETURNED TO BUYER"),
            (7, Status::Cancelled, "THE TRANSACTION HAS BEEN CANCELLED"),
            (
                8,
                Status::SellerChargeback,
                "THE PAYMENT WAS CONTESTED BY THE BUYER AND THE TRANSACTION AMOUNT PREVIOUSLY BLOCKED WAS DEBITED FROM YOUR BALANCE",
            ),
            (
                9,
                Status::Contestation,
                "THE PAYMENT WAS CONTESTED BY THE BUYER AND THE TRANSACTION AMOUNT WAS BLOCKED. YOU MUST CONTACT OUR CUSTOMER SERVICE",
            ),
        ]
    }

    /// Codes the gateway does not define
    pub fn unregistered_codes() -> Vec<i32> {
        vec![10, 42, -2, i32::MIN, i32::MAX]
    }
}

/// Fixture for pre-approval responses
pub struct PreApprovalFixtures;

impl PreApprovalFixtures {
    pub fn registered() -> RegisteredPreApproval {
        let code = StringFixtures::pre_approval_code();
        RegisteredPreApprovalBuilder::new()
            .with_pre_approval_code(code)
            .with_redirect_url(format!(
                "https://sandbox.pagseguro.uol.com.br/v2/pre-approvals/request.html?code={}",
                code
            ))
            .build()
    }
}
