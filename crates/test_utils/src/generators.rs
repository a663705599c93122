//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating gateway codes and request
//! field values.

use core_kernel::CodedStatus;
use domain_common::{DocumentType, SenderBuilder, Status};
use proptest::prelude::*;
use proptest::sample::select;

/// Codes bound to a recognized transaction status
pub fn recognized_code_strategy() -> impl Strategy<Value = i32> {
    let codes: Vec<i32> = Status::ALL
        .iter()
        .filter(|status| status.is_recognized())
        .map(|status| status.code())
        .collect();
    select(codes)
}

/// Any code that no transaction status declares (sentinel excluded)
pub fn unrecognized_code_strategy() -> impl Strategy<Value = i32> {
    any::<i32>().prop_filter("code is declared by Status", |code| {
        Status::ALL.iter().all(|status| status.code() != *code)
    })
}

/// Known and unknown document discriminators
pub fn document_type_strategy() -> impl Strategy<Value = DocumentType> {
    prop_oneof![
        Just(DocumentType::Cpf),
        Just(DocumentType::Cnpj),
        "RG|PASSPORT|CNH|NIF".prop_map(|kind: String| DocumentType::from(kind)),
    ]
}

/// Digit strings shaped like CPF (11) or CNPJ (14) numbers
pub fn document_number_strategy() -> impl Strategy<Value = String> {
    prop_oneof!["[0-9]{11}", "[0-9]{14}"]
}

/// Strategy for generating email addresses
pub fn email_strategy() -> impl Strategy<Value = String> {
    "[a-z]{3,10}@[a-z]{3,8}\\.com\\.br"
}

/// Strategy for generating names
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,10} [A-Z][a-z]{2,10}"
}

/// Sender builders with an arbitrary subset of scalar fields set
pub fn sender_builder_strategy() -> impl Strategy<Value = SenderBuilder> {
    (
        proptest::option::of(email_strategy()),
        proptest::option::of(name_strategy()),
        proptest::option::of(document_number_strategy()),
        proptest::option::of(document_number_strategy()),
    )
        .prop_map(|(email, name, cpf, cnpj)| {
            let mut builder = SenderBuilder::new();
            if let Some(email) = email {
                builder = builder.with_email(email);
            }
            if let Some(name) = name {
                builder = builder.with_name(name);
            }
            if let Some(cpf) = cpf {
                builder = builder.with_cpf(cpf);
            }
            if let Some(cnpj) = cnpj {
                builder = builder.with_cnpj(cnpj);
            }
            builder
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn recognized_codes_resolve_to_themselves(code in recognized_code_strategy()) {
            prop_assert_eq!(Status::resolve(code).code(), code);
        }

        #[test]
        fn unrecognized_codes_are_not_declared(code in unrecognized_code_strategy()) {
            prop_assert!(code != -1);
            prop_assert!(!(0..=9).contains(&code));
        }

        #[test]
        fn document_numbers_are_digits(number in document_number_strategy()) {
            prop_assert!(number.chars().all(|c| c.is_ascii_digit()));
            prop_assert!(number.len() == 11 || number.len() == 14);
        }
    }
}
