//! Tests for transaction status classification

use proptest::prelude::*;

use core_kernel::CodedStatus;
use domain_common::{Status, TransactionStatus};
use test_utils::{
    assert_status, assert_unrecognized, init_tracing, recognized_code_strategy,
    unrecognized_code_strategy, StatusFixtures,
};

mod resolution {
    use super::*;

    #[test]
    fn test_every_recognized_code() {
        for (code, expected, description) in StatusFixtures::transaction_table() {
            let reported = TransactionStatus::new(code);
            assert_status(&reported, expected);
            assert_eq!(reported.status().description(), description);
        }
    }

    #[test]
    fn test_paid() {
        let status = Status::resolve(3);

        assert_eq!(status, Status::Paid);
        assert_eq!(status.name(), "PAID");
        assert_eq!(status.code(), 3);
        assert_eq!(status.description(), "THE TRANSACTION PAYMENT HAS BEEN CONFIRMED");
    }

    #[test]
    fn test_unregistered_code_42() {
        init_tracing();
        let status = Status::resolve(42);

        assert_eq!(status, Status::Unrecognized);
        assert_eq!(status.code(), -1);
        assert_eq!(status.description(), "UNKNOWN STATUS. SEE ONLINE DOCUMENTATION");
    }

    #[test]
    fn test_unregistered_fixture_codes() {
        for code in StatusFixtures::unregistered_codes() {
            let reported = TransactionStatus::new(code);
            assert_unrecognized(&reported);
            assert_eq!(reported.code(), code);
        }
    }

    #[test]
    fn test_sentinel_maps_to_fallback() {
        assert_eq!(Status::resolve(-1), Status::FALLBACK);
    }

    #[test]
    fn test_table_covers_every_recognized_member() {
        let recognized = Status::ALL.iter().filter(|s| s.is_recognized()).count();
        assert_eq!(recognized, StatusFixtures::transaction_table().len());
    }
}

mod wrapper {
    use super::*;

    #[test]
    fn test_idempotent_resolution() {
        let first = TransactionStatus::new(7);
        let second = TransactionStatus::new(7);

        assert_eq!(first, second);
        assert_eq!(first.status(), second.status());
        assert_eq!(first.status().name(), second.status().name());
        assert_eq!(first.status().description(), second.status().description());
    }

    #[test]
    fn test_display() {
        assert_eq!(TransactionStatus::new(3).to_string(), "PAID (3)");
        assert_eq!(TransactionStatus::new(42).to_string(), "UNRECOGNIZED (42)");
    }

    #[test]
    fn test_from_i32() {
        let reported: TransactionStatus = 5.into();
        assert_eq!(reported.status(), Status::InDispute);
    }

    #[test]
    fn test_serialize_status_and_wrapper() {
        assert_eq!(
            serde_json::to_string(&Status::SellerChargeback).unwrap(),
            "\"SELLER_CHARGEBACK\""
        );
        assert_eq!(serde_json::to_string(&TransactionStatus::new(42)).unwrap(), "42");
    }

    #[test]
    fn test_parse_status_name() {
        assert_eq!("waiting_payment".parse::<Status>().unwrap(), Status::WaitingPayment);
        assert!("SETTLED".parse::<Status>().is_err());
    }
}

proptest! {
    #[test]
    fn prop_recognized_codes_resolve_uniquely(code in recognized_code_strategy()) {
        let status = Status::resolve(code);
        prop_assert!(status.is_recognized());
        prop_assert_eq!(status.code(), code);
        let matches = Status::ALL.iter().filter(|s| s.code() == code).count();
        prop_assert_eq!(matches, 1);
    }

    #[test]
    fn prop_unrecognized_codes_fall_back(code in unrecognized_code_strategy()) {
        prop_assert_eq!(Status::resolve(code), Status::Unrecognized);
        prop_assert_eq!(TransactionStatus::new(code).code(), code);
    }

    #[test]
    fn prop_resolution_is_idempotent(code in any::<i32>()) {
        let first = TransactionStatus::new(code).status();
        let second = TransactionStatus::new(code).status();
        prop_assert_eq!(first, second);
        prop_assert_eq!(first.description(), second.description());
    }
}
