//! Transaction status reported by the gateway
//!
//! The gateway returns the state of a transaction as an integer. `Status` is
//! the closed set of known states; `TransactionStatus` keeps the raw code of
//! one response and classifies it on demand. Codes outside the table resolve
//! to `Status::Unrecognized` and callers are expected to handle that case
//! explicitly.

use core_kernel::StatusCode;

core_kernel::define_status! {
    /// Known transaction states
    pub enum Status {
        /// Checkout started, transaction not completed
        Initiated = 0, "INITIATED" => "THE TRANSACTION HAS NOT BEEN COMPLETED",
        WaitingPayment = 1, "WAITING_PAYMENT" => "THE PAYMENT HAS NOT YET BEEN PROCESSED",
        /// Under the gateway's risk review
        InAnalysis = 2, "IN_ANALYSIS" => "THE PAYMENT IS UNDER RISK REVIEW",
        Paid = 3, "PAID" => "THE TRANSACTION PAYMENT HAS BEEN CONFIRMED",
        /// Funds released to the merchant balance
        Available = 4, "AVAILABLE" => "THE TRANSACTION AMOUNT IS AVAILABLE FOR APPLICATION TO WITHDRAW",
        InDispute = 5, "IN_DISPUTE" => "THE TRANSACTION IS IN DISPUTE",
        Refunded = 6, "REFUNDED" => "THE TRANSACTION AMOUNT WAS RETURNED TO BUYER",
        Cancelled = 7, "CANCELLED" => "THE TRANSACTION HAS BEEN CANCELLED",
        SellerChargeback = 8, "SELLER_CHARGEBACK" => "THE PAYMENT WAS CONTESTED BY THE BUYER AND THE TRANSACTION AMOUNT PREVIOUSLY BLOCKED WAS DEBITED FROM YOUR BALANCE",
        Contestation = 9, "CONTESTATION" => "THE PAYMENT WAS CONTESTED BY THE BUYER AND THE TRANSACTION AMOUNT WAS BLOCKED. YOU MUST CONTACT OUR CUSTOMER SERVICE",
        /// Any code not listed above
        Unrecognized = -1, "UNRECOGNIZED" => "UNKNOWN STATUS. SEE ONLINE DOCUMENTATION",
    }
    fallback Unrecognized;
}

/// Raw transaction status code from a gateway response
pub type TransactionStatus = StatusCode<Status>;
