//! Redemption Data

use crate::domain::vouchers::records::VoucherId;

/// New Redemption Data
///
/// Carries voucher ids only; point costs are always read from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRedemption {
    /// Customer redeeming the vouchers.
    pub customer_name: String,

    /// Vouchers to redeem. May be empty; must not repeat.
    pub voucher_ids: Vec<VoucherId>,
}
