//! Voucher Data

use crate::domain::brands::records::BrandId;

/// New Voucher Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewVoucher {
    /// Display title to persist.
    pub title: String,

    /// Point price of redeeming the voucher.
    pub cost_in_point: u32,

    /// Owning brand, if any.
    pub brand_id: Option<BrandId>,
}
