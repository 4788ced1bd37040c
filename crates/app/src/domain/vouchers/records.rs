//! Voucher Records

use jiff::Timestamp;

use crate::{
    domain::brands::records::{BrandId, BrandRecord},
    ids::TypedId,
};

/// Voucher Id
pub type VoucherId = TypedId<VoucherRecord>;

/// Voucher Record
///
/// `brand` is joined on every read and is `None` exactly when `brand_id` is.
#[derive(Debug, Clone, PartialEq)]
pub struct VoucherRecord {
    pub id: VoucherId,
    pub title: String,
    pub cost_in_point: u32,
    pub brand_id: Option<BrandId>,
    pub brand: Option<BrandRecord>,
    pub created_at: Timestamp,
}
