//! Redemption Records

use jiff::Timestamp;

use crate::{domain::vouchers::records::VoucherRecord, ids::TypedId};

/// Redemption Id
pub type RedemptionId = TypedId<RedemptionRecord>;

/// Redemption Record
#[derive(Debug, Clone, PartialEq)]
pub struct RedemptionRecord {
    pub id: RedemptionId,
    pub customer_name: String,

    /// Sum of the vouchers' point costs when the redemption was recorded.
    pub total_points: u64,

    /// Redeemed vouchers, ordered by id.
    pub vouchers: Vec<VoucherRecord>,

    pub created_at: Timestamp,
}
