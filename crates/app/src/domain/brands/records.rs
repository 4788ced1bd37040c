//! Brand Records

use jiff::Timestamp;

use crate::ids::TypedId;

/// Brand Id
pub type BrandId = TypedId<BrandRecord>;

/// Brand Record
#[derive(Debug, Clone, PartialEq)]
pub struct BrandRecord {
    /// Store-generated identifier.
    pub id: BrandId,

    /// Human-readable brand name.
    pub name: String,

    /// Creation timestamp.
    pub created_at: Timestamp,
}
