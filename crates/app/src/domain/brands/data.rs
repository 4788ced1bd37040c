//! Brand Data

/// New Brand Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewBrand {
    /// Display name to persist.
    pub name: String,
}
