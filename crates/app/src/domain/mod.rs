//! Voucher Catalog Domain Concerns

pub mod brands;
pub mod redemptions;
pub mod vouchers;
