//! Redemption Repositories

mod redemptions;
mod vouchers;

pub(crate) use redemptions::PgRedemptionsRepository;
pub(crate) use vouchers::PgRedemptionVouchersRepository;
