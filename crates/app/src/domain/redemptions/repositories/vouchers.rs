//! Redemption Vouchers Repository

use sqlx::{Postgres, Transaction, query, query_as};

use crate::domain::{
    redemptions::records::RedemptionId,
    vouchers::records::{VoucherId, VoucherRecord},
};

const LOCK_VOUCHERS_SQL: &str = include_str!("../sql/lock_vouchers.sql");
const ATTACH_VOUCHERS_SQL: &str = include_str!("../sql/attach_vouchers.sql");
const GET_REDEMPTION_VOUCHERS_SQL: &str = include_str!("../sql/get_redemption_vouchers.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgRedemptionVouchersRepository;

impl PgRedemptionVouchersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Load the given vouchers, holding a share lock until the transaction ends.
    ///
    /// Unknown ids are simply absent from the result.
    pub(crate) async fn lock_vouchers(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        vouchers: &[VoucherId],
    ) -> Result<Vec<VoucherRecord>, sqlx::Error> {
        query_as::<Postgres, VoucherRecord>(LOCK_VOUCHERS_SQL)
            .bind(to_i32s(vouchers))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn attach_vouchers(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        redemption: RedemptionId,
        vouchers: &[VoucherId],
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(ATTACH_VOUCHERS_SQL)
            .bind(redemption.into_i32())
            .bind(to_i32s(vouchers))
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn get_redemption_vouchers(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        redemption: RedemptionId,
    ) -> Result<Vec<VoucherRecord>, sqlx::Error> {
        query_as::<Postgres, VoucherRecord>(GET_REDEMPTION_VOUCHERS_SQL)
            .bind(redemption.into_i32())
            .fetch_all(&mut **tx)
            .await
    }
}

fn to_i32s(vouchers: &[VoucherId]) -> Vec<i32> {
    vouchers.iter().copied().map(VoucherId::into_i32).collect()
}
