//! Redemptions Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::{
    database::{try_get_amount, try_get_id},
    domain::redemptions::records::{RedemptionId, RedemptionRecord},
};

const CREATE_REDEMPTION_SQL: &str = include_str!("../sql/create_redemption.sql");
const GET_REDEMPTION_SQL: &str = include_str!("../sql/get_redemption.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgRedemptionsRepository;

impl PgRedemptionsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_redemption(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer_name: &str,
        total_points: i64,
    ) -> Result<RedemptionRecord, sqlx::Error> {
        query_as::<Postgres, RedemptionRecord>(CREATE_REDEMPTION_SQL)
            .bind(customer_name)
            .bind(total_points)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_redemption(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        redemption: RedemptionId,
    ) -> Result<RedemptionRecord, sqlx::Error> {
        query_as::<Postgres, RedemptionRecord>(GET_REDEMPTION_SQL)
            .bind(redemption.into_i32())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for RedemptionRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: try_get_id(row, "id")?,
            customer_name: row.try_get("customer_name")?,
            total_points: try_get_amount::<i64, u64>(row, "total_points")?,
            vouchers: Vec::new(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
