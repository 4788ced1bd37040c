//! Vouchers Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::{
    database::{try_get_amount, try_get_id, try_get_optional_id},
    domain::{
        brands::records::{BrandId, BrandRecord},
        vouchers::{
            data::NewVoucher,
            records::{VoucherId, VoucherRecord},
        },
    },
};

const CREATE_VOUCHER_SQL: &str = include_str!("sql/create_voucher.sql");
const GET_VOUCHER_SQL: &str = include_str!("sql/get_voucher.sql");
const LIST_VOUCHERS_BY_BRAND_SQL: &str = include_str!("sql/list_vouchers_by_brand.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgVouchersRepository;

impl PgVouchersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_voucher(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        voucher: NewVoucher,
    ) -> Result<VoucherRecord, sqlx::Error> {
        let cost_in_point = i32::try_from(voucher.cost_in_point).map_err(|e| {
            sqlx::Error::ColumnDecode {
                index: "cost_in_point".to_string(),
                source: Box::new(e),
            }
        })?;

        query_as::<Postgres, VoucherRecord>(CREATE_VOUCHER_SQL)
            .bind(voucher.title)
            .bind(cost_in_point)
            .bind(voucher.brand_id.map(BrandId::into_i32))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_voucher(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        voucher: VoucherId,
    ) -> Result<VoucherRecord, sqlx::Error> {
        query_as::<Postgres, VoucherRecord>(GET_VOUCHER_SQL)
            .bind(voucher.into_i32())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_vouchers_by_brand(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        brand: BrandId,
    ) -> Result<Vec<VoucherRecord>, sqlx::Error> {
        query_as::<Postgres, VoucherRecord>(LIST_VOUCHERS_BY_BRAND_SQL)
            .bind(brand.into_i32())
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for VoucherRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let brand_id = try_get_optional_id(row, "brand_id")?;

        let brand_name: Option<String> = row.try_get("brand_name")?;
        let brand_created_at: Option<SqlxTimestamp> = row.try_get("brand_created_at")?;

        let brand = match (brand_id, brand_name, brand_created_at) {
            (Some(id), Some(name), Some(created_at)) => Some(BrandRecord {
                id,
                name,
                created_at: created_at.to_jiff(),
            }),
            _ => None,
        };

        Ok(Self {
            id: try_get_id(row, "id")?,
            title: row.try_get("title")?,
            cost_in_point: try_get_amount::<i32, u32>(row, "cost_in_point")?,
            brand_id,
            brand,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
