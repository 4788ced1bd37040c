//! Vouchers service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::{
        brands::records::BrandId,
        vouchers::{
            data::NewVoucher,
            errors::VouchersServiceError,
            records::{VoucherId, VoucherRecord},
            repository::PgVouchersRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgVouchersService {
    db: Db,
    repository: PgVouchersRepository,
}

impl PgVouchersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgVouchersRepository::new(),
        }
    }
}

#[async_trait]
impl VouchersService for PgVouchersService {
    async fn create_voucher(
        &self,
        voucher: NewVoucher,
    ) -> Result<VoucherRecord, VouchersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let created = self.repository.create_voucher(&mut tx, voucher).await?;

        tx.commit().await?;

        debug!(voucher_id = %created.id, "voucher created");

        Ok(created)
    }

    async fn get_voucher(&self, voucher: VoucherId) -> Result<VoucherRecord, VouchersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let voucher = self.repository.get_voucher(&mut tx, voucher).await?;

        tx.commit().await?;

        Ok(voucher)
    }

    async fn list_vouchers_by_brand(
        &self,
        brand: BrandId,
    ) -> Result<Vec<VoucherRecord>, VouchersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let vouchers = self
            .repository
            .list_vouchers_by_brand(&mut tx, brand)
            .await?;

        tx.commit().await?;

        Ok(vouchers)
    }
}

#[automock]
#[async_trait]
pub trait VouchersService: Send + Sync {
    /// Creates a new voucher, optionally owned by an existing brand.
    async fn create_voucher(
        &self,
        voucher: NewVoucher,
    ) -> Result<VoucherRecord, VouchersServiceError>;

    /// Retrieve a single voucher with its brand.
    async fn get_voucher(&self, voucher: VoucherId) -> Result<VoucherRecord, VouchersServiceError>;

    /// Retrieves every voucher owned by the given brand, ordered by id.
    async fn list_vouchers_by_brand(
        &self,
        brand: BrandId,
    ) -> Result<Vec<VoucherRecord>, VouchersServiceError>;
}
