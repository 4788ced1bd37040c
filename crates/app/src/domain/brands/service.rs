//! Brands service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::brands::{
        data::NewBrand, errors::BrandsServiceError, records::BrandRecord,
        repository::PgBrandsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgBrandsService {
    db: Db,
    repository: PgBrandsRepository,
}

impl PgBrandsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgBrandsRepository::new(),
        }
    }
}

#[async_trait]
impl BrandsService for PgBrandsService {
    async fn create_brand(&self, brand: NewBrand) -> Result<BrandRecord, BrandsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let created = self.repository.create_brand(&mut tx, brand).await?;

        tx.commit().await?;

        debug!(brand_id = %created.id, "brand created");

        Ok(created)
    }
}

#[automock]
#[async_trait]
/// Brand persistence operations.
pub trait BrandsService: Send + Sync {
    /// Creates a new brand and returns it with its generated id.
    async fn create_brand(&self, brand: NewBrand) -> Result<BrandRecord, BrandsServiceError>;
}
