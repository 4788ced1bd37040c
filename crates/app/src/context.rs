//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;
use tracing::info;

use crate::{
    database::{self, Db},
    domain::{
        brands::{BrandsService, PgBrandsService},
        redemptions::{PgRedemptionsService, RedemptionsService},
        vouchers::{PgVouchersService, VouchersService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrate(#[source] MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub brands: Arc<dyn BrandsService>,
    pub vouchers: Arc<dyn VouchersService>,
    pub redemptions: Arc<dyn RedemptionsService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// When `run_migrations` is set the bundled migrations are applied before
    /// any service is handed out.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or applying
    /// migrations fails.
    pub async fn from_database_url(url: &str, run_migrations: bool) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        if run_migrations {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migrate)?;

            info!("database migrations applied");
        }

        Ok(Self::from_db(Db::new(pool)))
    }

    #[must_use]
    pub fn from_db(db: Db) -> Self {
        Self {
            brands: Arc::new(PgBrandsService::new(db.clone())),
            vouchers: Arc::new(PgVouchersService::new(db.clone())),
            redemptions: Arc::new(PgRedemptionsService::new(db)),
        }
    }
}
