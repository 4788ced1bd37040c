//! Redemptions service.

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use crate::{
    database::Db,
    domain::{
        redemptions::{
            data::NewRedemption,
            errors::RedemptionsServiceError,
            records::{RedemptionId, RedemptionRecord},
            repositories::{PgRedemptionVouchersRepository, PgRedemptionsRepository},
        },
        vouchers::records::{VoucherId, VoucherRecord},
    },
};

#[derive(Debug, Clone)]
pub struct PgRedemptionsService {
    db: Db,
    redemptions_repository: PgRedemptionsRepository,
    vouchers_repository: PgRedemptionVouchersRepository,
}

impl PgRedemptionsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            redemptions_repository: PgRedemptionsRepository::new(),
            vouchers_repository: PgRedemptionVouchersRepository::new(),
        }
    }
}

#[async_trait]
impl RedemptionsService for PgRedemptionsService {
    async fn create_redemption(
        &self,
        redemption: NewRedemption,
    ) -> Result<RedemptionRecord, RedemptionsServiceError> {
        if has_duplicates(&redemption.voucher_ids) {
            return Err(RedemptionsServiceError::InvalidData);
        }

        let mut tx = self.db.begin_transaction().await?;

        let vouchers = self
            .vouchers_repository
            .lock_vouchers(&mut tx, &redemption.voucher_ids)
            .await?;

        let missing = missing_vouchers(&redemption.voucher_ids, &vouchers);

        if !missing.is_empty() {
            warn!(?missing, "redemption references unknown vouchers");

            return Err(RedemptionsServiceError::InvalidReference);
        }

        let total_points = i64::try_from(total_points(&vouchers))?;

        let mut created = self
            .redemptions_repository
            .create_redemption(&mut tx, &redemption.customer_name, total_points)
            .await?;

        self.vouchers_repository
            .attach_vouchers(&mut tx, created.id, &redemption.voucher_ids)
            .await?;

        tx.commit().await?;

        debug!(
            redemption_id = %created.id,
            total_points = created.total_points,
            voucher_count = vouchers.len(),
            "redemption created"
        );

        created.vouchers = vouchers;

        Ok(created)
    }

    async fn get_redemption(
        &self,
        redemption: RedemptionId,
    ) -> Result<RedemptionRecord, RedemptionsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let mut record = self
            .redemptions_repository
            .get_redemption(&mut tx, redemption)
            .await?;

        let vouchers = self
            .vouchers_repository
            .get_redemption_vouchers(&mut tx, redemption)
            .await?;

        tx.commit().await?;

        record.vouchers = vouchers;

        Ok(record)
    }
}

#[automock]
#[async_trait]
pub trait RedemptionsService: Send + Sync {
    /// Records a redemption of existing vouchers, pricing it from stored costs.
    ///
    /// The redemption row and every voucher association are written in one
    /// transaction.
    async fn create_redemption(
        &self,
        redemption: NewRedemption,
    ) -> Result<RedemptionRecord, RedemptionsServiceError>;

    /// Retrieve a single redemption with its vouchers.
    async fn get_redemption(
        &self,
        redemption: RedemptionId,
    ) -> Result<RedemptionRecord, RedemptionsServiceError>;
}

fn total_points(vouchers: &[VoucherRecord]) -> u64 {
    vouchers.iter().map(|v| u64::from(v.cost_in_point)).sum()
}

fn has_duplicates(voucher_ids: &[VoucherId]) -> bool {
    let mut seen = FxHashSet::default();

    !voucher_ids.iter().all(|id| seen.insert(*id))
}

fn missing_vouchers(requested: &[VoucherId], found: &[VoucherRecord]) -> Vec<VoucherId> {
    let found: FxHashSet<VoucherId> = found.iter().map(|v| v.id).collect();

    requested
        .iter()
        .copied()
        .filter(|id| !found.contains(id))
        .collect()
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use testresult::TestResult;

    use crate::{
        domain::{brands::records::BrandId, vouchers::records::VoucherRecord},
        test::{
            TestContext,
            helpers::{create_brand, create_voucher},
        },
    };

    use super::*;

    fn voucher(id: u32, cost_in_point: u32) -> Result<VoucherRecord, crate::ids::IdError> {
        Ok(VoucherRecord {
            id: VoucherId::try_from(id)?,
            title: format!("Voucher {id}"),
            cost_in_point,
            brand_id: None::<BrandId>,
            brand: None,
            created_at: Timestamp::UNIX_EPOCH,
        })
    }

    #[test]
    fn total_points_sums_costs() -> TestResult {
        let vouchers = [voucher(1, 100)?, voucher(2, 50)?];

        assert_eq!(total_points(&vouchers), 150);
        assert_eq!(total_points(&[]), 0);

        Ok(())
    }

    #[test]
    fn total_points_does_not_overflow_u32() -> TestResult {
        let vouchers = [voucher(1, u32::MAX)?, voucher(2, u32::MAX)?];

        assert_eq!(total_points(&vouchers), 2 * u64::from(u32::MAX));

        Ok(())
    }

    #[test]
    fn has_duplicates_detects_repeats() -> TestResult {
        let one = VoucherId::try_from(1_u32)?;
        let two = VoucherId::try_from(2_u32)?;

        assert!(!has_duplicates(&[]));
        assert!(!has_duplicates(&[one, two]));
        assert!(has_duplicates(&[one, two, one]));

        Ok(())
    }

    #[test]
    fn missing_vouchers_preserves_request_order() -> TestResult {
        let found = [voucher(2, 10)?];
        let requested = [
            VoucherId::try_from(3_u32)?,
            VoucherId::try_from(2_u32)?,
            VoucherId::try_from(1_u32)?,
        ];

        let missing: Vec<u32> = missing_vouchers(&requested, &found)
            .into_iter()
            .map(u32::from)
            .collect();

        assert_eq!(missing, vec![3, 1]);

        Ok(())
    }

    #[tokio::test]
    async fn create_redemption_totals_stored_costs() -> TestResult {
        let ctx = TestContext::new().await;
        let brand = create_brand(&ctx, "Acme").await?;
        let ten_off = create_voucher(&ctx, "10% Off", 100, Some(brand.id)).await?;
        let shipping = create_voucher(&ctx, "Free Shipping", 50, Some(brand.id)).await?;

        let redemption = ctx
            .redemptions
            .create_redemption(NewRedemption {
                customer_name: "Jane".to_string(),
                voucher_ids: vec![ten_off.id, shipping.id],
            })
            .await?;

        assert_eq!(redemption.customer_name, "Jane");
        assert_eq!(redemption.total_points, 150);
        assert_eq!(redemption.vouchers, vec![ten_off, shipping]);

        Ok(())
    }

    #[tokio::test]
    async fn get_redemption_returns_created_redemption_with_vouchers() -> TestResult {
        let ctx = TestContext::new().await;
        let brand = create_brand(&ctx, "Acme").await?;
        let ten_off = create_voucher(&ctx, "10% Off", 100, Some(brand.id)).await?;
        let shipping = create_voucher(&ctx, "Free Shipping", 50, Some(brand.id)).await?;

        let created = ctx
            .redemptions
            .create_redemption(NewRedemption {
                customer_name: "Jane".to_string(),
                voucher_ids: vec![shipping.id, ten_off.id],
            })
            .await?;

        let fetched = ctx.redemptions.get_redemption(created.id).await?;

        assert_eq!(fetched, created);
        assert_eq!(fetched.vouchers.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn create_redemption_without_vouchers_totals_zero() -> TestResult {
        let ctx = TestContext::new().await;

        let redemption = ctx
            .redemptions
            .create_redemption(NewRedemption {
                customer_name: "Nobody".to_string(),
                voucher_ids: vec![],
            })
            .await?;

        assert_eq!(redemption.total_points, 0);
        assert!(redemption.vouchers.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn create_redemption_unknown_voucher_persists_nothing() -> TestResult {
        let ctx = TestContext::new().await;
        let known = create_voucher(&ctx, "Known", 10, None).await?;

        let result = ctx
            .redemptions
            .create_redemption(NewRedemption {
                customer_name: "Jane".to_string(),
                voucher_ids: vec![known.id, VoucherId::try_from(77_u32)?],
            })
            .await;

        assert!(
            matches!(result, Err(RedemptionsServiceError::InvalidReference)),
            "expected InvalidReference, got {result:?}"
        );

        let redemptions: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM redemptions")
            .fetch_one(ctx.db.pool())
            .await?;

        let associations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM redemption_vouchers")
            .fetch_one(ctx.db.pool())
            .await?;

        assert_eq!(redemptions, 0, "no redemption row should be written");
        assert_eq!(associations, 0, "no association rows should be written");

        Ok(())
    }

    #[tokio::test]
    async fn create_redemption_duplicate_vouchers_returns_invalid_data() -> TestResult {
        let ctx = TestContext::new().await;
        let known = create_voucher(&ctx, "Known", 10, None).await?;

        let result = ctx
            .redemptions
            .create_redemption(NewRedemption {
                customer_name: "Jane".to_string(),
                voucher_ids: vec![known.id, known.id],
            })
            .await;

        assert!(
            matches!(result, Err(RedemptionsServiceError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn redemption_total_is_a_snapshot() -> TestResult {
        let ctx = TestContext::new().await;
        let voucher = create_voucher(&ctx, "Repriced", 40, None).await?;

        let created = ctx
            .redemptions
            .create_redemption(NewRedemption {
                customer_name: "Jane".to_string(),
                voucher_ids: vec![voucher.id],
            })
            .await?;

        sqlx::query("UPDATE vouchers SET cost_in_point = 400 WHERE id = $1")
            .bind(voucher.id.into_i32())
            .execute(ctx.db.pool())
            .await?;

        let fetched = ctx.redemptions.get_redemption(created.id).await?;

        assert_eq!(fetched.total_points, 40);

        Ok(())
    }

    #[tokio::test]
    async fn vouchers_can_appear_in_many_redemptions() -> TestResult {
        let ctx = TestContext::new().await;
        let voucher = create_voucher(&ctx, "Popular", 25, None).await?;

        for customer in ["Jane", "John"] {
            let redemption = ctx
                .redemptions
                .create_redemption(NewRedemption {
                    customer_name: customer.to_string(),
                    voucher_ids: vec![voucher.id],
                })
                .await?;

            assert_eq!(redemption.total_points, 25);
        }

        Ok(())
    }

    #[tokio::test]
    async fn get_redemption_unknown_id_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        let result = ctx
            .redemptions
            .get_redemption(RedemptionId::try_from(1_u32)?)
            .await;

        assert!(
            matches!(result, Err(RedemptionsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }
}
