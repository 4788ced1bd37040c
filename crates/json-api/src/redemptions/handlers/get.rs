//! Get Redemption Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use vouchers_app::domain::redemptions::records::{RedemptionId, RedemptionRecord};

use crate::{
    extensions::*, redemptions::errors::into_status_error, state::State,
    vouchers::get::VoucherResponse,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RedemptionResponse {
    /// The store-generated redemption id
    pub id: u32,

    /// Name of the redeeming customer
    pub customer_name: String,

    /// Sum of the redeemed vouchers' point costs
    pub total_points: u64,

    /// Redeemed vouchers, ordered by id
    pub vouchers: Vec<VoucherResponse>,

    /// The date and time the redemption was recorded
    pub created_at: String,
}

impl From<RedemptionRecord> for RedemptionResponse {
    fn from(redemption: RedemptionRecord) -> Self {
        RedemptionResponse {
            id: redemption.id.into(),
            customer_name: redemption.customer_name,
            total_points: redemption.total_points,
            vouchers: redemption.vouchers.into_iter().map(Into::into).collect(),
            created_at: redemption.created_at.to_string(),
        }
    }
}

/// Get Redemption Handler
///
/// Returns a redemption and its vouchers, selected by the `transactionId`
/// query parameter.
#[endpoint(
    tags("redemptions"),
    summary = "Get Redemption",
    responses(
        (status_code = StatusCode::OK, description = "Redemption found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing or invalid transactionId"),
        (status_code = StatusCode::NOT_FOUND, description = "Redemption not found"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<RedemptionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let redemption: RedemptionId = req.id_query("transactionId")?;

    let redemption = state
        .app
        .redemptions
        .get_redemption(redemption)
        .await
        .map_err(into_status_error)?;

    Ok(Json(redemption.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use vouchers_app::domain::redemptions::{MockRedemptionsService, RedemptionsServiceError};

    use crate::test_helpers::{make_brand, make_redemption, make_voucher, redemptions_service};

    use super::*;

    fn make_service(redemptions: MockRedemptionsService) -> Service {
        redemptions_service(
            redemptions,
            Router::with_path("transaction/redemption").get(handler),
        )
    }

    #[tokio::test]
    async fn test_get_returns_redemption_with_vouchers() -> TestResult {
        let brand = make_brand(1, "Acme")?;
        let redemption = make_redemption(
            1,
            "Jane",
            vec![
                make_voucher(1, "10% Off", 100, Some(brand.clone()))?,
                make_voucher(2, "Free Shipping", 50, Some(brand))?,
            ],
        )?;

        let mut redemptions = MockRedemptionsService::new();

        redemptions
            .expect_get_redemption()
            .once()
            .withf(|id| u32::from(*id) == 1)
            .return_once(move |_| Ok(redemption));

        redemptions.expect_create_redemption().never();

        let mut res = TestClient::get("http://example.com/transaction/redemption?transactionId=1")
            .send(&make_service(redemptions))
            .await;

        let body: RedemptionResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.id, 1);
        assert_eq!(body.customer_name, "Jane");
        assert_eq!(body.total_points, 150);
        assert_eq!(body.vouchers.iter().map(|v| v.id).collect::<Vec<_>>(), vec![1, 2]);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_redemption_returns_404() -> TestResult {
        let mut redemptions = MockRedemptionsService::new();

        redemptions
            .expect_get_redemption()
            .once()
            .return_once(|_| Err(RedemptionsServiceError::NotFound));

        redemptions.expect_create_redemption().never();

        let res = TestClient::get("http://example.com/transaction/redemption?transactionId=404")
            .send(&make_service(redemptions))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_requires_transaction_id() -> TestResult {
        for uri in [
            "http://example.com/transaction/redemption",
            "http://example.com/transaction/redemption?id=1",
            "http://example.com/transaction/redemption?transactionId=one",
        ] {
            let mut redemptions = MockRedemptionsService::new();

            redemptions.expect_get_redemption().never();
            redemptions.expect_create_redemption().never();

            let res = TestClient::get(uri).send(&make_service(redemptions)).await;

            assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST), "{uri}");
        }

        Ok(())
    }
}
