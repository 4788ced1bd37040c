//! App Router

use salvo::Router;

use crate::{brands, redemptions, vouchers};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("brand").post(brands::create::handler))
        .push(
            Router::with_path("voucher")
                .get(vouchers::get::handler)
                .post(vouchers::create::handler)
                .push(Router::with_path("brand").get(vouchers::by_brand::handler)),
        )
        .push(
            Router::with_path("transaction/redemption")
                .get(redemptions::get::handler)
                .post(redemptions::create::handler),
        )
}

#[cfg(test)]
mod tests {
    use salvo::{http::StatusCode, test::TestClient};
    use testresult::TestResult;

    use vouchers_app::domain::vouchers::MockVouchersService;

    use crate::test_helpers::{make_voucher, vouchers_service};

    use super::app_router;

    #[tokio::test]
    async fn voucher_brand_path_routes_to_listing() -> TestResult {
        let mut vouchers = MockVouchersService::new();

        vouchers
            .expect_list_vouchers_by_brand()
            .once()
            .return_once(|_| Ok(Vec::new()));

        vouchers.expect_get_voucher().never();
        vouchers.expect_create_voucher().never();

        let res = TestClient::get("http://example.com/voucher/brand?id=1")
            .send(&vouchers_service(vouchers, app_router()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn voucher_path_routes_to_single_lookup() -> TestResult {
        let voucher = make_voucher(1, "10% Off", 100, None)?;

        let mut vouchers = MockVouchersService::new();

        vouchers
            .expect_get_voucher()
            .once()
            .return_once(move |_| Ok(voucher));

        vouchers.expect_list_vouchers_by_brand().never();
        vouchers.expect_create_voucher().never();

        let res = TestClient::get("http://example.com/voucher?id=1")
            .send(&vouchers_service(vouchers, app_router()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn unknown_path_returns_404() -> TestResult {
        let mut vouchers = MockVouchersService::new();

        vouchers.expect_get_voucher().never();
        vouchers.expect_list_vouchers_by_brand().never();
        vouchers.expect_create_voucher().never();

        let res = TestClient::get("http://example.com/vouchers")
            .send(&vouchers_service(vouchers, app_router()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
