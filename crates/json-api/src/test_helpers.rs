//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use vouchers_app::{
    context::AppContext,
    domain::{
        brands::{MockBrandsService, records::BrandRecord},
        redemptions::{MockRedemptionsService, records::RedemptionRecord},
        vouchers::{MockVouchersService, records::VoucherRecord},
    },
    ids::IdError,
};

use crate::state::State;

fn strict_brands_mock() -> MockBrandsService {
    let mut brands = MockBrandsService::new();

    brands.expect_create_brand().never();

    brands
}

fn strict_vouchers_mock() -> MockVouchersService {
    let mut vouchers = MockVouchersService::new();

    vouchers.expect_create_voucher().never();
    vouchers.expect_get_voucher().never();
    vouchers.expect_list_vouchers_by_brand().never();

    vouchers
}

fn strict_redemptions_mock() -> MockRedemptionsService {
    let mut redemptions = MockRedemptionsService::new();

    redemptions.expect_create_redemption().never();
    redemptions.expect_get_redemption().never();

    redemptions
}

fn service_with(app: AppContext, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(app)))
            .push(route),
    )
}

pub(crate) fn brands_service(brands: MockBrandsService, route: Router) -> Service {
    service_with(
        AppContext {
            brands: Arc::new(brands),
            vouchers: Arc::new(strict_vouchers_mock()),
            redemptions: Arc::new(strict_redemptions_mock()),
        },
        route,
    )
}

pub(crate) fn vouchers_service(vouchers: MockVouchersService, route: Router) -> Service {
    service_with(
        AppContext {
            brands: Arc::new(strict_brands_mock()),
            vouchers: Arc::new(vouchers),
            redemptions: Arc::new(strict_redemptions_mock()),
        },
        route,
    )
}

pub(crate) fn redemptions_service(redemptions: MockRedemptionsService, route: Router) -> Service {
    service_with(
        AppContext {
            brands: Arc::new(strict_brands_mock()),
            vouchers: Arc::new(strict_vouchers_mock()),
            redemptions: Arc::new(redemptions),
        },
        route,
    )
}

pub(crate) fn make_brand(id: u32, name: &str) -> Result<BrandRecord, IdError> {
    Ok(BrandRecord {
        id: id.try_into()?,
        name: name.to_string(),
        created_at: Timestamp::UNIX_EPOCH,
    })
}

pub(crate) fn make_voucher(
    id: u32,
    title: &str,
    cost_in_point: u32,
    brand: Option<BrandRecord>,
) -> Result<VoucherRecord, IdError> {
    Ok(VoucherRecord {
        id: id.try_into()?,
        title: title.to_string(),
        cost_in_point,
        brand_id: brand.as_ref().map(|brand| brand.id),
        brand,
        created_at: Timestamp::UNIX_EPOCH,
    })
}

pub(crate) fn make_redemption(
    id: u32,
    customer_name: &str,
    vouchers: Vec<VoucherRecord>,
) -> Result<RedemptionRecord, IdError> {
    Ok(RedemptionRecord {
        id: id.try_into()?,
        customer_name: customer_name.to_string(),
        total_points: vouchers.iter().map(|v| u64::from(v.cost_in_point)).sum(),
        vouchers,
        created_at: Timestamp::UNIX_EPOCH,
    })
}
