//! Test Helpers

use crate::{
    domain::{
        brands::{
            BrandsService, BrandsServiceError,
            data::NewBrand,
            records::{BrandId, BrandRecord},
        },
        vouchers::{
            VouchersService, VouchersServiceError, data::NewVoucher, records::VoucherRecord,
        },
    },
    test::TestContext,
};

pub(crate) async fn create_brand(
    ctx: &TestContext,
    name: &str,
) -> Result<BrandRecord, BrandsServiceError> {
    ctx.brands
        .create_brand(NewBrand {
            name: name.to_string(),
        })
        .await
}

pub(crate) async fn create_voucher(
    ctx: &TestContext,
    title: &str,
    cost_in_point: u32,
    brand_id: Option<BrandId>,
) -> Result<VoucherRecord, VouchersServiceError> {
    ctx.vouchers
        .create_voucher(NewVoucher {
            title: title.to_string(),
            cost_in_point,
            brand_id,
        })
        .await
}
