//! Get Voucher Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use vouchers_app::domain::vouchers::records::{VoucherId, VoucherRecord};

use crate::{
    brands::create::BrandResponse, extensions::*, state::State,
    vouchers::errors::into_status_error,
};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct VoucherResponse {
    /// The store-generated voucher id
    pub id: u32,

    /// Display title of the voucher
    pub title: String,

    /// Points needed to redeem the voucher
    pub cost_in_point: u32,

    /// Owning brand id, if any
    pub brand_id: Option<u32>,

    /// Owning brand, if any
    pub brand: Option<BrandResponse>,

    /// The date and time the voucher was created
    pub created_at: String,
}

impl From<VoucherRecord> for VoucherResponse {
    fn from(voucher: VoucherRecord) -> Self {
        VoucherResponse {
            id: voucher.id.into(),
            title: voucher.title,
            cost_in_point: voucher.cost_in_point,
            brand_id: voucher.brand_id.map(u32::from),
            brand: voucher.brand.map(Into::into),
            created_at: voucher.created_at.to_string(),
        }
    }
}

/// Get Voucher Handler
///
/// Returns a single voucher, with its brand, selected by the `id` query parameter.
#[endpoint(
    tags("vouchers"),
    summary = "Get Voucher",
    responses(
        (status_code = StatusCode::OK, description = "Voucher found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing or invalid id"),
        (status_code = StatusCode::NOT_FOUND, description = "Voucher not found"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<VoucherResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let voucher: VoucherId = req.id_query("id")?;

    let voucher = state
        .app
        .vouchers
        .get_voucher(voucher)
        .await
        .map_err(into_status_error)?;

    Ok(Json(voucher.into()))
}
