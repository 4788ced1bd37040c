//! Vouchers By Brand Handler

use std::sync::Arc;

use salvo::prelude::*;

use vouchers_app::domain::brands::records::BrandId;

use crate::{
    extensions::*, state::State,
    vouchers::{errors::into_status_error, get::VoucherResponse},
};

/// Vouchers By Brand Handler
///
/// Returns every voucher owned by the brand in the `id` query parameter. An
/// unknown brand yields an empty list.
#[endpoint(
    tags("vouchers"),
    summary = "List Vouchers By Brand",
    responses(
        (status_code = StatusCode::OK, description = "Vouchers owned by the brand"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing or invalid id"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Vec<VoucherResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let brand: BrandId = req.id_query("id")?;

    let vouchers = state
        .app
        .vouchers
        .list_vouchers_by_brand(brand)
        .await
        .map_err(into_status_error)?;

    Ok(Json(vouchers.into_iter().map(Into::into).collect()))
}
