//! Create Voucher Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use vouchers_app::{
    domain::{brands::records::BrandId, vouchers::data::NewVoucher},
    ids::{IdError, MAX_ID},
};

use crate::{
    extensions::*,
    state::State,
    validation,
    vouchers::{errors::into_status_error, get::VoucherResponse},
};

/// Create Voucher Request
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub(crate) struct CreateVoucherRequest {
    /// Display title of the voucher
    #[validate(
        length(min = 1, max = 150),
        custom(function = validation::not_blank)
    )]
    pub title: String,

    /// Points needed to redeem the voucher
    #[validate(range(max = MAX_ID))]
    pub cost_in_point: u32,

    /// Owning brand id
    #[serde(default)]
    #[validate(range(max = MAX_ID))]
    pub brand_id: Option<u32>,
}

impl TryFrom<CreateVoucherRequest> for NewVoucher {
    type Error = IdError;

    fn try_from(request: CreateVoucherRequest) -> Result<Self, Self::Error> {
        Ok(NewVoucher {
            title: request.title,
            cost_in_point: request.cost_in_point,
            brand_id: request.brand_id.map(BrandId::try_from).transpose()?,
        })
    }
}

/// Create Voucher Handler
#[endpoint(
    tags("vouchers"),
    summary = "Create Voucher",
    responses(
        (status_code = StatusCode::CREATED, description = "Voucher created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateVoucherRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<VoucherResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    request.validate().or_400("Invalid voucher payload")?;

    let voucher = NewVoucher::try_from(request).or_400("Invalid brand id")?;

    let voucher = state
        .app
        .vouchers
        .create_voucher(voucher)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/voucher?id={}", voucher.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(voucher.into()))
}
