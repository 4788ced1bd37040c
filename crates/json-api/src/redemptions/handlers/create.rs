//! Create Redemption Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use vouchers_app::{
    domain::{
        redemptions::data::NewRedemption,
        vouchers::records::VoucherId,
    },
    ids::{IdError, MAX_ID},
};

use crate::{
    extensions::*,
    redemptions::{errors::into_status_error, get::RedemptionResponse},
    state::State,
    validation,
};

/// Voucher reference inside a redemption request.
///
/// Only the id is read; any other voucher fields the client sends are ignored.
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub(crate) struct RedemptionVoucherRequest {
    /// Id of an existing voucher
    #[validate(range(max = MAX_ID))]
    pub id: u32,
}

/// Create Redemption Request
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub(crate) struct CreateRedemptionRequest {
    /// Name of the redeeming customer
    #[validate(
        length(min = 1, max = 100),
        custom(function = validation::not_blank)
    )]
    pub customer_name: String,

    /// Vouchers to redeem, each listed once
    #[serde(default)]
    #[validate(nested, custom(function = unique_vouchers))]
    pub vouchers: Vec<RedemptionVoucherRequest>,
}

fn unique_vouchers(vouchers: &[RedemptionVoucherRequest]) -> Result<(), ValidationError> {
    validation::unique_ids(vouchers.iter().map(|voucher| voucher.id))
}

impl TryFrom<CreateRedemptionRequest> for NewRedemption {
    type Error = IdError;

    fn try_from(request: CreateRedemptionRequest) -> Result<Self, Self::Error> {
        Ok(NewRedemption {
            customer_name: request.customer_name,
            voucher_ids: request
                .vouchers
                .into_iter()
                .map(|voucher| VoucherId::try_from(voucher.id))
                .collect::<Result<_, _>>()?,
        })
    }
}

/// Create Redemption Handler
///
/// Records a redemption. The total is always computed from the stored voucher
/// costs.
#[endpoint(
    tags("redemptions"),
    summary = "Create Redemption",
    responses(
        (status_code = StatusCode::CREATED, description = "Redemption created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateRedemptionRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<RedemptionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    request.validate().or_400("Invalid redemption payload")?;

    let redemption = NewRedemption::try_from(request).or_400("Invalid voucher id")?;

    let redemption = state
        .app
        .redemptions
        .create_redemption(redemption)
        .await
        .map_err(into_status_error)?;

    res.add_header(
        LOCATION,
        format!("/transaction/redemption?transactionId={}", redemption.id),
        true,
    )
    .or_500("failed to set location header")?
    .status_code(StatusCode::CREATED);

    Ok(Json(redemption.into()))
}
