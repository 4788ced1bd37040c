//! Create Brand Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use vouchers_app::domain::brands::{data::NewBrand, records::BrandRecord};

use crate::{brands::errors::into_status_error, extensions::*, state::State, validation};

/// Create Brand Request
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub(crate) struct CreateBrandRequest {
    /// Display name of the brand
    #[validate(
        length(min = 1, max = 100),
        custom(function = validation::not_blank)
    )]
    pub name: String,
}

impl From<CreateBrandRequest> for NewBrand {
    fn from(request: CreateBrandRequest) -> Self {
        NewBrand { name: request.name }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct BrandResponse {
    /// The store-generated brand id
    pub id: u32,

    /// Display name of the brand
    pub name: String,

    /// The date and time the brand was created
    pub created_at: String,
}

impl From<BrandRecord> for BrandResponse {
    fn from(brand: BrandRecord) -> Self {
        BrandResponse {
            id: brand.id.into(),
            name: brand.name,
            created_at: brand.created_at.to_string(),
        }
    }
}

/// Create Brand Handler
#[endpoint(
    tags("brands"),
    summary = "Create Brand",
    responses(
        (status_code = StatusCode::CREATED, description = "Brand created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateBrandRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<BrandResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    request.validate().or_400("Invalid brand payload")?;

    let brand = state
        .app
        .brands
        .create_brand(request.into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/brand?id={}", brand.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(brand.into()))
}
