//! Brand Errors

use salvo::http::StatusError;
use tracing::error;

use vouchers_app::domain::brands::BrandsServiceError;

pub(crate) fn into_status_error(error: BrandsServiceError) -> StatusError {
    match error {
        BrandsServiceError::AlreadyExists => StatusError::conflict().brief("Brand already exists"),
        BrandsServiceError::MissingRequiredData | BrandsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid brand payload")
        }
        BrandsServiceError::NotFound => StatusError::not_found().brief("Brand not found"),
        BrandsServiceError::Sql(source) => {
            error!("brand storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
