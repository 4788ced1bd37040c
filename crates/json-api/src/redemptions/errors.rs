//! Redemption Errors

use salvo::http::StatusError;
use tracing::error;

use vouchers_app::domain::redemptions::RedemptionsServiceError;

pub(crate) fn into_status_error(error: RedemptionsServiceError) -> StatusError {
    match error {
        RedemptionsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Redemption already exists")
        }
        RedemptionsServiceError::MissingRequiredData | RedemptionsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid redemption payload")
        }
        RedemptionsServiceError::NotFound => {
            StatusError::not_found().brief("Redemption not found")
        }
        RedemptionsServiceError::InvalidReference => {
            error!("redemption references unknown vouchers");

            StatusError::internal_server_error()
        }
        RedemptionsServiceError::InvalidTotal(source) => {
            error!("redemption total out of range: {source}");

            StatusError::internal_server_error()
        }
        RedemptionsServiceError::Sql(source) => {
            error!("redemption storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
