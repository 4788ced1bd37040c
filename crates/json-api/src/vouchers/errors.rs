//! Voucher Errors

use salvo::http::StatusError;
use tracing::error;

use vouchers_app::domain::vouchers::VouchersServiceError;

pub(crate) fn into_status_error(error: VouchersServiceError) -> StatusError {
    match error {
        VouchersServiceError::AlreadyExists => {
            StatusError::conflict().brief("Voucher already exists")
        }
        VouchersServiceError::MissingRequiredData | VouchersServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid voucher payload")
        }
        VouchersServiceError::NotFound => StatusError::not_found().brief("Voucher not found"),
        VouchersServiceError::InvalidReference => {
            error!("voucher references an unknown brand");

            StatusError::internal_server_error()
        }
        VouchersServiceError::Sql(source) => {
            error!("voucher storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
