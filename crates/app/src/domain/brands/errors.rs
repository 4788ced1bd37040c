//! Brands service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BrandsServiceError {
    #[error("brand already exists")]
    AlreadyExists,

    #[error("brand not found")]
    NotFound,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for BrandsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let error = BrandsServiceError::from(Error::RowNotFound);

        assert!(matches!(error, BrandsServiceError::NotFound));
    }

    #[test]
    fn pool_errors_map_to_sql() {
        let error = BrandsServiceError::from(Error::PoolTimedOut);

        assert!(matches!(error, BrandsServiceError::Sql(Error::PoolTimedOut)));
    }
}
