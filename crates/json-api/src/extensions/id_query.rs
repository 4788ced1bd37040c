//! Integer id query parameter parsing helpers.

use salvo::prelude::{Request, StatusError};
use vouchers_app::ids::TypedId;

use crate::extensions::*;

pub(crate) trait IdQueryExt {
    /// Read a required typed id from the named query parameter.
    ///
    /// Missing, non-numeric, negative and out-of-range values are all bad requests.
    fn id_query<T>(&self, key: &str) -> Result<TypedId<T>, StatusError>;
}

impl IdQueryExt for Request {
    fn id_query<T>(&self, key: &str) -> Result<TypedId<T>, StatusError> {
        let raw = self.query::<String>(key).ok_or_else(|| {
            StatusError::bad_request().brief(format!("missing \"{key}\" query parameter"))
        })?;

        raw.parse::<TypedId<T>>()
            .or_400(&format!("could not parse \"{key}\" query parameter"))
    }
}
