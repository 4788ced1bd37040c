//! Shared request validation rules.

use rustc_hash::FxHashSet;
use validator::ValidationError;

/// Reject labels that contain only whitespace.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }

    Ok(())
}

/// Reject id lists that name the same id more than once.
pub(crate) fn unique_ids<I>(ids: I) -> Result<(), ValidationError>
where
    I: IntoIterator<Item = u32>,
{
    let mut seen = FxHashSet::default();

    if ids.into_iter().all(|id| seen.insert(id)) {
        Ok(())
    } else {
        Err(ValidationError::new("duplicate_id"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_blank_rejects_whitespace_only() {
        assert!(not_blank("Acme").is_ok());
        assert!(not_blank(" padded ").is_ok());
        assert!(not_blank("").is_err());
        assert!(not_blank(" \t\n").is_err());
    }

    #[test]
    fn unique_ids_rejects_repeats() {
        assert!(unique_ids([]).is_ok());
        assert!(unique_ids([1, 2, 3]).is_ok());
        assert!(unique_ids([1, 2, 1]).is_err());
    }
}
