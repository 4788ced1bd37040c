//! Typed Ids

use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
    marker::PhantomData,
    num::ParseIntError,
    str::FromStr,
};

use thiserror::Error;

/// Largest id the store can generate (`INTEGER` identity columns).
pub const MAX_ID: u32 = i32::MAX.unsigned_abs();

/// Reasons a raw value cannot become a typed id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    #[error("id is not a non-negative integer")]
    Invalid(#[from] ParseIntError),

    #[error("id must be between 0 and {MAX_ID}")]
    OutOfRange,
}

/// Store-generated integer id tagged with the record it identifies.
///
/// Always within `0..=MAX_ID`, so it converts losslessly to both `u32` and the
/// `INTEGER` column type.
pub struct TypedId<T>(i32, PhantomData<T>);

impl<T> TypedId<T> {
    #[must_use]
    pub const fn into_u32(self) -> u32 {
        self.0.unsigned_abs()
    }

    #[must_use]
    pub(crate) const fn into_i32(self) -> i32 {
        self.0
    }
}

impl<T> Clone for TypedId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypedId<T> {}

impl<T> Debug for TypedId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(&self.0, f)
    }
}

impl<T> Display for TypedId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl<T> PartialEq for TypedId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for TypedId<T> {}

impl<T> Hash for TypedId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> PartialOrd for TypedId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for TypedId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> TryFrom<u32> for TypedId<T> {
    type Error = IdError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        i32::try_from(value)
            .map(|id| Self(id, PhantomData))
            .map_err(|_overflow| IdError::OutOfRange)
    }
}

impl<T> TryFrom<i32> for TypedId<T> {
    type Error = IdError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(IdError::OutOfRange);
        }

        Ok(Self(value, PhantomData))
    }
}

impl<T> FromStr for TypedId<T> {
    type Err = IdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_from(value.trim().parse::<u32>()?)
    }
}

impl<T> From<TypedId<T>> for u32 {
    fn from(value: TypedId<T>) -> Self {
        value.into_u32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker;

    type MarkerId = TypedId<Marker>;

    #[test]
    fn parses_plain_integers() {
        assert_eq!("42".parse::<MarkerId>().map(u32::from), Ok(42));
        assert_eq!(" 7 ".parse::<MarkerId>().map(u32::from), Ok(7));
        assert_eq!("0".parse::<MarkerId>().map(u32::from), Ok(0));
    }

    #[test]
    fn rejects_non_numeric_and_negative_input() {
        assert!(matches!("abc".parse::<MarkerId>(), Err(IdError::Invalid(_))));
        assert!(matches!("-1".parse::<MarkerId>(), Err(IdError::Invalid(_))));
        assert!(matches!("".parse::<MarkerId>(), Err(IdError::Invalid(_))));
    }

    #[test]
    fn rejects_values_above_max() {
        assert_eq!(
            MarkerId::try_from(MAX_ID).map(u32::from),
            Ok(MAX_ID),
            "MAX_ID itself is a valid id"
        );
        assert_eq!(MarkerId::try_from(MAX_ID + 1), Err(IdError::OutOfRange));
        assert_eq!("4294967295".parse::<MarkerId>(), Err(IdError::OutOfRange));
    }

    #[test]
    fn rejects_negative_store_values() {
        assert_eq!(MarkerId::try_from(-5_i32), Err(IdError::OutOfRange));
    }

    #[test]
    fn round_trips_through_store_representation() {
        let id = MarkerId::try_from(12_u32).map(MarkerId::into_i32);

        assert_eq!(id, Ok(12));
    }
}
