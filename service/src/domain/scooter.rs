//! [`Scooter`] definitions.

use common::Money;
use derive_more::{AsRef, Display, FromStr};

/// Scooter available for rent.
#[derive(Clone, Debug)]
pub struct Scooter {
    /// ID of this [`Scooter`].
    pub id: Id,

    /// Price charged for every minute this [`Scooter`] is rented.
    pub price_per_minute: Money,

    /// Indicator whether this [`Scooter`] is rented out at the moment.
    pub is_rented: bool,
}

/// ID of a [`Scooter`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(str, String)]
pub struct Id(String);

impl Id {
    /// Creates a new [`Id`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `id` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Creates a new [`Id`] if the given `id` is valid.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        Self::check(&id).then_some(Self(id))
    }

    /// Checks whether the given `id` is a valid [`Id`].
    fn check(id: impl AsRef<str>) -> bool {
        let id = id.as_ref();
        id.trim() == id && !id.is_empty() && id.len() <= 64
    }
}

impl FromStr for Id {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Id`")
    }
}

#[cfg(test)]
mod spec {
    use super::Id;

    #[test]
    fn rejects_empty_and_padded_ids() {
        assert!(Id::new("").is_none());
        assert!(Id::new(" 1").is_none());
        assert!(Id::new("1 ").is_none());

        assert!(Id::new("1").is_some());
        assert!("scooter-1".parse::<Id>().is_ok());
        assert!("".parse::<Id>().is_err());
    }
}
