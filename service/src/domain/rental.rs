//! [`Rental`] definitions.

#[cfg(doc)]
use common::DateTime;
use common::{DateTimeOf, Money};

use super::scooter;
#[cfg(doc)]
use super::Scooter;

/// Single rent of a [`Scooter`], either ongoing or completed.
#[derive(Clone, Debug)]
pub struct Rental {
    /// ID of the rented [`Scooter`].
    pub scooter_id: scooter::Id,

    /// Price charged for every minute of this [`Rental`], captured from the
    /// [`Scooter`] at the moment the rent started.
    pub price_per_minute: Money,

    /// [`DateTime`] when this [`Rental`] started.
    pub started_at: StartDateTime,

    /// [`DateTime`] when this [`Rental`] ended.
    ///
    /// [`None`] means that the [`Scooter`] is still rented out.
    pub ended_at: Option<EndDateTime>,
}

impl Rental {
    /// Creates a new ongoing [`Rental`] with the provided parameters.
    #[must_use]
    pub fn new(
        scooter_id: scooter::Id,
        price_per_minute: Money,
        started_at: StartDateTime,
    ) -> Self {
        Self {
            scooter_id,
            price_per_minute,
            started_at,
            ended_at: None,
        }
    }

    /// Returns whether this [`Rental`] is still ongoing.
    #[must_use]
    pub fn is_ongoing(&self) -> bool {
        self.ended_at.is_none()
    }
}

/// Marker type indicating a [`Rental`] start.
#[derive(Clone, Copy, Debug)]
pub struct Start;

/// [`DateTime`] when a [`Rental`] started.
pub type StartDateTime = DateTimeOf<(Rental, Start)>;

/// Marker type indicating a [`Rental`] end.
#[derive(Clone, Copy, Debug)]
pub struct End;

/// [`DateTime`] when a [`Rental`] ended.
pub type EndDateTime = DateTimeOf<(Rental, End)>;
