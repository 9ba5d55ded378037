//! [`Rental`] archive.

use common::{DateTime, Money};
use derive_more::{Display, Error};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::Scooter;
use crate::domain::{rental, scooter, Rental};

/// Archive of every [`Rental`] a company has made, ongoing ones included.
///
/// [`Rental`]s are recorded in the order they start and are never removed:
/// closed ones remain as rental history.
#[derive(Debug, Default)]
pub struct Archive {
    /// [`Rental`]s of this [`Archive`], in start order.
    rentals: Vec<Rental>,
}

impl Archive {
    /// Creates a new empty [`Archive`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new ongoing [`Rental`] in this [`Archive`].
    ///
    /// The rules below are checked against the most recently recorded
    /// [`Rental`] of the same [`Scooter`], as recording order matches start
    /// order.
    ///
    /// # Errors
    ///
    /// - [`AddError::Duplicate`] if that [`Rental`] starts at the very same
    ///   moment.
    /// - [`AddError::Overlapping`] if that [`Rental`] is still ongoing or
    ///   ends after the new one starts.
    /// - [`AddError::NonPositivePrice`] if the price-per-minute is zero or
    ///   negative.
    pub fn add(&mut self, rental: Rental) -> Result<(), Traced<AddError>> {
        use AddError as E;

        let last_same = self
            .rentals
            .iter()
            .rev()
            .find(|r| r.scooter_id == rental.scooter_id);
        if let Some(last) = last_same {
            if last.started_at == rental.started_at {
                return Err(tracerr::new!(E::Duplicate(rental.scooter_id)));
            }

            let ends_at: Option<DateTime> =
                last.ended_at.map(rental::EndDateTime::coerce);
            if ends_at.map_or(true, |at| at > rental.started_at.coerce()) {
                return Err(tracerr::new!(E::Overlapping(rental.scooter_id)));
            }
        }

        if !rental.price_per_minute.is_positive() {
            return Err(tracerr::new!(E::NonPositivePrice(
                rental.price_per_minute,
            )));
        }

        self.rentals.push(rental);
        Ok(())
    }

    /// Closes the ongoing [`Rental`] of the [`Scooter`] with the provided ID,
    /// returning a snapshot of the closed [`Rental`].
    ///
    /// The most recently recorded [`Rental`] of the [`Scooter`] is the one
    /// being closed.
    ///
    /// # Errors
    ///
    /// - [`CloseError::UnknownScooter`] if this [`Archive`] holds no
    ///   [`Rental`] of the [`Scooter`].
    /// - [`CloseError::NotRented`] if that [`Rental`] is closed already.
    pub fn close(
        &mut self,
        scooter_id: &scooter::Id,
        ended_at: rental::EndDateTime,
    ) -> Result<Rental, Traced<CloseError>> {
        use CloseError as E;

        let rental = self
            .rentals
            .iter_mut()
            .rev()
            .find(|r| &r.scooter_id == scooter_id)
            .ok_or_else(|| {
                tracerr::new!(E::UnknownScooter(scooter_id.clone()))
            })?;
        if rental.ended_at.is_some() {
            return Err(tracerr::new!(E::NotRented(scooter_id.clone())));
        }

        rental.ended_at = Some(ended_at);
        Ok(rental.clone())
    }

    /// Returns all [`Rental`]s recorded in this [`Archive`].
    #[must_use]
    pub fn rentals(&self) -> &[Rental] {
        &self.rentals
    }
}

/// Error of recording a new [`Rental`] in an [`Archive`].
#[derive(Debug, Display, Error)]
pub enum AddError {
    /// [`Rental`] of the [`Scooter`] with the same start is recorded already.
    #[display("`Rental` of `Scooter(id: {_0})` with the same start is \
               recorded already")]
    Duplicate(#[error(not(source))] scooter::Id),

    /// [`Scooter`] is rented out over the start of the new [`Rental`].
    #[display("`Scooter(id: {_0})` is already rented out")]
    Overlapping(#[error(not(source))] scooter::Id),

    /// Provided price-per-minute is zero or negative.
    #[display("price-per-minute of {_0} is not positive")]
    NonPositivePrice(#[error(not(source))] Money),
}

/// Error of closing a [`Rental`] in an [`Archive`].
#[derive(Debug, Display, Error)]
pub enum CloseError {
    /// No [`Rental`] of the [`Scooter`] with the provided ID is recorded.
    #[display("no `Rental` of `Scooter(id: {_0})` is recorded")]
    UnknownScooter(#[error(not(source))] scooter::Id),

    /// [`Scooter`] with the provided ID is not rented out.
    #[display("`Scooter(id: {_0})` is not rented out")]
    NotRented(#[error(not(source))] scooter::Id),
}

#[cfg(test)]
mod spec {
    use common::{money::Currency, DateTime, Money};

    use crate::domain::{scooter, Rental};

    use super::{AddError, Archive, CloseError};

    fn id(s: &str) -> scooter::Id {
        s.parse().unwrap()
    }

    fn price(s: &str) -> Money {
        Money {
            amount: s.parse().unwrap(),
            currency: Currency::Eur,
        }
    }

    fn at(s: &str) -> DateTime {
        DateTime::from_rfc3339(s).unwrap()
    }

    fn rental(scooter: &str, started_at: &str) -> Rental {
        Rental::new(id(scooter), price("0.10"), at(started_at).coerce())
    }

    #[test]
    fn records_rentals_in_start_order() {
        let mut archive = Archive::new();

        archive.add(rental("1", "2024-02-02T00:00:00Z")).unwrap();
        archive.add(rental("2", "2024-02-02T00:05:00Z")).unwrap();

        assert_eq!(archive.rentals().len(), 2);
        assert!(archive.rentals().iter().all(Rental::is_ongoing));
    }

    #[test]
    fn rejects_rental_over_an_ongoing_one() {
        let mut archive = Archive::new();

        archive.add(rental("1", "2024-02-02T00:00:00Z")).unwrap();
        let err = archive
            .add(rental("1", "2024-02-02T01:00:00Z"))
            .unwrap_err();

        assert!(matches!(*err.as_ref(), AddError::Overlapping(_)));
    }

    #[test]
    fn rejects_rental_overlapping_a_closed_one() {
        let mut archive = Archive::new();

        archive.add(rental("1", "2024-02-02T00:00:00Z")).unwrap();
        let _ = archive
            .close(&id("1"), at("2024-02-02T02:10:00Z").coerce())
            .unwrap();

        let err = archive
            .add(rental("1", "2024-02-02T01:00:00Z"))
            .unwrap_err();

        assert!(matches!(*err.as_ref(), AddError::Overlapping(_)));
    }

    #[test]
    fn rejects_duplicate_rental() {
        let mut archive = Archive::new();

        archive.add(rental("1", "2024-02-02T00:00:00Z")).unwrap();
        let err = archive
            .add(rental("1", "2024-02-02T00:00:00Z"))
            .unwrap_err();

        assert!(matches!(*err.as_ref(), AddError::Duplicate(_)));
    }

    #[test]
    fn rejects_non_positive_price() {
        let mut archive = Archive::new();

        let bad = Rental::new(
            id("1"),
            price("0"),
            at("2024-02-02T00:00:00Z").coerce(),
        );
        let err = archive.add(bad).unwrap_err();

        assert!(matches!(*err.as_ref(), AddError::NonPositivePrice(_)));
    }

    #[test]
    fn closes_the_ongoing_rental() {
        let mut archive = Archive::new();

        archive.add(rental("1", "2024-02-02T00:00:00Z")).unwrap();
        let closed = archive
            .close(&id("1"), at("2024-02-07T02:10:00Z").coerce())
            .unwrap();

        assert!(!closed.is_ongoing());
        assert_eq!(
            closed.ended_at,
            Some(at("2024-02-07T02:10:00Z").coerce()),
        );
        assert!(!archive.rentals()[0].is_ongoing());
    }

    #[test]
    fn closing_an_unknown_scooter_fails() {
        let mut archive = Archive::new();

        let err = archive
            .close(&id("1"), at("2024-02-02T01:00:00Z").coerce())
            .unwrap_err();

        assert!(matches!(*err.as_ref(), CloseError::UnknownScooter(_)));
    }

    #[test]
    fn closing_twice_fails() {
        let mut archive = Archive::new();

        archive.add(rental("1", "2024-02-02T00:00:00Z")).unwrap();
        let _ = archive
            .close(&id("1"), at("2024-02-02T02:10:00Z").coerce())
            .unwrap();
        let err = archive
            .close(&id("1"), at("2024-02-02T03:00:00Z").coerce())
            .unwrap_err();

        assert!(matches!(*err.as_ref(), CloseError::NotRented(_)));
    }

    #[test]
    fn scooter_can_be_rented_again_after_return() {
        let mut archive = Archive::new();

        archive.add(rental("1", "2024-02-02T00:00:00Z")).unwrap();
        let _ = archive
            .close(&id("1"), at("2024-02-02T02:10:00Z").coerce())
            .unwrap();
        archive.add(rental("1", "2024-02-03T00:00:00Z")).unwrap();

        let open = archive
            .rentals()
            .iter()
            .filter(|r| r.is_ongoing())
            .count();
        assert_eq!(archive.rentals().len(), 2);
        assert_eq!(open, 1);

        let closed = archive
            .close(&id("1"), at("2024-02-03T01:30:00Z").coerce())
            .unwrap();
        assert_eq!(
            closed.started_at,
            at("2024-02-03T00:00:00Z").coerce(),
        );
    }
}
