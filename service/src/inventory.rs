//! [`Scooter`] fleet inventory.

use common::Money;
use derive_more::{Display, Error};
use tracerr::Traced;

use crate::domain::{scooter, Scooter};

/// Fleet of [`Scooter`]s owned by a rental company.
#[derive(Debug, Default)]
pub struct Inventory {
    /// [`Scooter`]s of this [`Inventory`].
    scooters: Vec<Scooter>,
}

impl Inventory {
    /// Creates a new empty [`Inventory`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a new [`Scooter`] with the provided parameters to this
    /// [`Inventory`].
    ///
    /// # Errors
    ///
    /// - [`AddError::NonPositivePrice`] if the `price_per_minute` is zero or
    ///   negative.
    /// - [`AddError::Duplicate`] if a [`Scooter`] with the provided ID is
    ///   already present.
    pub fn add(
        &mut self,
        id: scooter::Id,
        price_per_minute: Money,
    ) -> Result<(), Traced<AddError>> {
        use AddError as E;

        if !price_per_minute.is_positive() {
            return Err(tracerr::new!(E::NonPositivePrice(price_per_minute)));
        }
        if self.scooters.iter().any(|s| s.id == id) {
            return Err(tracerr::new!(E::Duplicate(id)));
        }

        self.scooters.push(Scooter {
            id,
            price_per_minute,
            is_rented: false,
        });
        Ok(())
    }

    /// Removes the [`Scooter`] with the provided ID from this [`Inventory`],
    /// returning it.
    ///
    /// # Errors
    ///
    /// [`RemoveError::NotFound`] if no such [`Scooter`] is present.
    pub fn remove(
        &mut self,
        id: &scooter::Id,
    ) -> Result<Scooter, Traced<RemoveError>> {
        let i = self
            .scooters
            .iter()
            .position(|s| &s.id == id)
            .ok_or_else(|| {
                tracerr::new!(RemoveError::NotFound(id.clone()))
            })?;
        Ok(self.scooters.remove(i))
    }

    /// Looks up the [`Scooter`] with the provided ID.
    ///
    /// # Errors
    ///
    /// [`LookupError::Unknown`] if no such [`Scooter`] is present.
    pub fn get(
        &self,
        id: &scooter::Id,
    ) -> Result<&Scooter, Traced<LookupError>> {
        self.scooters
            .iter()
            .find(|s| &s.id == id)
            .ok_or_else(|| tracerr::new!(LookupError::Unknown(id.clone())))
    }

    /// Looks up the [`Scooter`] with the provided ID for modification.
    pub(crate) fn get_mut(
        &mut self,
        id: &scooter::Id,
    ) -> Result<&mut Scooter, Traced<LookupError>> {
        self.scooters
            .iter_mut()
            .find(|s| &s.id == id)
            .ok_or_else(|| tracerr::new!(LookupError::Unknown(id.clone())))
    }

    /// Returns all [`Scooter`]s of this [`Inventory`].
    #[must_use]
    pub fn scooters(&self) -> &[Scooter] {
        &self.scooters
    }
}

/// Error of adding a [`Scooter`] to an [`Inventory`].
#[derive(Debug, Display, Error)]
pub enum AddError {
    /// [`Scooter`] with the provided ID is already present.
    #[display("`Scooter(id: {_0})` already exists")]
    Duplicate(#[error(not(source))] scooter::Id),

    /// Provided price-per-minute is zero or negative.
    #[display("price-per-minute of {_0} is not positive")]
    NonPositivePrice(#[error(not(source))] Money),
}

/// Error of removing a [`Scooter`] from an [`Inventory`].
#[derive(Debug, Display, Error)]
pub enum RemoveError {
    /// No [`Scooter`] with the provided ID is present.
    #[display("`Scooter(id: {_0})` does not exist")]
    NotFound(#[error(not(source))] scooter::Id),
}

/// Error of looking up a [`Scooter`] in an [`Inventory`].
#[derive(Debug, Display, Error)]
pub enum LookupError {
    /// No [`Scooter`] with the provided ID is present.
    #[display("`Scooter(id: {_0})` does not exist")]
    Unknown(#[error(not(source))] scooter::Id),
}
