//! [`Command`] for ending a [`Scooter`] rent.

use common::Money;
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::{
    archive::Archive, billing::Calculator, domain::Scooter,
    inventory::Inventory,
};
use crate::{
    archive, billing, domain::scooter, infra::Clock, inventory, Company,
};

use super::Command;

/// [`Command`] for ending a [`Scooter`] rent.
#[derive(Clone, Debug)]
pub struct EndRent {
    /// ID of the [`Scooter`] to return.
    pub scooter_id: scooter::Id,
}

impl<Clk: Clock> Command<EndRent> for Company<Clk> {
    type Ok = Money;
    type Err = Traced<ExecutionError>;

    fn execute(&mut self, cmd: EndRent) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let EndRent { scooter_id } = cmd;

        self.fleet
            .get(&scooter_id)
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        let ended_at = self.clock.now().coerce();
        let rental = self
            .archive
            .close(&scooter_id, ended_at)
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        self.fleet
            .get_mut(&scooter_id)
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .is_rented = false;

        let price = self
            .billing
            .calculate_rent(&rental)
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        log::debug!("`Scooter(id: {scooter_id})` returned, billed {price}");
        Ok(price)
    }
}

/// Error of [`EndRent`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Inventory`] lookup failed.
    #[display("`Inventory` lookup failed: {_0}")]
    #[from]
    Fleet(inventory::LookupError),

    /// [`Archive`] refused to close the [`Rental`].
    ///
    /// [`Rental`]: crate::domain::Rental
    #[display("`Archive` refused to close the `Rental`: {_0}")]
    #[from]
    Archive(archive::CloseError),

    /// [`Calculator`] refused to price the [`Rental`].
    ///
    /// [`Rental`]: crate::domain::Rental
    #[display("`Calculator` refused to price the `Rental`: {_0}")]
    #[from]
    Billing(billing::CalculationError),
}
