//! [`Command`] for starting a [`Scooter`] rent.

use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::{archive::Archive, domain::Scooter, inventory::Inventory};
use crate::{
    archive,
    domain::{scooter, Rental},
    infra::Clock,
    inventory, Company,
};

use super::Command;

/// [`Command`] for starting a [`Scooter`] rent.
#[derive(Clone, Debug)]
pub struct StartRent {
    /// ID of the [`Scooter`] to rent out.
    pub scooter_id: scooter::Id,
}

impl<Clk: Clock> Command<StartRent> for Company<Clk> {
    type Ok = ();
    type Err = Traced<ExecutionError>;

    fn execute(&mut self, cmd: StartRent) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let StartRent { scooter_id } = cmd;

        let price_per_minute = self
            .fleet
            .get(&scooter_id)
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .price_per_minute;

        let rental = Rental::new(
            scooter_id.clone(),
            price_per_minute,
            self.clock.now().coerce(),
        );
        self.archive
            .add(rental)
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        self.fleet
            .get_mut(&scooter_id)
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .is_rented = true;

        log::debug!("`Scooter(id: {scooter_id})` rented out");
        Ok(())
    }
}

/// Error of [`StartRent`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Inventory`] lookup failed.
    #[display("`Inventory` lookup failed: {_0}")]
    #[from]
    Fleet(inventory::LookupError),

    /// [`Archive`] rejected the new [`Rental`].
    #[display("`Archive` rejected the `Rental`: {_0}")]
    #[from]
    Archive(archive::AddError),
}
