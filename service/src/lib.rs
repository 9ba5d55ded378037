//! Service contains the business logic of the scooter-rental company.
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod archive;
pub mod billing;
pub mod command;
pub mod domain;
pub mod infra;
pub mod inventory;
pub mod query;

use common::money::Currency;
use derive_more::{AsRef, Display, FromStr};

use crate::{
    archive::Archive,
    billing::Calculator,
    infra::clock::{Clock, System},
    inventory::Inventory,
};

pub use self::{command::Command, query::Query};

/// [`Company`] configuration.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// [`Currency`] the [`Company`] bills and reports in.
    pub currency: Currency,
}

/// Scooter-rental company: the façade sequencing its fleet [`Inventory`],
/// the [`Rental`] [`Archive`] and the billing [`Calculator`].
///
/// [`Rental`]: domain::Rental
#[derive(Debug)]
pub struct Company<Clk = System> {
    /// [`Name`] of this [`Company`].
    name: Name,

    /// Configuration of this [`Company`].
    config: Config,

    /// Fleet of this [`Company`].
    fleet: Inventory,

    /// [`Archive`] of this [`Company`]'s rentals.
    archive: Archive,

    /// Billing [`Calculator`] of this [`Company`].
    billing: Calculator<Clk>,

    /// Source of the current moment.
    clock: Clk,
}

impl Company<System> {
    /// Creates a new [`Company`] with the provided parameters, reading the
    /// system clock.
    #[must_use]
    pub fn new(name: Name, config: Config) -> Self {
        Self::with_clock(name, config, System)
    }
}

impl<Clk: Clock + Clone> Company<Clk> {
    /// Creates a new [`Company`] with the provided parameters, reading the
    /// provided [`Clock`].
    #[must_use]
    pub fn with_clock(name: Name, config: Config, clock: Clk) -> Self {
        Self {
            name,
            config,
            fleet: Inventory::new(),
            archive: Archive::new(),
            billing: Calculator::with_clock(config.currency, clock.clone()),
            clock,
        }
    }
}

impl<Clk> Company<Clk> {
    /// Returns the [`Name`] of this [`Company`].
    #[must_use]
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Returns [`Config`] of this [`Company`].
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the fleet [`Inventory`] of this [`Company`].
    #[must_use]
    pub fn fleet(&self) -> &Inventory {
        &self.fleet
    }

    /// Returns the fleet [`Inventory`] of this [`Company`] for modification.
    #[must_use]
    pub fn fleet_mut(&mut self) -> &mut Inventory {
        &mut self.fleet
    }

    /// Returns the [`Rental`] [`Archive`] of this [`Company`].
    ///
    /// [`Rental`]: domain::Rental
    #[must_use]
    pub fn archive(&self) -> &Archive {
        &self.archive
    }

    /// Returns the billing [`Calculator`] of this [`Company`].
    #[must_use]
    pub fn billing(&self) -> &Calculator<Clk> {
        &self.billing
    }
}

/// Name of a [`Company`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` is not empty.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 512
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}
