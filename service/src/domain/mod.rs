//! Domain definitions.

pub mod rental;
pub mod scooter;

pub use self::{rental::Rental, scooter::Scooter};
