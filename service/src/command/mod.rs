//! [`Command`] definition.

pub mod end_rent;
pub mod start_rent;

/// [`Command`] of the [`Company`].
///
/// [`Company`]: crate::Company
pub use common::Handler as Command;

pub use self::{end_rent::EndRent, start_rent::StartRent};
