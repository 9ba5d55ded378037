//! [`Query`] to calculate the income of a [`Company`].

use common::Money;
use derive_more::{Display, Error};
use tracerr::Traced;

use crate::{infra::Clock, Company};

use super::Query;

/// [`Query`] to calculate the income of a [`Company`] from its billing
/// ledger.
#[derive(Clone, Copy, Debug)]
pub struct Income {
    /// Calendar year to report the income for.
    ///
    /// [`None`] sums the income across all years.
    pub year: Option<i32>,

    /// Indicator whether income projected for ongoing rents counts.
    pub include_unfinished: bool,
}

impl<Clk: Clock> Query<Income> for Company<Clk> {
    type Ok = Money;
    type Err = Traced<ExecutionError>;

    fn execute(&mut self, query: Income) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let Income {
            year,
            include_unfinished,
        } = query;

        if let Some(year) = year {
            if year <= 0 {
                return Err(tracerr::new!(E::InvalidYear(year)));
            }
        }

        Ok(self.billing.calculate_income(year, include_unfinished))
    }
}

/// Error of [`Income`] [`Query`] execution.
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum ExecutionError {
    /// Provided year is not a valid calendar year.
    #[display("{_0} is not a valid year")]
    InvalidYear(#[error(not(source))] i32),
}
