//! Rent pricing and the billing ledger.

use common::{money::Currency, DateTime, Interval, Money};
use derive_more::{Display, Error};
use rust_decimal::Decimal;
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::Scooter;
use crate::{
    domain::{scooter, Rental},
    infra::clock::{Clock, System},
};

/// Maximum price chargeable for a single full day of rent.
const MAX_DAILY_PRICE: Decimal = Decimal::from_parts(2000, 0, 0, false, 2);

/// Number of minutes in a full day of rent.
const MINUTES_PER_DAY: Decimal = Decimal::from_parts(1440, 0, 0, false, 0);

/// Calculator of [`Rental`] prices, maintaining the billing ledger income is
/// reported from.
#[derive(Debug)]
pub struct Calculator<Clk = System> {
    /// [`Currency`] prices are billed in.
    currency: Currency,

    /// Billing ledger of this [`Calculator`].
    ledger: Vec<Entry>,

    /// Source of the current moment for pricing ongoing [`Rental`]s.
    clock: Clk,
}

impl Calculator<System> {
    /// Creates a new [`Calculator`] billing in the provided [`Currency`] and
    /// reading the system clock.
    #[must_use]
    pub fn new(currency: Currency) -> Self {
        Self::with_clock(currency, System)
    }
}

impl<Clk: Clock> Calculator<Clk> {
    /// Creates a new [`Calculator`] billing in the provided [`Currency`] and
    /// reading the provided [`Clock`].
    #[must_use]
    pub fn with_clock(currency: Currency, clock: Clk) -> Self {
        Self {
            currency,
            ledger: Vec::new(),
            clock,
        }
    }

    /// Prices the provided [`Rental`] and records the outcome in the billing
    /// ledger.
    ///
    /// Every full day of rent is billed at the per-minute rate, but never
    /// above the 20.00 daily cap; the leftover hours and minutes are billed
    /// at the per-minute rate as is. An ongoing [`Rental`] is priced up to
    /// the current moment and recorded as a replaceable projection; a
    /// completed one replaces its projection with a permanent record.
    ///
    /// # Errors
    ///
    /// [`CalculationError::UnbillableInterval`] if the minute component of
    /// the rent interval is zero or negative. Whole hours alone do not make
    /// an interval billable.
    pub fn calculate_rent(
        &mut self,
        rental: &Rental,
    ) -> Result<Money, Traced<CalculationError>> {
        let (interval, billed_at) = match rental.ended_at {
            Some(at) => (Interval::between(rental.started_at, at), at.coerce()),
            None => {
                let now = self.clock.now();
                (Interval::between(rental.started_at, now), now)
            }
        };
        if interval.minutes() <= 0 {
            return Err(tracerr::new!(CalculationError::UnbillableInterval));
        }

        let rate = rental.price_per_minute.amount;
        let days = Decimal::from(interval.days());
        let per_day = rate * MINUTES_PER_DAY;
        let mut amount = if per_day >= MAX_DAILY_PRICE {
            MAX_DAILY_PRICE * days
        } else {
            per_day * days
        };
        amount +=
            rate * Decimal::from(interval.hours() * 60 + interval.minutes());

        let price = Money {
            amount,
            currency: self.currency,
        };
        self.record(Entry {
            scooter_id: rental.scooter_id.clone(),
            billed_at,
            price,
            is_finished: !rental.is_ongoing(),
        });
        Ok(price)
    }

    /// Records the provided [`Entry`] into the ledger, replacing the
    /// unfinished projection of the same [`Scooter`], if any.
    fn record(&mut self, entry: Entry) {
        if let Some(i) = self
            .ledger
            .iter()
            .position(|e| e.scooter_id == entry.scooter_id && !e.is_finished)
        {
            let _ = self.ledger.remove(i);
        }
        self.ledger.push(entry);
    }

    /// Sums the income recorded in the billing ledger.
    ///
    /// `year` of [`None`] sums across all years, otherwise only [`Entry`]s
    /// billed in that calendar year count. Unfinished projections count only
    /// when `include_unfinished` is set.
    #[must_use]
    pub fn calculate_income(
        &self,
        year: Option<i32>,
        include_unfinished: bool,
    ) -> Money {
        let amount = self
            .ledger
            .iter()
            .filter(|e| year.map_or(true, |y| e.billed_at.year() == y))
            .filter(|e| include_unfinished || e.is_finished)
            .map(|e| e.price.amount)
            .sum();
        Money {
            amount,
            currency: self.currency,
        }
    }

    /// Returns all [`Entry`]s of the billing ledger.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.ledger
    }
}

/// Priced outcome of a [`Rental`] recorded in the billing ledger.
#[derive(Clone, Debug)]
pub struct Entry {
    /// ID of the [`Scooter`] the [`Rental`] was priced for.
    pub scooter_id: scooter::Id,

    /// [`DateTime`] the price was billed as of: the [`Rental`] end for a
    /// finished [`Entry`], the moment of pricing for an unfinished one.
    pub billed_at: DateTime,

    /// Billed price.
    pub price: Money,

    /// Indicator whether the priced [`Rental`] was completed.
    ///
    /// An unfinished [`Entry`] is a projection, replaced on the next pricing
    /// of the same [`Scooter`].
    pub is_finished: bool,
}

/// Error of pricing a [`Rental`].
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum CalculationError {
    /// Rent interval has a zero or negative minute component.
    #[display("rent interval has no billable minutes")]
    UnbillableInterval,
}

#[cfg(test)]
mod spec {
    use common::{money::Currency, DateTime, Money};
    use rust_decimal::Decimal;

    use crate::{
        domain::{scooter, Rental},
        infra::clock::Manual,
    };

    use super::{Calculator, CalculationError};

    fn id(s: &str) -> scooter::Id {
        s.parse().unwrap()
    }

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn eur(s: &str) -> Money {
        Money {
            amount: decimal(s),
            currency: Currency::Eur,
        }
    }

    fn at(s: &str) -> DateTime {
        DateTime::from_rfc3339(s).unwrap()
    }

    fn closed(scooter: &str, rate: &str, start: &str, end: &str) -> Rental {
        let mut rental =
            Rental::new(id(scooter), eur(rate), at(start).coerce());
        rental.ended_at = Some(at(end).coerce());
        rental
    }

    fn open(scooter: &str, rate: &str, start: &str) -> Rental {
        Rental::new(id(scooter), eur(rate), at(start).coerce())
    }

    #[test]
    fn caps_full_days_and_bills_leftover_minutes() {
        let mut billing = Calculator::new(Currency::Eur);

        // 5 full days capped at 20.00 each, plus 130 minutes at 0.10.
        let price = billing
            .calculate_rent(&closed(
                "1",
                "0.10",
                "2024-02-02T00:00:00Z",
                "2024-02-07T02:10:00Z",
            ))
            .unwrap();

        assert_eq!(price, eur("113.00"));
    }

    #[test]
    fn full_day_costs_the_cap_for_any_rate_above_it() {
        // Every rate here exceeds 20.00 per 1440 minutes.
        for rate in ["0.02", "0.10", "5.00"] {
            let mut billing = Calculator::new(Currency::Eur);

            let price = billing
                .calculate_rent(&closed(
                    "1",
                    rate,
                    "2024-02-02T00:00:00Z",
                    "2024-02-03T00:01:00Z",
                ))
                .unwrap();

            assert_eq!(
                price.amount - decimal(rate),
                decimal("20.00"),
                "day contribution differs at rate {rate}",
            );
        }
    }

    #[test]
    fn cheap_rate_is_billed_per_minute_without_the_cap() {
        let mut billing = Calculator::new(Currency::Eur);

        // 0.01 * 1440 = 14.40 per day, below the cap.
        let price = billing
            .calculate_rent(&closed(
                "1",
                "0.01",
                "2024-02-02T00:00:00Z",
                "2024-02-04T00:05:00Z",
            ))
            .unwrap();

        assert_eq!(price, eur("28.85"));
    }

    #[test]
    fn rejects_interval_without_billable_minutes() {
        let mut billing = Calculator::new(Currency::Eur);

        // A rent of exactly two whole hours has a zero minute component and
        // is rejected, even though 120 minutes have elapsed.
        let err = billing
            .calculate_rent(&closed(
                "1",
                "0.10",
                "2024-02-02T00:00:00Z",
                "2024-02-02T02:00:00Z",
            ))
            .unwrap_err();
        assert!(matches!(
            *err.as_ref(),
            CalculationError::UnbillableInterval,
        ));

        let err = billing
            .calculate_rent(&closed(
                "1",
                "0.10",
                "2024-02-02T00:00:00Z",
                "2024-02-02T00:00:00Z",
            ))
            .unwrap_err();
        assert!(matches!(
            *err.as_ref(),
            CalculationError::UnbillableInterval,
        ));

        // Negative interval: ends before it starts.
        let err = billing
            .calculate_rent(&closed(
                "1",
                "0.10",
                "2024-02-02T02:00:00Z",
                "2024-02-02T00:30:00Z",
            ))
            .unwrap_err();
        assert!(matches!(
            *err.as_ref(),
            CalculationError::UnbillableInterval,
        ));

        assert!(billing.entries().is_empty());
    }

    #[test]
    fn prices_ongoing_rental_up_to_now() {
        let clock = Manual::new(at("2024-02-02T10:30:00Z"));
        let mut billing = Calculator::with_clock(Currency::Eur, clock);

        let price = billing
            .calculate_rent(&open("1", "0.10", "2024-02-02T10:00:00Z"))
            .unwrap();

        assert_eq!(price, eur("3.00"));
        let [entry] = billing.entries() else {
            panic!("expected a single entry");
        };
        assert!(!entry.is_finished);
        assert_eq!(entry.billed_at, at("2024-02-02T10:30:00Z"));
    }

    #[test]
    fn replaces_projection_when_rental_completes() {
        let clock = Manual::new(at("2024-02-02T10:30:00Z"));
        let mut billing = Calculator::with_clock(Currency::Eur, clock);

        let _ = billing
            .calculate_rent(&open("1", "0.10", "2024-02-02T10:00:00Z"))
            .unwrap();
        let price = billing
            .calculate_rent(&closed(
                "1",
                "0.10",
                "2024-02-02T10:00:00Z",
                "2024-02-02T10:45:00Z",
            ))
            .unwrap();

        assert_eq!(price, eur("4.50"));
        let [entry] = billing.entries() else {
            panic!("expected a single entry");
        };
        assert!(entry.is_finished);
        assert_eq!(entry.billed_at, at("2024-02-02T10:45:00Z"));
        assert_eq!(entry.price, eur("4.50"));
    }

    #[test]
    fn keeps_a_single_projection_per_scooter() {
        let clock = Manual::new(at("2024-02-02T10:30:00Z"));
        let mut billing =
            Calculator::with_clock(Currency::Eur, clock.clone());

        let _ = billing
            .calculate_rent(&open("1", "0.10", "2024-02-02T10:00:00Z"))
            .unwrap();
        clock.set(at("2024-02-02T10:45:00Z"));
        let _ = billing
            .calculate_rent(&open("1", "0.10", "2024-02-02T10:00:00Z"))
            .unwrap();

        let [entry] = billing.entries() else {
            panic!("expected a single entry");
        };
        assert!(!entry.is_finished);
        assert_eq!(entry.price, eur("4.50"));
    }

    #[test]
    fn finished_entries_are_kept_per_rental() {
        let mut billing = Calculator::new(Currency::Eur);

        let _ = billing
            .calculate_rent(&closed(
                "1",
                "0.10",
                "2024-02-02T10:00:00Z",
                "2024-02-02T10:30:00Z",
            ))
            .unwrap();
        let _ = billing
            .calculate_rent(&closed(
                "1",
                "0.10",
                "2024-02-03T10:00:00Z",
                "2024-02-03T10:45:00Z",
            ))
            .unwrap();

        assert_eq!(billing.entries().len(), 2);
        assert!(billing.entries().iter().all(|e| e.is_finished));
    }

    #[test]
    fn sums_income_by_year_and_completeness() {
        let clock = Manual::new(at("2023-07-01T12:40:00Z"));
        let mut billing =
            Calculator::with_clock(Currency::Eur, clock);

        // 40 minutes at 0.10: 4.00, billed in 2023.
        let _ = billing
            .calculate_rent(&closed(
                "1",
                "0.10",
                "2023-06-01T10:00:00Z",
                "2023-06-01T10:40:00Z",
            ))
            .unwrap();
        // 50 minutes at 0.10: 5.00, billed in 2022.
        let _ = billing
            .calculate_rent(&closed(
                "2",
                "0.10",
                "2022-03-05T08:00:00Z",
                "2022-03-05T08:50:00Z",
            ))
            .unwrap();
        // 40 minutes at 0.15 so far: 6.00, still ongoing in 2023.
        let _ = billing
            .calculate_rent(&open("3", "0.15", "2023-07-01T12:00:00Z"))
            .unwrap();

        assert_eq!(billing.calculate_income(Some(2023), true), eur("10.00"));
        assert_eq!(billing.calculate_income(None, false), eur("9.00"));
        assert_eq!(billing.calculate_income(None, true), eur("15.00"));
        assert_eq!(billing.calculate_income(Some(2021), true), eur("0"));
    }

    #[test]
    fn empty_ledger_yields_zero() {
        let billing = Calculator::new(Currency::Eur);

        assert_eq!(
            billing.calculate_income(None, true),
            Money::zero(Currency::Eur),
        );
    }
}
