//! Fare calculation pipeline.
//!
//! A fare starts at zero and is folded through an ordered list of
//! rules. The standard order is boarding fare, distance surcharge, line
//! surcharge, then the age discount; the order matters because the
//! discount applies to everything accumulated before it.

mod age;
mod base;
mod distance;
mod route;

pub use age::AgeDiscount;
pub use base::BaseFare;
pub use distance::DistanceSurcharge;
pub use route::RouteSurcharge;

use crate::domain::{DomainError, Passenger, Subway};

/// One step of the fare pipeline.
pub trait FareRule {
    /// Applies this rule on top of the fare accumulated so far.
    ///
    /// # Errors
    ///
    /// Rules that consult the network propagate its routing errors, so
    /// a trip that cannot be routed cannot be priced.
    fn apply(&self, fare: u64, passenger: &Passenger, subway: &Subway)
        -> Result<u64, DomainError>;
}

/// An ordered pipeline of fare rules.
pub struct FareCalculator {
    rules: Vec<Box<dyn FareRule>>,
}

impl FareCalculator {
    /// Builds a pipeline whose rules apply left to right.
    pub fn new(rules: Vec<Box<dyn FareRule>>) -> Self {
        FareCalculator { rules }
    }

    /// Folds every rule over a starting fare of zero.
    ///
    /// # Errors
    ///
    /// Propagates the first rule failure.
    pub fn calculate(&self, passenger: &Passenger, subway: &Subway) -> Result<u64, DomainError> {
        self.rules
            .iter()
            .try_fold(0, |fare, rule| rule.apply(fare, passenger, subway))
    }
}

impl Default for FareCalculator {
    fn default() -> Self {
        FareCalculator::new(vec![
            Box::new(BaseFare::default()),
            Box::new(DistanceSurcharge::default()),
            Box::new(RouteSurcharge),
            Box::new(AgeDiscount::default()),
        ])
    }
}
