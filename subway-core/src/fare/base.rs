//! Boarding fare rule.

use crate::domain::{DomainError, Passenger, Subway};

use super::FareRule;

/// The flat boarding fare every trip starts from.
#[derive(Debug, Clone)]
pub struct BaseFare {
    /// Amount charged for boarding, before any surcharge
    pub amount: u64,
}

impl BaseFare {
    pub fn new() -> Self {
        BaseFare { amount: 1250 }
    }
}

impl Default for BaseFare {
    fn default() -> Self {
        Self::new()
    }
}

impl FareRule for BaseFare {
    fn apply(
        &self,
        fare: u64,
        _passenger: &Passenger,
        _subway: &Subway,
    ) -> Result<u64, DomainError> {
        Ok(fare + self.amount)
    }
}
