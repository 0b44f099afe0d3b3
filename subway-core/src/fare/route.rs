//! Line surcharge rule.

use crate::domain::{DomainError, Passenger, Subway};

use super::FareRule;

/// Charges the most expensive line surcharge on the route, once.
///
/// Riding several surcharged lines does not stack. A route over lines
/// with no surcharge adds nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteSurcharge;

impl FareRule for RouteSurcharge {
    fn apply(
        &self,
        fare: u64,
        passenger: &Passenger,
        subway: &Subway,
    ) -> Result<u64, DomainError> {
        let sections = subway.shortest_path_sections(passenger.start(), passenger.end())?;
        let highest = sections
            .iter()
            .map(|section| section.line_surcharge())
            .max()
            .unwrap_or(0);
        Ok(fare + highest)
    }
}
