//! Distance-based surcharge rule.

use crate::domain::{DomainError, Passenger, Subway};

use super::FareRule;

/// Surcharge that grows with the shortest-route distance.
///
/// The first `free_limit` of distance rides on the boarding fare alone.
/// From there to `mid_limit`, every started `mid_unit` adds `step`.
/// Beyond `mid_limit`, every started `long_unit` adds `step` on top of
/// the fully charged middle band.
#[derive(Debug, Clone)]
pub struct DistanceSurcharge {
    /// Distance covered by the boarding fare
    pub free_limit: u64,
    /// Upper bound of the middle band
    pub mid_limit: u64,
    /// Charging unit inside the middle band
    pub mid_unit: u64,
    /// Charging unit beyond the middle band
    pub long_unit: u64,
    /// Amount added per started unit
    pub step: u64,
}

impl DistanceSurcharge {
    pub fn new() -> Self {
        DistanceSurcharge {
            free_limit: 10,
            mid_limit: 50,
            mid_unit: 5,
            long_unit: 8,
            step: 100,
        }
    }

    /// Surcharge for a trip of `distance`.
    pub fn surcharge_for(&self, distance: u64) -> u64 {
        if distance <= self.free_limit {
            return 0;
        }
        if distance <= self.mid_limit {
            return (distance - self.free_limit).div_ceil(self.mid_unit) * self.step;
        }
        let mid_band = (self.mid_limit - self.free_limit).div_ceil(self.mid_unit) * self.step;
        mid_band + (distance - self.mid_limit).div_ceil(self.long_unit) * self.step
    }
}

impl Default for DistanceSurcharge {
    fn default() -> Self {
        Self::new()
    }
}

impl FareRule for DistanceSurcharge {
    fn apply(
        &self,
        fare: u64,
        passenger: &Passenger,
        subway: &Subway,
    ) -> Result<u64, DomainError> {
        let distance = subway.shortest_distance(passenger.start(), passenger.end())?;
        Ok(fare + self.surcharge_for(distance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Line, LineId, Station, StationId};

    #[test]
    fn default_bands() {
        let rule = DistanceSurcharge::default();
        assert_eq!(rule.free_limit, 10);
        assert_eq!(rule.mid_limit, 50);
        assert_eq!(rule.mid_unit, 5);
        assert_eq!(rule.long_unit, 8);
        assert_eq!(rule.step, 100);
    }

    #[test]
    fn short_trips_ride_free() {
        let rule = DistanceSurcharge::default();
        assert_eq!(rule.surcharge_for(0), 0);
        assert_eq!(rule.surcharge_for(9), 0);
        assert_eq!(rule.surcharge_for(10), 0);
    }

    #[test]
    fn middle_band_charges_per_started_unit() {
        let rule = DistanceSurcharge::default();
        assert_eq!(rule.surcharge_for(11), 100);
        assert_eq!(rule.surcharge_for(15), 100);
        assert_eq!(rule.surcharge_for(16), 200);
        assert_eq!(rule.surcharge_for(50), 800);
    }

    #[test]
    fn long_band_stacks_on_the_middle_band() {
        let rule = DistanceSurcharge::default();
        assert_eq!(rule.surcharge_for(51), 900);
        assert_eq!(rule.surcharge_for(58), 900);
        assert_eq!(rule.surcharge_for(59), 1000);
        assert_eq!(rule.surcharge_for(66), 1000);
        assert_eq!(rule.surcharge_for(67), 1100);
    }

    #[test]
    fn applies_the_shortest_route_distance() {
        let gyodae = Station::with_id(StationId::new(1), "교대역").unwrap();
        let gangnam = Station::with_id(StationId::new(2), "강남역").unwrap();
        let mut line = Line::with_id(LineId::new(2), "2호선", "초록색").unwrap();
        line.add_section(gyodae.clone(), gangnam.clone(), 15).unwrap();
        let subway = Subway::new(vec![line]);
        let passenger = Passenger::new(gyodae, gangnam, 30);

        let rule = DistanceSurcharge::default();
        assert_eq!(rule.apply(1250, &passenger, &subway).unwrap(), 1350);
    }
}
