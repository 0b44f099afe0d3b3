//! Age discount rule.

use crate::domain::{DomainError, Passenger, Subway};

use super::FareRule;

/// Age-based discount, meant as the final step of the pipeline.
///
/// Infants ride free. Children and youths pay a percentage of the fare
/// left after a flat deduction, rounded down by integer arithmetic.
/// Everyone else pays the fare unchanged.
#[derive(Debug, Clone)]
pub struct AgeDiscount {
    /// Ages below this ride free
    pub free_under: u8,
    /// Ages below this pay the child percentage
    pub child_under: u8,
    /// Ages below this pay the youth percentage
    pub youth_under: u8,
    /// Flat deduction applied before the percentage
    pub deduction: u64,
    /// Percentage of the deducted fare a child pays
    pub child_percent: u64,
    /// Percentage of the deducted fare a youth pays
    pub youth_percent: u64,
}

impl AgeDiscount {
    pub fn new() -> Self {
        AgeDiscount {
            free_under: 6,
            child_under: 13,
            youth_under: 19,
            deduction: 350,
            child_percent: 50,
            youth_percent: 80,
        }
    }

    fn discounted(&self, fare: u64, percent: u64) -> u64 {
        fare.saturating_sub(self.deduction) * percent / 100
    }
}

impl Default for AgeDiscount {
    fn default() -> Self {
        Self::new()
    }
}

impl FareRule for AgeDiscount {
    fn apply(
        &self,
        fare: u64,
        passenger: &Passenger,
        _subway: &Subway,
    ) -> Result<u64, DomainError> {
        let age = passenger.age();
        if age < self.free_under {
            return Ok(0);
        }
        if age < self.child_under {
            return Ok(self.discounted(fare, self.child_percent));
        }
        if age < self.youth_under {
            return Ok(self.discounted(fare, self.youth_percent));
        }
        Ok(fare)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Line, LineId, Station, StationId};

    fn subway() -> Subway {
        let mut line = Line::with_id(LineId::new(2), "2호선", "초록색").unwrap();
        line.add_section(
            Station::with_id(StationId::new(1), "교대역").unwrap(),
            Station::with_id(StationId::new(2), "강남역").unwrap(),
            5,
        )
        .unwrap();
        Subway::new(vec![line])
    }

    fn fare_at_age(age: u8, fare: u64) -> u64 {
        let passenger = Passenger::new(
            Station::with_id(StationId::new(1), "교대역").unwrap(),
            Station::with_id(StationId::new(2), "강남역").unwrap(),
            age,
        );
        AgeDiscount::default().apply(fare, &passenger, &subway()).unwrap()
    }

    #[test]
    fn default_bands() {
        let rule = AgeDiscount::default();
        assert_eq!(rule.free_under, 6);
        assert_eq!(rule.child_under, 13);
        assert_eq!(rule.youth_under, 19);
        assert_eq!(rule.deduction, 350);
        assert_eq!(rule.child_percent, 50);
        assert_eq!(rule.youth_percent, 80);
    }

    #[test]
    fn infants_ride_free() {
        assert_eq!(fare_at_age(0, 1350), 0);
        assert_eq!(fare_at_age(5, 1350), 0);
    }

    #[test]
    fn children_pay_half_after_the_deduction() {
        assert_eq!(fare_at_age(6, 1350), 500);
        assert_eq!(fare_at_age(12, 1350), 500);
    }

    #[test]
    fn youths_pay_eighty_percent_after_the_deduction() {
        assert_eq!(fare_at_age(13, 1350), 800);
        assert_eq!(fare_at_age(18, 1350), 800);
    }

    #[test]
    fn adults_pay_the_full_fare() {
        assert_eq!(fare_at_age(19, 1350), 1350);
        assert_eq!(fare_at_age(65, 1350), 1350);
    }

    #[test]
    fn integer_division_rounds_down() {
        // (1351 - 350) * 50 / 100 = 500.5, so a child pays 500.
        assert_eq!(fare_at_age(12, 1351), 500);
        // (1351 - 350) * 80 / 100 = 800.8, so a youth pays 800.
        assert_eq!(fare_at_age(18, 1351), 800);
    }

    #[test]
    fn deduction_never_underflows() {
        assert_eq!(fare_at_age(12, 100), 0);
        assert_eq!(fare_at_age(18, 0), 0);
    }
}
