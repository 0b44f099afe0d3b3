//! Passenger trips for fare queries.

use super::station::Station;

/// One passenger's trip: where they board, where they alight, and their
/// age in years. The age drives the discount step of fare calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passenger {
    start: Station,
    end: Station,
    age: u8,
}

impl Passenger {
    pub fn new(start: Station, end: Station, age: u8) -> Self {
        Passenger { start, end, age }
    }

    pub fn start(&self) -> &Station {
        &self.start
    }

    pub fn end(&self) -> &Station {
        &self.end
    }

    pub fn age(&self) -> u8 {
        self.age
    }
}
