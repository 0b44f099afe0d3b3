//! Domain types for the subway network.
//!
//! This module contains the core domain model types that represent
//! validated subway data. All types enforce their invariants at
//! construction time, so code that receives these types can trust
//! their validity.

mod error;
mod line;
mod passenger;
mod section;
mod sections;
mod station;
mod subway;

pub use error::DomainError;
pub use line::{Color, Line, LineId, LineName};
pub use passenger::Passenger;
pub use section::{PathSection, Section};
pub use sections::Sections;
pub use station::{Name, Station, StationId};
pub use subway::Subway;
