//! Persistence contracts and the entity rows they exchange.
//!
//! The domain model never touches storage directly. Repositories accept
//! and return fully validated domain values; the flat [`StationEntity`],
//! [`LineEntity`] and [`SectionEntity`] rows underneath them carry only
//! raw identifiers and strings, so any backend that can store those rows
//! can sit behind the traits. [`InMemoryStore`] is the map-backed
//! implementation used by tests.

mod diff;
mod entities;
mod hydrate;
mod memory;

pub use diff::SectionDiff;
pub use entities::{LineEntity, SectionEntity, StationEntity};
pub use hydrate::{hydrate_line, project_sections, station_from_entity};
pub use memory::InMemoryStore;

use crate::domain::{DomainError, Line, LineId, Station, StationId};

/// Trait for storing and retrieving stations.
///
/// This abstraction allows the domain to be tested without a database.
pub trait StationRepository {
    /// Persist a station and return it with its assigned identifier.
    ///
    /// The input's identifier, if any, is ignored; the store always
    /// assigns a fresh one.
    fn save(&mut self, station: Station) -> Result<Station, DomainError>;

    /// Look up a station by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidStation`] if no station has the
    /// given identifier.
    fn find_by_id(&self, id: StationId) -> Result<Station, DomainError>;

    /// List every stored station in identifier order.
    fn find_all(&self) -> Result<Vec<Station>, DomainError>;

    /// Remove a station by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidStation`] if no station has the
    /// given identifier.
    fn delete(&mut self, id: StationId) -> Result<(), DomainError>;
}

/// Trait for storing and retrieving lines.
///
/// Saving persists the line header only; the section chain is written
/// back through [`LineRepository::update`], which diffs the stored rows
/// against the line's current sections.
pub trait LineRepository {
    /// Persist a line header and return the line with its assigned
    /// identifier and no sections.
    fn save(&mut self, line: Line) -> Result<Line, DomainError>;

    /// Load a line and rebuild its section chain.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidLine`] if no line has the given
    /// identifier or its stored rows do not form a single connected
    /// chain.
    fn find_by_id(&self, id: LineId) -> Result<Line, DomainError>;

    /// Load every stored line, hydrated, in identifier order.
    fn find_all(&self) -> Result<Vec<Line>, DomainError>;

    /// Write a line's header and section changes back to the store.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidLine`] if the line has never been
    /// saved, and [`DomainError::InvalidStation`] if any of its stations
    /// lacks an identifier.
    fn update(&mut self, line: &Line) -> Result<(), DomainError>;
}
