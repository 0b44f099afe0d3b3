//! In-memory storage for tests and development.

use std::collections::BTreeMap;

use tracing::debug;

use crate::domain::{DomainError, Line, LineId, Station, StationId};

use super::diff::SectionDiff;
use super::entities::{LineEntity, SectionEntity, StationEntity};
use super::hydrate::{hydrate_line, project_sections, station_from_entity};
use super::{LineRepository, StationRepository};

/// In-memory tables implementing both repository traits.
///
/// Rows live in id-ordered maps plus a flat section table, the same
/// shape a relational schema would take. Identifiers count up from 1.
#[derive(Debug)]
pub struct InMemoryStore {
    stations: BTreeMap<u64, StationEntity>,
    lines: BTreeMap<u64, LineEntity>,
    sections: Vec<SectionEntity>,
    next_station_id: u64,
    next_line_id: u64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        InMemoryStore {
            stations: BTreeMap::new(),
            lines: BTreeMap::new(),
            sections: Vec::new(),
            next_station_id: 1,
            next_line_id: 1,
        }
    }

    fn station_rows(&self) -> Vec<StationEntity> {
        self.stations.values().cloned().collect()
    }

    fn section_rows_of(&self, line_id: u64) -> Vec<SectionEntity> {
        self.sections
            .iter()
            .filter(|row| row.line_id == line_id)
            .cloned()
            .collect()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn unknown_station_id() -> DomainError {
    DomainError::InvalidStation("존재하지 않는 역 ID 입니다.".into())
}

fn unknown_line_id() -> DomainError {
    DomainError::InvalidLine("존재하지 않는 노선 ID 입니다.".into())
}

impl StationRepository for InMemoryStore {
    fn save(&mut self, station: Station) -> Result<Station, DomainError> {
        let id = self.next_station_id;
        self.next_station_id += 1;

        let entity = StationEntity::with_id(id, station.name().as_str());
        self.stations.insert(id, entity);
        Station::with_id(StationId::new(id), station.name().as_str())
    }

    fn find_by_id(&self, id: StationId) -> Result<Station, DomainError> {
        let entity = self
            .stations
            .get(&id.value())
            .ok_or_else(unknown_station_id)?;
        station_from_entity(entity)
    }

    fn find_all(&self) -> Result<Vec<Station>, DomainError> {
        self.stations.values().map(station_from_entity).collect()
    }

    fn delete(&mut self, id: StationId) -> Result<(), DomainError> {
        self.stations
            .remove(&id.value())
            .map(|_| ())
            .ok_or_else(unknown_station_id)
    }
}

impl LineRepository for InMemoryStore {
    fn save(&mut self, line: Line) -> Result<Line, DomainError> {
        let id = self.next_line_id;
        self.next_line_id += 1;

        let entity = LineEntity::with_id(
            id,
            line.name().as_str(),
            line.color().as_str(),
            line.surcharge(),
        );
        self.lines.insert(id, entity);
        Line::with_surcharge(
            LineId::new(id),
            line.name().as_str(),
            line.color().as_str(),
            line.surcharge(),
        )
    }

    fn find_by_id(&self, id: LineId) -> Result<Line, DomainError> {
        let entity = self.lines.get(&id.value()).ok_or_else(unknown_line_id)?;
        hydrate_line(
            entity,
            &self.section_rows_of(id.value()),
            &self.station_rows(),
        )
    }

    fn find_all(&self) -> Result<Vec<Line>, DomainError> {
        let stations = self.station_rows();
        self.lines
            .iter()
            .map(|(id, entity)| hydrate_line(entity, &self.section_rows_of(*id), &stations))
            .collect()
    }

    fn update(&mut self, line: &Line) -> Result<(), DomainError> {
        let id = line.id().ok_or_else(unknown_line_id)?.value();
        if !self.lines.contains_key(&id) {
            return Err(unknown_line_id());
        }

        let current = project_sections(line)?;
        let stored = self.section_rows_of(id);
        let diff = SectionDiff::between(&stored, &current);

        let header = LineEntity::with_id(
            id,
            line.name().as_str(),
            line.color().as_str(),
            line.surcharge(),
        );
        self.lines.insert(id, header);

        for removed in diff.removed() {
            self.sections.retain(|row| row != removed);
        }
        self.sections.extend(diff.added().iter().cloned());

        debug!(
            line = id,
            added = diff.added().len(),
            removed = diff.removed().len(),
            "applied section diff"
        );
        Ok(())
    }
}
