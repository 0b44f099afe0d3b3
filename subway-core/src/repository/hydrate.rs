//! Hydration between rows and domain aggregates.
//!
//! Storage hands back line, section, and station rows with no ordering
//! guarantee. Hydration chains the section rows from head to tail,
//! resolves station names through the station directory, and caps the
//! result with a terminator. Projection is the reverse: a mutated line
//! becomes the real section rows an update has to diff against.

use std::collections::{HashMap, HashSet};

use crate::domain::{
    Color, DomainError, Line, LineId, LineName, Section, Sections, Station, StationId,
};

use super::entities::{LineEntity, SectionEntity, StationEntity};

/// Turns a station row into a domain station.
///
/// # Errors
///
/// Returns [`DomainError::InvalidStationName`] if the stored name no
/// longer passes validation.
pub fn station_from_entity(entity: &StationEntity) -> Result<Station, DomainError> {
    match entity.id {
        Some(id) => Station::with_id(StationId::new(id), &entity.name),
        None => Station::new(&entity.name),
    }
}

/// Chains unordered section rows into a line.
///
/// The rows must form a simple chain: exactly one head station that no
/// row leads into, every row's downward station continuing the chain,
/// no branching and no cycles. An empty row set yields an empty line.
///
/// # Errors
///
/// Returns [`DomainError::InvalidLine`] for rows that do not form a
/// simple chain, reference another line, reference a station missing
/// from `stations`, or belong to a line that was never saved. Row-level
/// validation failures, such as a zero distance or a corrupted station
/// name, propagate as their own error kinds.
pub fn hydrate_line(
    line: &LineEntity,
    sections: &[SectionEntity],
    stations: &[StationEntity],
) -> Result<Line, DomainError> {
    let name = LineName::new(&line.name)?;
    let color = Color::new(&line.color)?;
    let id = line.id.map(LineId::new);

    if sections.is_empty() {
        return Ok(Line::from_parts(
            id,
            name,
            color,
            line.surcharge,
            Sections::new(),
        ));
    }

    let line_id = line
        .id
        .ok_or_else(|| DomainError::InvalidLine("저장되지 않은 노선입니다.".into()))?;

    let mut by_upward: HashMap<u64, &SectionEntity> = HashMap::with_capacity(sections.len());
    let mut downwards: HashSet<u64> = HashSet::with_capacity(sections.len());
    for row in sections {
        if row.line_id != line_id {
            return Err(DomainError::InvalidLine(
                "다른 노선의 구간 정보입니다.".into(),
            ));
        }
        // A station leading to two places means the chain branches.
        if by_upward.insert(row.upward_station_id, row).is_some() {
            return Err(chain_error());
        }
        downwards.insert(row.downward_station_id);
    }

    // The head is the one upward station no row leads into. A cycle has
    // none; a broken chain has several.
    let mut heads = by_upward
        .keys()
        .filter(|station_id| !downwards.contains(station_id));
    let head = match (heads.next(), heads.next()) {
        (Some(&head), None) => head,
        _ => return Err(chain_error()),
    };

    let directory: HashMap<u64, &StationEntity> = stations
        .iter()
        .filter_map(|row| row.id.map(|station_id| (station_id, row)))
        .collect();

    let mut rows = Sections::new();
    let mut cursor = head;
    let mut consumed = 0usize;
    while let Some(row) = by_upward.get(&cursor) {
        let upward = resolve(&directory, row.upward_station_id)?;
        let downward = resolve(&directory, row.downward_station_id)?;
        rows.push(Section::real(upward, downward, row.distance)?);
        consumed += 1;
        cursor = row.downward_station_id;
        // Walking more rows than exist means the tail bent back into
        // the chain.
        if consumed > sections.len() {
            return Err(chain_error());
        }
    }

    if consumed != sections.len() {
        return Err(chain_error());
    }

    rows.push(Section::terminator(resolve(&directory, cursor)?));
    Ok(Line::from_parts(id, name, color, line.surcharge, rows))
}

/// Projects a line back into its real section rows.
///
/// The terminator row is structural and never stored.
///
/// # Errors
///
/// Returns [`DomainError::InvalidLine`] if the line was never saved and
/// [`DomainError::InvalidStation`] if any station on it was never
/// saved; rows need both identifiers.
pub fn project_sections(line: &Line) -> Result<Vec<SectionEntity>, DomainError> {
    let line_id = line
        .id()
        .ok_or_else(|| DomainError::InvalidLine("저장되지 않은 노선입니다.".into()))?
        .value();

    let mut rows = Vec::new();
    for section in line.sections().iter() {
        let Some((upward, downward, distance)) = section.as_real() else {
            continue;
        };
        rows.push(SectionEntity::new(
            line_id,
            require_id(upward)?,
            require_id(downward)?,
            distance,
        ));
    }
    Ok(rows)
}

fn chain_error() -> DomainError {
    DomainError::InvalidLine("노선 구간이 올바르게 연결되어 있지 않습니다.".into())
}

fn resolve(
    directory: &HashMap<u64, &StationEntity>,
    station_id: u64,
) -> Result<Station, DomainError> {
    let entity = directory.get(&station_id).ok_or_else(|| {
        DomainError::InvalidLine("구간의 역 정보를 찾을 수 없습니다.".into())
    })?;
    station_from_entity(entity)
}

fn require_id(station: &Station) -> Result<u64, DomainError> {
    station
        .id()
        .map(StationId::value)
        .ok_or_else(|| DomainError::InvalidStation("저장되지 않은 역입니다.".into()))
}
