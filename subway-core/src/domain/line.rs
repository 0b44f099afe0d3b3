//! Line aggregate and its section topology.

use std::fmt;

use super::section::Section;
use super::sections::Sections;
use super::station::Station;
use super::DomainError;

/// Minimum line name length in characters, including the suffix.
const LINE_NAME_MIN_CHARS: usize = 2;
/// Maximum line name length in characters, including the suffix.
const LINE_NAME_MAX_CHARS: usize = 10;
/// Required final character of every line name.
const LINE_NAME_SUFFIX: char = '선';
/// Maximum colour length in characters.
const COLOR_MAX_CHARS: usize = 20;

/// Identifier of a persisted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(u64);

impl LineId {
    pub fn new(value: u64) -> Self {
        LineId(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A valid line name: 2 to 10 characters ending in `'선'`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct LineName(String);

impl LineName {
    /// Parse a line name from a string.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidLine`] describing the first failed
    /// check: blank, length, then suffix.
    pub fn new(name: &str) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::InvalidLine(
                "노선 이름은 공백일 수 없습니다.".into(),
            ));
        }

        let chars = name.chars().count();
        if !(LINE_NAME_MIN_CHARS..=LINE_NAME_MAX_CHARS).contains(&chars) {
            return Err(DomainError::InvalidLine(
                "노선 이름은 2글자에서 10글자까지 가능합니다.".into(),
            ));
        }

        if !name.ends_with(LINE_NAME_SUFFIX) {
            return Err(DomainError::InvalidLine(
                "노선 이름은 '선'으로 끝나야 합니다.".into(),
            ));
        }

        Ok(LineName(name.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineName({})", self.0)
    }
}

impl fmt::Display for LineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A valid line colour: non-blank, at most 20 characters.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
    /// Parse a line colour from a string.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidLine`] if the colour is blank or
    /// too long.
    pub fn new(color: &str) -> Result<Self, DomainError> {
        if color.trim().is_empty() {
            return Err(DomainError::InvalidLine(
                "노선 색상은 공백일 수 없습니다.".into(),
            ));
        }

        if color.chars().count() > COLOR_MAX_CHARS {
            return Err(DomainError::InvalidLine(
                "노선 색상은 20글자까지 가능합니다.".into(),
            ));
        }

        Ok(Color(color.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A subway line: an ordered chain of stations with per-edge distances.
///
/// The section rows always form a simple chain. Every real row's
/// downward station is the next row's upward station, the last row is a
/// terminator capping the tail, and no station appears as the upward of
/// more than one row. Both mutation operations validate their
/// preconditions before touching the rows, so a failed call leaves the
/// line unchanged.
///
/// # Examples
///
/// ```
/// use subway_core::domain::{Line, LineId, Station, StationId};
///
/// let mut line = Line::with_id(LineId::new(2), "2호선", "초록색").unwrap();
/// let gyodae = Station::with_id(StationId::new(1), "교대역").unwrap();
/// let gangnam = Station::with_id(StationId::new(2), "강남역").unwrap();
/// line.add_section(gyodae.clone(), gangnam.clone(), 20).unwrap();
///
/// let names: Vec<&str> = line.stations().iter().map(|s| s.name().as_str()).collect();
/// assert_eq!(names, vec!["교대역", "강남역"]);
///
/// line.delete_station(&gangnam).unwrap();
/// assert!(line.stations().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    id: Option<LineId>,
    name: LineName,
    color: Color,
    surcharge: u64,
    sections: Sections,
}

impl Line {
    /// Creates an unsaved line with no stations and no surcharge.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidLine`] if the name or colour is
    /// invalid.
    pub fn new(name: &str, color: &str) -> Result<Self, DomainError> {
        Ok(Line {
            id: None,
            name: LineName::new(name)?,
            color: Color::new(color)?,
            surcharge: 0,
            sections: Sections::new(),
        })
    }

    /// Creates a saved line with no stations and no surcharge.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidLine`] if the name or colour is
    /// invalid.
    pub fn with_id(id: LineId, name: &str, color: &str) -> Result<Self, DomainError> {
        Ok(Line {
            id: Some(id),
            ..Line::new(name, color)?
        })
    }

    /// Creates a saved line carrying a per-ride surcharge.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidLine`] if the name or colour is
    /// invalid.
    pub fn with_surcharge(
        id: LineId,
        name: &str,
        color: &str,
        surcharge: u64,
    ) -> Result<Self, DomainError> {
        Ok(Line {
            surcharge,
            ..Line::with_id(id, name, color)?
        })
    }

    /// Assembles a line from already validated parts. Used by hydration,
    /// which checks the chain shape before calling this.
    pub(crate) fn from_parts(
        id: Option<LineId>,
        name: LineName,
        color: Color,
        surcharge: u64,
        sections: Sections,
    ) -> Self {
        Line {
            id,
            name,
            color,
            surcharge,
            sections,
        }
    }

    pub fn id(&self) -> Option<LineId> {
        self.id
    }

    pub fn name(&self) -> &LineName {
        &self.name
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    pub fn surcharge(&self) -> u64 {
        self.surcharge
    }

    pub fn sections(&self) -> &Sections {
        &self.sections
    }

    /// Every station on the line in upward-to-downward order.
    pub fn stations(&self) -> Vec<&Station> {
        self.sections.stations()
    }

    /// Registers a section between `upward` and `downward`.
    ///
    /// On an empty line this lays down the first two stations. Otherwise
    /// exactly one of the two stations must already be on the line: the
    /// new station is attached before the head, after the tail, or
    /// spliced into an existing section, splitting its distance.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidSection`] if both stations are
    /// already on the line, neither is, or the two stations are the
    /// same. Returns [`DomainError::InvalidDistance`] if `distance` is
    /// zero, or if a splice does not fit strictly inside the section it
    /// splits.
    pub fn add_section(
        &mut self,
        upward: Station,
        downward: Station,
        distance: u32,
    ) -> Result<(), DomainError> {
        if upward == downward {
            return Err(DomainError::InvalidSection(
                "상행역과 하행역은 같을 수 없습니다.".into(),
            ));
        }

        if self.sections.is_empty() {
            let section = Section::real(upward, downward.clone(), distance)?;
            self.sections.push(section);
            self.sections.push(Section::terminator(downward));
            return Ok(());
        }

        let upward_pos = self.sections.find_position(&upward);
        let downward_pos = self.sections.find_position(&downward);
        match (upward_pos, downward_pos) {
            (Some(_), Some(_)) => Err(DomainError::InvalidSection(
                "두 역이 이미 노선에 존재합니다.".into(),
            )),
            (None, None) => Err(DomainError::InvalidSection(
                "연결할 역 정보가 없습니다.".into(),
            )),
            (None, Some(0)) => {
                let section = Section::real(upward, downward, distance)?;
                self.sections.insert(0, section);
                Ok(())
            }
            (None, Some(pos)) => self.insert_before(upward, downward, distance, pos),
            (Some(pos), None) => match self.sections[pos].clone() {
                Section::Terminator { .. } => self.extend_tail(upward, downward, distance, pos),
                Section::Real {
                    downward: chain_downward,
                    distance: old_distance,
                    ..
                } => self.insert_after(upward, downward, distance, pos, chain_downward, old_distance),
            },
        }
    }

    /// Attaches a new upward station by splitting the section that ends
    /// at `downward`, which sits at `downward_pos` in the chain.
    fn insert_before(
        &mut self,
        upward: Station,
        downward: Station,
        distance: u32,
        downward_pos: usize,
    ) -> Result<(), DomainError> {
        let target = downward_pos - 1;
        let old_distance = self.sections[target].distance();
        if distance >= old_distance {
            return Err(DomainError::InvalidDistance(
                "추가될 역의 거리는 추가될 위치의 두 역사이의 거리보다 작아야합니다.".into(),
            ));
        }

        let chain_upward = self.sections[target].upward().clone();
        let left = Section::real(chain_upward, upward.clone(), old_distance - distance)?;
        let right = Section::real(upward, downward, distance)?;
        self.sections.remove(target);
        self.sections.insert(target, right);
        self.sections.insert(target, left);
        Ok(())
    }

    /// Attaches a new downward station by splitting the section that
    /// starts at `upward`, which sits at `pos` in the chain.
    fn insert_after(
        &mut self,
        upward: Station,
        downward: Station,
        distance: u32,
        pos: usize,
        chain_downward: Station,
        old_distance: u32,
    ) -> Result<(), DomainError> {
        if distance >= old_distance {
            return Err(DomainError::InvalidDistance(
                "추가될 역의 거리는 추가될 위치의 두 역사이의 거리보다 작아야합니다.".into(),
            ));
        }

        let left = Section::real(upward, downward.clone(), distance)?;
        let right = Section::real(downward, chain_downward, old_distance - distance)?;
        self.sections.remove(pos);
        self.sections.insert(pos, right);
        self.sections.insert(pos, left);
        Ok(())
    }

    /// Extends the line past its tail, moving the terminator to the new
    /// downward station.
    fn extend_tail(
        &mut self,
        upward: Station,
        downward: Station,
        distance: u32,
        cap_index: usize,
    ) -> Result<(), DomainError> {
        let section = Section::real(upward, downward.clone(), distance)?;
        self.sections.remove(cap_index);
        self.sections.push(section);
        self.sections.push(Section::terminator(downward));
        Ok(())
    }

    /// Removes `station` from the line, reconnecting its neighbours.
    ///
    /// Deleting either station of a two-station line empties the line.
    /// Deleting an interior station merges its two sections, adding
    /// their distances.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidStation`] if the station is not on
    /// the line.
    pub fn delete_station(&mut self, station: &Station) -> Result<(), DomainError> {
        let pos = self.sections.find_position(station).ok_or_else(|| {
            DomainError::InvalidStation("노선에 존재하지 않는 역입니다.".into())
        })?;

        // A two-station line cannot keep a single orphan station.
        if self.sections.len() == 2 {
            self.sections.clear();
            return Ok(());
        }

        if pos == 0 {
            self.sections.remove(0);
            return Ok(());
        }

        match self.sections[pos].clone() {
            Section::Terminator { .. } => {
                self.sections.remove(pos);
                let last = self.sections.remove(pos - 1);
                self.sections.push(Section::terminator(last.upward().clone()));
                Ok(())
            }
            Section::Real {
                downward: rear_downward,
                distance: rear_distance,
                ..
            } => {
                let front_upward = self.sections[pos - 1].upward().clone();
                let front_distance = self.sections[pos - 1].distance();
                let merged =
                    Section::real(front_upward, rear_downward, front_distance + rear_distance)?;
                self.sections.remove(pos);
                self.sections.remove(pos - 1);
                self.sections.insert(pos - 1, merged);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationId;

    fn station(id: u64, name: &str) -> Station {
        Station::with_id(StationId::new(id), name).unwrap()
    }

    fn line() -> Line {
        Line::with_id(LineId::new(2), "2호선", "초록색").unwrap()
    }

    fn station_names(line: &Line) -> Vec<&str> {
        line.stations()
            .into_iter()
            .map(|s| s.name().as_str())
            .collect()
    }

    fn real_distances(line: &Line) -> Vec<u32> {
        line.sections()
            .iter()
            .filter(|s| !s.is_terminator())
            .map(Section::distance)
            .collect()
    }

    #[test]
    fn line_name_rules() {
        assert!(LineName::new("2호선").is_ok());
        assert!(LineName::new("신분당선").is_ok());

        let err = LineName::new("  ").unwrap_err();
        assert_eq!(err.to_string(), "노선 이름은 공백일 수 없습니다.");
        let err = LineName::new("선").unwrap_err();
        assert_eq!(err.to_string(), "노선 이름은 2글자에서 10글자까지 가능합니다.");
        let err = LineName::new("가나다라마바사아자차선").unwrap_err();
        assert_eq!(err.to_string(), "노선 이름은 2글자에서 10글자까지 가능합니다.");
        let err = LineName::new("2호").unwrap_err();
        assert_eq!(err.to_string(), "노선 이름은 '선'으로 끝나야 합니다.");
    }

    #[test]
    fn color_rules() {
        assert!(Color::new("초록색").is_ok());

        let err = Color::new(" ").unwrap_err();
        assert_eq!(err.to_string(), "노선 색상은 공백일 수 없습니다.");
        let err = Color::new("가나다라마바사아자차카타파하가나다라마바사").unwrap_err();
        assert_eq!(err.to_string(), "노선 색상은 20글자까지 가능합니다.");
    }

    #[test]
    fn first_section_lays_down_both_stations() {
        let mut line = line();
        line.add_section(station(1, "교대역"), station(2, "강남역"), 20)
            .unwrap();

        assert_eq!(station_names(&line), vec!["교대역", "강남역"]);
        assert_eq!(real_distances(&line), vec![20]);
        assert!(line.sections()[line.sections().len() - 1].is_terminator());
    }

    #[test]
    fn new_head_is_prepended() {
        let mut line = line();
        line.add_section(station(2, "강남역"), station(3, "역삼역"), 5)
            .unwrap();
        line.add_section(station(1, "교대역"), station(2, "강남역"), 20)
            .unwrap();

        assert_eq!(station_names(&line), vec!["교대역", "강남역", "역삼역"]);
        assert_eq!(real_distances(&line), vec![20, 5]);
    }

    #[test]
    fn new_tail_moves_the_terminator() {
        let mut line = line();
        line.add_section(station(1, "교대역"), station(2, "강남역"), 20)
            .unwrap();
        line.add_section(station(2, "강남역"), station(3, "역삼역"), 5)
            .unwrap();

        assert_eq!(station_names(&line), vec!["교대역", "강남역", "역삼역"]);
        assert_eq!(real_distances(&line), vec![20, 5]);
        assert_eq!(
            line.sections().find_position(&station(3, "역삼역")),
            Some(line.sections().len() - 1)
        );
    }

    #[test]
    fn splice_after_existing_upward_splits_the_distance() {
        let mut line = line();
        line.add_section(station(1, "교대역"), station(2, "강남역"), 20)
            .unwrap();
        line.add_section(station(1, "교대역"), station(3, "역삼역"), 5)
            .unwrap();

        assert_eq!(station_names(&line), vec!["교대역", "역삼역", "강남역"]);
        assert_eq!(real_distances(&line), vec![5, 15]);
    }

    #[test]
    fn splice_before_existing_downward_splits_the_distance() {
        let mut line = line();
        line.add_section(station(1, "교대역"), station(2, "강남역"), 20)
            .unwrap();
        line.add_section(station(3, "역삼역"), station(2, "강남역"), 5)
            .unwrap();

        assert_eq!(station_names(&line), vec!["교대역", "역삼역", "강남역"]);
        assert_eq!(real_distances(&line), vec![15, 5]);
    }

    #[test]
    fn splice_distance_must_fit_strictly_inside() {
        let mut line = line();
        line.add_section(station(1, "교대역"), station(2, "강남역"), 20)
            .unwrap();

        let err = line
            .add_section(station(1, "교대역"), station(3, "역삼역"), 20)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "추가될 역의 거리는 추가될 위치의 두 역사이의 거리보다 작아야합니다."
        );
        let err = line
            .add_section(station(3, "역삼역"), station(2, "강남역"), 25)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "추가될 역의 거리는 추가될 위치의 두 역사이의 거리보다 작아야합니다."
        );

        // Failed calls leave the line unchanged.
        assert_eq!(station_names(&line), vec!["교대역", "강남역"]);
        assert_eq!(real_distances(&line), vec![20]);
    }

    #[test]
    fn both_stations_present_is_rejected() {
        let mut line = line();
        line.add_section(station(1, "교대역"), station(2, "강남역"), 20)
            .unwrap();

        let err = line
            .add_section(station(2, "강남역"), station(1, "교대역"), 5)
            .unwrap_err();
        assert_eq!(err.to_string(), "두 역이 이미 노선에 존재합니다.");
    }

    #[test]
    fn unrelated_stations_are_rejected() {
        let mut line = line();
        line.add_section(station(1, "교대역"), station(2, "강남역"), 20)
            .unwrap();

        let err = line
            .add_section(station(3, "역삼역"), station(4, "선릉역"), 5)
            .unwrap_err();
        assert_eq!(err.to_string(), "연결할 역 정보가 없습니다.");
    }

    #[test]
    fn identical_stations_are_rejected() {
        let mut line = line();
        let err = line
            .add_section(station(1, "교대역"), station(1, "교대역"), 5)
            .unwrap_err();
        assert_eq!(err.to_string(), "상행역과 하행역은 같을 수 없습니다.");
    }

    #[test]
    fn zero_distance_is_rejected() {
        let mut line = line();
        let err = line
            .add_section(station(1, "교대역"), station(2, "강남역"), 0)
            .unwrap_err();
        assert_eq!(err.to_string(), "역 간의 거리는 0보다 커야합니다.");
    }

    fn three_station_line() -> Line {
        let mut line = line();
        line.add_section(station(1, "교대역"), station(2, "강남역"), 20)
            .unwrap();
        line.add_section(station(2, "강남역"), station(3, "역삼역"), 5)
            .unwrap();
        line
    }

    #[test]
    fn deleting_the_head_drops_its_section() {
        let mut line = three_station_line();
        line.delete_station(&station(1, "교대역")).unwrap();

        assert_eq!(station_names(&line), vec!["강남역", "역삼역"]);
        assert_eq!(real_distances(&line), vec![5]);
    }

    #[test]
    fn deleting_the_tail_moves_the_terminator_back() {
        let mut line = three_station_line();
        line.delete_station(&station(3, "역삼역")).unwrap();

        assert_eq!(station_names(&line), vec!["교대역", "강남역"]);
        assert_eq!(real_distances(&line), vec![20]);
        assert_eq!(
            line.sections().find_position(&station(2, "강남역")),
            Some(line.sections().len() - 1)
        );
    }

    #[test]
    fn deleting_an_interior_station_merges_distances() {
        let mut line = three_station_line();
        line.delete_station(&station(2, "강남역")).unwrap();

        assert_eq!(station_names(&line), vec!["교대역", "역삼역"]);
        assert_eq!(real_distances(&line), vec![25]);
    }

    #[test]
    fn deleting_from_a_two_station_line_empties_it() {
        let mut line = line();
        line.add_section(station(1, "교대역"), station(2, "강남역"), 20)
            .unwrap();

        line.delete_station(&station(1, "교대역")).unwrap();
        assert!(line.sections().is_empty());
        assert!(line.stations().is_empty());
    }

    #[test]
    fn deleting_an_absent_station_is_rejected() {
        let mut line = three_station_line();
        let err = line.delete_station(&station(9, "잠실역")).unwrap_err();
        assert_eq!(err.to_string(), "노선에 존재하지 않는 역입니다.");
    }

    #[test]
    fn add_then_delete_restores_the_line() {
        let mut line = three_station_line();
        let snapshot = line.clone();

        line.add_section(station(2, "강남역"), station(4, "선릉역"), 3)
            .unwrap();
        line.delete_station(&station(4, "선릉역")).unwrap();

        assert_eq!(line, snapshot);
    }

    #[test]
    fn add_then_delete_head_or_tail_restores_the_line() {
        let mut line = three_station_line();
        let snapshot = line.clone();

        line.add_section(station(4, "선릉역"), station(1, "교대역"), 7)
            .unwrap();
        line.delete_station(&station(4, "선릉역")).unwrap();
        assert_eq!(line, snapshot);

        line.add_section(station(3, "역삼역"), station(4, "선릉역"), 7)
            .unwrap();
        line.delete_station(&station(4, "선릉역")).unwrap();
        assert_eq!(line, snapshot);
    }

    #[test]
    fn grows_splices_rejects_and_shrinks_in_sequence() {
        let mut line = line();
        line.add_section(station(1, "교대역"), station(2, "강남역"), 20)
            .unwrap();

        line.add_section(station(1, "교대역"), station(3, "역삼역"), 8)
            .unwrap();
        assert_eq!(station_names(&line), vec!["교대역", "역삼역", "강남역"]);
        assert_eq!(real_distances(&line), vec![8, 12]);

        // The section starting at 교대역 now measures 8, so another 8
        // does not fit strictly inside it.
        let err = line
            .add_section(station(1, "교대역"), station(4, "선릉역"), 8)
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidDistance(_)));

        line.delete_station(&station(3, "역삼역")).unwrap();
        assert_eq!(station_names(&line), vec!["교대역", "강남역"]);
        assert_eq!(real_distances(&line), vec![20]);
    }
}
