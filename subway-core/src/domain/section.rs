//! Section rows of a line.

use super::line::LineId;
use super::station::Station;
use super::DomainError;

/// One row of a line's section list.
///
/// A line with k stations stores k rows: k - 1 real edges in
/// upward-to-downward order, followed by one terminator row whose upward
/// is the tail station. The terminator carries no downward station and
/// reports a distance of zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    /// A real edge between two adjacent stations on a line.
    Real {
        upward: Station,
        downward: Station,
        distance: u32,
    },
    /// The cap row after the last real edge.
    Terminator { upward: Station },
}

impl Section {
    /// Creates a real edge between two adjacent stations.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidDistance`] if `distance` is zero.
    pub fn real(upward: Station, downward: Station, distance: u32) -> Result<Self, DomainError> {
        if distance == 0 {
            return Err(DomainError::InvalidDistance(
                "역 간의 거리는 0보다 커야합니다.".into(),
            ));
        }
        Ok(Section::Real {
            upward,
            downward,
            distance,
        })
    }

    /// Creates the terminator row capping a line at `upward`.
    pub fn terminator(upward: Station) -> Self {
        Section::Terminator { upward }
    }

    /// The upward station of this row. Every row has one; for the
    /// terminator it is the tail station of the line.
    pub fn upward(&self) -> &Station {
        match self {
            Section::Real { upward, .. } => upward,
            Section::Terminator { upward } => upward,
        }
    }

    /// The downward station, or `None` for the terminator row.
    pub fn downward(&self) -> Option<&Station> {
        match self {
            Section::Real { downward, .. } => Some(downward),
            Section::Terminator { .. } => None,
        }
    }

    /// The edge distance; the terminator row reports zero.
    pub fn distance(&self) -> u32 {
        match self {
            Section::Real { distance, .. } => *distance,
            Section::Terminator { .. } => 0,
        }
    }

    /// Returns the parts of a real edge, or `None` for the terminator.
    pub fn as_real(&self) -> Option<(&Station, &Station, u32)> {
        match self {
            Section::Real {
                upward,
                downward,
                distance,
            } => Some((upward, downward, *distance)),
            Section::Terminator { .. } => None,
        }
    }

    pub fn is_terminator(&self) -> bool {
        matches!(self, Section::Terminator { .. })
    }
}

/// One edge of a found route, annotated with the line it rides.
///
/// The line id is `None` when the edge comes from a line that has never
/// been saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSection {
    upward: Station,
    downward: Station,
    distance: u32,
    line_id: Option<LineId>,
    line_surcharge: u64,
}

impl PathSection {
    pub fn new(
        upward: Station,
        downward: Station,
        distance: u32,
        line_id: Option<LineId>,
        line_surcharge: u64,
    ) -> Self {
        PathSection {
            upward,
            downward,
            distance,
            line_id,
            line_surcharge,
        }
    }

    pub fn upward(&self) -> &Station {
        &self.upward
    }

    pub fn downward(&self) -> &Station {
        &self.downward
    }

    pub fn distance(&self) -> u32 {
        self.distance
    }

    pub fn line_id(&self) -> Option<LineId> {
        self.line_id
    }

    pub fn line_surcharge(&self) -> u64 {
        self.line_surcharge
    }
}
