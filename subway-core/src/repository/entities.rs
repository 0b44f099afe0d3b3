//! Persistence row types.
//!
//! These are plain rows the storage layer reads and writes, carrying
//! raw identifiers and unvalidated text. Hydration turns them into
//! domain aggregates and back.

use serde::{Deserialize, Serialize};

/// A station row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StationEntity {
    /// Row identifier; `None` before the row is first saved.
    pub id: Option<u64>,
    pub name: String,
}

impl StationEntity {
    pub fn new(name: impl Into<String>) -> Self {
        StationEntity {
            id: None,
            name: name.into(),
        }
    }

    pub fn with_id(id: u64, name: impl Into<String>) -> Self {
        StationEntity {
            id: Some(id),
            name: name.into(),
        }
    }
}

/// A line header row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineEntity {
    /// Row identifier; `None` before the row is first saved.
    pub id: Option<u64>,
    pub name: String,
    pub color: String,
    /// Per-ride surcharge of the line.
    pub surcharge: u64,
}

impl LineEntity {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        LineEntity {
            id: None,
            name: name.into(),
            color: color.into(),
            surcharge: 0,
        }
    }

    pub fn with_id(
        id: u64,
        name: impl Into<String>,
        color: impl Into<String>,
        surcharge: u64,
    ) -> Self {
        LineEntity {
            id: Some(id),
            name: name.into(),
            color: color.into(),
            surcharge,
        }
    }
}

/// One real section row of a line.
///
/// Terminator rows are never stored; hydration reconstructs the cap
/// from the chain itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SectionEntity {
    pub line_id: u64,
    pub upward_station_id: u64,
    pub downward_station_id: u64,
    pub distance: u32,
}

impl SectionEntity {
    pub fn new(line_id: u64, upward_station_id: u64, downward_station_id: u64, distance: u32) -> Self {
        SectionEntity {
            line_id,
            upward_station_id,
            downward_station_id,
            distance,
        }
    }
}
