//! Station identity and naming.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::DomainError;

/// Minimum station name length in characters, including the suffix.
const NAME_MIN_CHARS: usize = 2;
/// Maximum station name length in characters, including the suffix.
const NAME_MAX_CHARS: usize = 11;
/// Required final character of every station name.
const NAME_SUFFIX: char = '역';

/// Identifier of a persisted station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(u64);

impl StationId {
    pub fn new(value: u64) -> Self {
        StationId(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A valid station name.
///
/// Station names are 2 to 11 characters of Hangul syllables and ASCII
/// digits, ending in `'역'`. This type guarantees that any `Name` value
/// is valid by construction.
///
/// # Examples
///
/// ```
/// use subway_core::domain::Name;
///
/// let gangnam = Name::new("강남역").unwrap();
/// assert_eq!(gangnam.as_str(), "강남역");
///
/// // The suffix is required
/// assert!(Name::new("강남").is_err());
///
/// // Blank names are rejected
/// assert!(Name::new("  ").is_err());
///
/// // Only Hangul and digits are allowed
/// assert!(Name::new("gangnam역").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Parse a station name from a string.
    ///
    /// Checks run in order: blank, length, suffix, character set.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidStationName`] describing the first
    /// failed check.
    pub fn new(name: &str) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::InvalidStationName(
                "역 이름은 공백일 수 없습니다.".into(),
            ));
        }

        let chars = name.chars().count();
        if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&chars) {
            return Err(DomainError::InvalidStationName(
                "역 이름은 2글자에서 11글자까지 가능합니다.".into(),
            ));
        }

        if !name.ends_with(NAME_SUFFIX) {
            return Err(DomainError::InvalidStationName(
                "역 이름은 '역'으로 끝나야 합니다.".into(),
            ));
        }

        if !name.chars().all(is_hangul_or_digit) {
            return Err(DomainError::InvalidStationName(
                "역 이름은 한글, 숫자만 가능합니다.".into(),
            ));
        }

        Ok(Name(name.to_owned()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Hangul syllables cover U+AC00 through U+D7A3.
fn is_hangul_or_digit(c: char) -> bool {
    ('가'..='힣').contains(&c) || c.is_ascii_digit()
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A subway station.
///
/// A station starts out unsaved (`id` is `None`) and gains its identifier
/// when persisted. Equality follows persistence identity: saved stations
/// compare by id alone, unsaved stations compare by name, and a saved
/// station never equals an unsaved one.
///
/// # Examples
///
/// ```
/// use subway_core::domain::{Station, StationId};
///
/// let unsaved = Station::new("강남역").unwrap();
/// let saved = Station::with_id(StationId::new(1), "강남역").unwrap();
///
/// assert_eq!(unsaved.id(), None);
/// assert_ne!(unsaved, saved);
/// assert_eq!(saved, Station::with_id(StationId::new(1), "강남역").unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Station {
    id: Option<StationId>,
    name: Name,
}

impl Station {
    /// Creates an unsaved station.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidStationName`] if the name is invalid.
    pub fn new(name: &str) -> Result<Self, DomainError> {
        Ok(Station {
            id: None,
            name: Name::new(name)?,
        })
    }

    /// Creates a saved station carrying its persistence identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidStationName`] if the name is invalid.
    pub fn with_id(id: StationId, name: &str) -> Result<Self, DomainError> {
        Ok(Station {
            id: Some(id),
            name: Name::new(name)?,
        })
    }

    pub fn id(&self) -> Option<StationId> {
        self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        match (self.id, other.id) {
            (Some(a), Some(b)) => a == b,
            (None, None) => self.name == other.name,
            _ => false,
        }
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Saved stations hash by id, unsaved by name, so that hashing
        // stays consistent with the equality above.
        match self.id {
            Some(id) => {
                1u8.hash(state);
                id.hash(state);
            }
            None => {
                0u8.hash(state);
                self.name.hash(state);
            }
        }
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name.as_str())
    }
}
