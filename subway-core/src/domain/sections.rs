//! Ordered section storage for a line.

use std::ops::Index;

use super::section::Section;
use super::station::Station;

/// The ordered section rows of a line.
///
/// This is plain storage with position queries. It does not enforce the
/// chain invariants itself; [`Line`](super::Line) owns every mutation
/// and keeps the rows consistent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sections {
    items: Vec<Section>,
}

impl Sections {
    pub fn new() -> Self {
        Sections { items: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Appends a row at the end.
    pub fn push(&mut self, section: Section) {
        self.items.push(section);
    }

    /// Inserts a row at `index`, shifting later rows down.
    pub fn insert(&mut self, index: usize, section: Section) {
        self.items.insert(index, section);
    }

    /// Removes and returns the row at `index`.
    pub fn remove(&mut self, index: usize) -> Section {
        self.items.remove(index)
    }

    /// Removes every row.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn get(&self, index: usize) -> Option<&Section> {
        self.items.get(index)
    }

    /// Position of the row whose upward station is `station`.
    ///
    /// Because the tail station is the upward of the terminator row, the
    /// tail's position is always `len() - 1`.
    pub fn find_position(&self, station: &Station) -> Option<usize> {
        self.items.iter().position(|s| s.upward() == station)
    }

    /// The row whose upward station is `station`, if any.
    pub fn find_by_upward(&self, station: &Station) -> Option<&Section> {
        self.items.iter().find(|s| s.upward() == station)
    }

    /// Every station on the line in upward-to-downward order.
    ///
    /// Each row contributes its upward station; the terminator row
    /// contributes the tail.
    pub fn stations(&self) -> Vec<&Station> {
        self.items.iter().map(Section::upward).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.items.iter()
    }
}

impl Index<usize> for Sections {
    type Output = Section;

    fn index(&self, index: usize) -> &Section {
        &self.items[index]
    }
}
