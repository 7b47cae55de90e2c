//! Note identifiers and the two reference key maps.
//!
//! Keys follow a computer-keyboard piano layout: the home row is the white
//! keys from C4, the row above holds the black keys. Holding shift plays the
//! same pitch with the long envelope.

use std::fmt;

/// Symbolic name of one playable key, as typed on the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteId(pub char);

impl From<char> for NoteId {
    fn from(c: char) -> Self {
        Self(c)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which envelope a note is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteClass {
    Normal,
    Long,
}

/// Immutable mapping from note identifier to fundamental frequency.
#[derive(Debug, Clone, Copy)]
pub struct NoteTable {
    class: NoteClass,
    entries: &'static [(NoteId, f32)],
}

const NORMAL_NOTES: [(NoteId, f32); 16] = [
    (NoteId('a'), 261.6),
    (NoteId('w'), 277.2),
    (NoteId('s'), 293.7),
    (NoteId('e'), 311.1),
    (NoteId('d'), 329.6),
    (NoteId('f'), 349.2),
    (NoteId('t'), 367.0),
    (NoteId('g'), 392.0),
    (NoteId('y'), 415.3),
    (NoteId('h'), 440.0),
    (NoteId('u'), 466.2),
    (NoteId('j'), 493.9),
    (NoteId('k'), 523.3),
    (NoteId('l'), 587.3),
    (NoteId(';'), 659.3),
    (NoteId('\''), 698.5),
];

const LONG_NOTES: [(NoteId, f32); 16] = [
    (NoteId('A'), 261.6),
    (NoteId('W'), 277.2),
    (NoteId('S'), 293.7),
    (NoteId('E'), 311.1),
    (NoteId('D'), 329.6),
    (NoteId('F'), 349.2),
    (NoteId('T'), 367.0),
    (NoteId('G'), 392.0),
    (NoteId('Y'), 415.3),
    (NoteId('H'), 440.0),
    (NoteId('U'), 466.2),
    (NoteId('J'), 493.9),
    (NoteId('K'), 523.3),
    (NoteId('L'), 587.3),
    (NoteId(':'), 659.3),
    (NoteId('"'), 698.5),
];

impl NoteTable {
    /// Unshifted keys, short decay.
    pub const fn normal() -> Self {
        Self {
            class: NoteClass::Normal,
            entries: &NORMAL_NOTES,
        }
    }

    /// Shifted keys, slow decay.
    pub const fn long() -> Self {
        Self {
            class: NoteClass::Long,
            entries: &LONG_NOTES,
        }
    }

    /// Both reference tables.
    pub const fn all() -> [NoteTable; 2] {
        [Self::normal(), Self::long()]
    }

    pub fn class(&self) -> NoteClass {
        self.class
    }

    pub fn frequency(&self, id: NoteId) -> Option<f32> {
        self.entries
            .iter()
            .find(|(key, _)| *key == id)
            .map(|&(_, freq)| freq)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NoteId, f32)> {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_cover_the_same_pitches() {
        let normal: Vec<f32> = NoteTable::normal().iter().map(|(_, f)| f).collect();
        let long: Vec<f32> = NoteTable::long().iter().map(|(_, f)| f).collect();
        assert_eq!(normal.len(), 16);
        assert_eq!(normal, long);
    }

    #[test]
    fn tables_are_disjoint() {
        let normal = NoteTable::normal();
        for (id, _) in NoteTable::long().iter() {
            assert!(normal.frequency(id).is_none(), "{id} appears in both tables");
        }
    }

    #[test]
    fn lookup_by_key() {
        assert_eq!(NoteTable::normal().frequency(NoteId('h')), Some(440.0));
        assert_eq!(NoteTable::long().frequency(NoteId('"')), Some(698.5));
        assert_eq!(NoteTable::normal().frequency(NoteId('z')), None);
    }

    #[test]
    fn frequencies_are_positive() {
        for table in NoteTable::all() {
            assert!(table.iter().all(|(_, f)| f > 0.0));
        }
    }
}
