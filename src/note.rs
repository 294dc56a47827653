//! Note Table
//!
//! Static catalog of the 12 pitch classes and their 17 spellings,
//! with lookups by name and by semitone.

use std::fmt::Display;

const SEMITONES: i32 = 12;

/// A single sharp or flat in a note spelling.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Accidental {
    /// `#`, one semitone above the natural letter.
    Sharp,
    /// `b`, one semitone below the natural letter.
    Flat,
}

/// Which enharmonic spelling to prefer when a semitone has several.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Spelling {
    /// The natural letter if one exists, else the first catalog entry.
    #[default]
    NaturalPreferred,
    /// The sharp spelling, then the natural, then the first entry.
    SharpPreferred,
    /// The flat spelling, then the natural, then the first entry.
    FlatPreferred,
}

impl From<Accidental> for Spelling {
    fn from(accidental: Accidental) -> Self {
        match accidental {
            Accidental::Sharp => Spelling::SharpPreferred,
            Accidental::Flat => Spelling::FlatPreferred,
        }
    }
}

/// One cataloged note spelling.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Note {
    name: &'static str,
    semitone: u8,
    accidental: Option<Accidental>,
}

/// The 17 spellings covering all 12 semitones: 7 naturals plus a sharp
/// and a flat name for each of the 5 remaining pitch classes. Sharps
/// are declared before flats, making "first match" deterministic.
const CATALOG: [Note; 17] = [
    Note::natural("C", 0),
    Note::sharp("C#", 1),
    Note::flat("Db", 1),
    Note::natural("D", 2),
    Note::sharp("D#", 3),
    Note::flat("Eb", 3),
    Note::natural("E", 4),
    Note::natural("F", 5),
    Note::sharp("F#", 6),
    Note::flat("Gb", 6),
    Note::natural("G", 7),
    Note::sharp("G#", 8),
    Note::flat("Ab", 8),
    Note::natural("A", 9),
    Note::sharp("A#", 10),
    Note::flat("Bb", 10),
    Note::natural("B", 11),
];

impl Note {
    const fn natural(name: &'static str, semitone: u8) -> Note {
        Note {
            name,
            semitone,
            accidental: None,
        }
    }

    const fn sharp(name: &'static str, semitone: u8) -> Note {
        Note {
            name,
            semitone,
            accidental: Some(Accidental::Sharp),
        }
    }

    const fn flat(name: &'static str, semitone: u8) -> Note {
        Note {
            name,
            semitone,
            accidental: Some(Accidental::Flat),
        }
    }

    /// The spelled name, e.g. `"Eb"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Pitch class in `[0, 11]`, C = 0.
    pub fn semitone(&self) -> u8 {
        self.semitone
    }

    /// The accidental in this spelling, if any.
    pub fn accidental(&self) -> Option<Accidental> {
        self.accidental
    }

    /// Look up a spelling by name.
    ///
    /// The letter is case-insensitive; the accidental is not (`#` or a
    /// lowercase `b` only). Returns `None` for anything outside the
    /// catalog, double sharps and double flats included.
    pub fn by_name(name: &str) -> Option<Note> {
        let mut chars = name.chars();
        let letter = chars.next()?.to_ascii_uppercase();
        let accidental = match chars.as_str() {
            "" => None,
            "#" => Some(Accidental::Sharp),
            "b" => Some(Accidental::Flat),
            _ => return None,
        };
        CATALOG
            .iter()
            .find(|n| n.letter() == letter && n.accidental == accidental)
            .copied()
    }

    /// Resolve a semitone value to a spelling.
    ///
    /// `semitone` is reduced into `[0, 11]` first, so any value is
    /// accepted. Every semitone has at least one cataloged spelling, so
    /// the lookup always succeeds; `prefer` breaks enharmonic ties.
    pub fn by_semitone(semitone: i32, prefer: Spelling) -> Note {
        let pitch = semitone.rem_euclid(SEMITONES) as u8;
        let at_pitch = |n: &&Note| n.semitone == pitch;

        let wanted = match prefer {
            Spelling::NaturalPreferred => None,
            Spelling::SharpPreferred => Some(Accidental::Sharp),
            Spelling::FlatPreferred => Some(Accidental::Flat),
        };
        if let Some(accidental) = wanted {
            if let Some(n) = CATALOG
                .iter()
                .filter(at_pitch)
                .find(|n| n.accidental == Some(accidental))
            {
                return *n;
            }
        }
        if let Some(n) = CATALOG.iter().filter(at_pitch).find(|n| n.accidental.is_none()) {
            return *n;
        }
        // Every residue of 12 is cataloged.
        *CATALOG.iter().find(at_pitch).unwrap()
    }

    fn letter(&self) -> char {
        // Catalog names are non-empty ASCII.
        self.name.as_bytes()[0] as char
    }
}

impl Display for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
