//! Interval Engine
//!
//! Degree table, interval-specifier parsing, and the calculation that
//! spells the note reached from a root by a given interval.

use crate::note::{Note, Spelling};
use thiserror::Error;

/// Highest scale degree the engine understands.
const MAX_DEGREE: u8 = 13;

/// Errors from interval parsing and calculation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntervalError {
    /// The root note name matched no cataloged spelling.
    #[error("unknown root note `{name}`")]
    InvalidRoot {
        /// The root name as received.
        name: String,
    },

    /// The specifier broke the interval grammar or named an unknown degree.
    #[error("invalid interval `{spec}`: {msg}")]
    InvalidInterval {
        /// The specifier as received.
        spec: String,
        /// What made it invalid.
        msg: &'static str,
    },
}

/// Whether a degree's unaltered size is perfect or major.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Quality {
    /// Unisons, fourths, fifths, octaves and their compounds.
    Perfect,
    /// Seconds, thirds, sixths, sevenths and their compounds.
    Major,
}

/// (quality, semitones above the root) per degree 1..=13, compound
/// degrees folded into a single octave. Degree 13 reuses degree 6's
/// interval class.
const DEGREES: [(Quality, u8); MAX_DEGREE as usize] = [
    (Quality::Perfect, 0),  // 1
    (Quality::Major, 2),    // 2
    (Quality::Major, 4),    // 3
    (Quality::Perfect, 5),  // 4
    (Quality::Perfect, 7),  // 5
    (Quality::Major, 9),    // 6
    (Quality::Major, 11),   // 7
    (Quality::Perfect, 12), // 8
    (Quality::Major, 2),    // 9
    (Quality::Major, 4),    // 10
    (Quality::Perfect, 5),  // 11
    (Quality::Perfect, 7),  // 12
    (Quality::Major, 9),    // 13
];

/// An alteration written before a degree number.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Alteration {
    /// `#`, one semitone up.
    Sharp,
    /// `b`, one semitone down.
    Flat,
    /// `##`, two semitones up.
    DoubleSharp,
    /// `bb`, two semitones down.
    DoubleFlat,
}

/// Token table in longest-first order so `##`/`bb` win over `#`/`b`.
const ALTERATION_TOKENS: [(&str, Alteration); 4] = [
    ("##", Alteration::DoubleSharp),
    ("bb", Alteration::DoubleFlat),
    ("#", Alteration::Sharp),
    ("b", Alteration::Flat),
];

impl Alteration {
    /// Semitone offset this token applies to a degree's base size.
    pub fn offset(self) -> i32 {
        match self {
            Alteration::Sharp => 1,
            Alteration::Flat => -1,
            Alteration::DoubleSharp => 2,
            Alteration::DoubleFlat => -2,
        }
    }

    /// Spelling preference implied by the token's leading character.
    fn preference(self) -> Spelling {
        match self {
            Alteration::Sharp | Alteration::DoubleSharp => Spelling::SharpPreferred,
            Alteration::Flat | Alteration::DoubleFlat => Spelling::FlatPreferred,
        }
    }
}

/// A parsed interval specifier: an optional alteration plus a degree.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IntervalSpec {
    degree: u8,
    alteration: Option<Alteration>,
}

impl IntervalSpec {
    /// Parse a specifier such as `"5"`, `"b7"` or `"##5"`.
    ///
    /// The grammar is an optional alteration token (`##`, `bb`, `#`,
    /// `b`) followed by one or two degree digits, and nothing else.
    pub fn parse(spec: &str) -> Result<IntervalSpec, IntervalError> {
        let invalid = |msg: &'static str| IntervalError::InvalidInterval {
            spec: spec.to_string(),
            msg,
        };

        let (alteration, digits) = match ALTERATION_TOKENS
            .iter()
            .find(|(token, _)| spec.starts_with(token))
        {
            Some(&(token, alt)) => (Some(alt), &spec[token.len()..]),
            None => (None, spec),
        };

        if digits.is_empty() {
            return Err(invalid("no degree digits"));
        }
        if digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("expected an alteration followed only by digits"));
        }
        let degree: u8 = digits.parse().map_err(|_| invalid("unreadable degree"))?;
        if degree == 0 || degree > MAX_DEGREE {
            return Err(invalid("degree must be between 1 and 13"));
        }

        Ok(IntervalSpec { degree, alteration })
    }

    /// The scale degree, 1 through 13.
    pub fn degree(self) -> u8 {
        self.degree
    }

    /// The alteration, if one was written.
    pub fn alteration(self) -> Option<Alteration> {
        self.alteration
    }

    /// The degree's unaltered quality.
    pub fn quality(self) -> Quality {
        DEGREES[(self.degree - 1) as usize].0
    }

    /// Semitones above the root this specifier reaches, before octave
    /// reduction.
    fn semitones(self) -> i32 {
        let (quality, base) = DEGREES[(self.degree - 1) as usize];
        base as i32 + self.effective_offset(quality)
    }

    /// Double alterations on perfect degrees land one semitone less
    /// extreme than on major degrees; singles are unchanged.
    fn effective_offset(self, quality: Quality) -> i32 {
        match (quality, self.alteration) {
            (Quality::Perfect, Some(Alteration::DoubleSharp)) => 1,
            (Quality::Perfect, Some(Alteration::DoubleFlat)) => -1,
            (_, Some(alteration)) => alteration.offset(),
            (_, None) => 0,
        }
    }
}

/// Spell the note reached from `root` by the interval in `spec`.
///
/// An altered interval is spelled on the side of its alteration (`b`
/// flatward, `#` sharpward); an unaltered one inherits the root's
/// accidental. Pure: no I/O, no state.
pub fn note_at_interval(root: &str, spec: &str) -> Result<Note, IntervalError> {
    let root_note = Note::by_name(root).ok_or_else(|| IntervalError::InvalidRoot {
        name: root.to_string(),
    })?;
    let interval = IntervalSpec::parse(spec)?;

    let target = root_note.semitone() as i32 + interval.semitones();
    let prefer = match interval.alteration() {
        Some(alteration) => alteration.preference(),
        None => root_note
            .accidental()
            .map(Spelling::from)
            .unwrap_or_default(),
    };

    Ok(Note::by_semitone(target, prefer))
}
